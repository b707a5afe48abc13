// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for bwc-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. --config FILE (repeatable, in order)
//! 3. local bwc.toml (cwd)
//! 4. BWC_* env vars
//! 5. --set section.key=value
//! 6. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! BWC_GLOBAL__OFFLINE=true           → global.offline = true
//! BWC_VERSIONS__CURRENT=6.0.0        → versions.current = "6.0.0"
//! BWC_BWC__TESTS_ENABLED=false       → bwc.tests_enabled = false
//! ```
//!
//! # Project Graph
//!
//! ```toml
//! [[projects]]
//! path = ":core"
//! dependencies = [":libs:x-content", "org.example:test-framework:6.0.0"]
//! tasks = ["test", "integTest"]
//!
//! [[substitutions]]
//! coordinate = "org.example:test-framework:6.0.0"
//! project = ":test:framework"
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::error::{ConfigError, Result, VersionError};
use crate::version::{ConstantFormat, Version};

use loader::ConfigLoader;
use types::{
    BwcConfig, GlobalConfig, OrderingConfig, ProjectConfig, RegistryConfig, Substitution,
    VersionsConfig,
};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Version file settings.
    pub versions: VersionsConfig,
    /// Published-version registry.
    pub registry: RegistryConfig,
    /// Backward-compatibility test switches.
    pub bwc: BwcConfig,
    /// Cross-project task ordering.
    pub ordering: OrderingConfig,
    /// Modules of the build.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<ProjectConfig>,
    /// Coordinate-to-project substitutions.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub substitutions: Vec<Substitution>,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bwc_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("bwc.toml")
    ///     .with_env_prefix("BWC")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// The version under development, with any `-SNAPSHOT` suffix dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if `versions.current` is unset or malformed.
    pub fn current_version(&self) -> Result<Version> {
        let raw = self
            .versions
            .current
            .as_deref()
            .ok_or_else(|| ConfigError::MissingKey {
                section: "versions".to_string(),
                key: "current".to_string(),
            })?;

        let parsed: Version = raw.parse().map_err(|e: VersionError| ConfigError::InvalidValue {
            section: "versions".to_string(),
            key: "current".to_string(),
            message: e.to_string(),
        })?;

        Ok(Version::new(parsed.major(), parsed.minor(), parsed.bugfix()))
    }

    /// The declaration format configured for the version file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured names do not form a valid pattern.
    pub fn declaration_format(&self) -> Result<ConstantFormat> {
        ConstantFormat::with_names(
            &self.versions.constant_type,
            &self.versions.constant_prefix,
        )
    }

    /// Validate cross-field invariants.
    ///
    /// # Errors
    ///
    /// Returns an error for duplicate project paths or an empty constant type.
    pub fn validate(&self) -> Result<()> {
        if self.versions.constant_type.is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "versions".to_string(),
                key: "constant_type".to_string(),
                message: "must not be empty".to_string(),
            }
            .into());
        }

        let mut seen = BTreeSet::new();
        for project in &self.projects {
            if !seen.insert(project.path.as_str()) {
                return Err(ConfigError::InvalidValue {
                    section: "projects".to_string(),
                    key: "path".to_string(),
                    message: format!("duplicate project '{}'", project.path),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_versions_options(&mut options);
        options.insert("registry.url".into(), self.registry.url.clone());
        options.insert(
            "bwc.tests_enabled".into(),
            self.bwc.tests_enabled.to_string(),
        );
        options.insert("ordering.tasks".into(), self.ordering.tasks.join(", "));
        options.insert(
            "ordering.skip_projects".into(),
            self.ordering.skip_projects.join(", "),
        );
        options.insert("projects".into(), self.projects.len().to_string());
        options.insert(
            "substitutions".into(),
            self.substitutions.len().to_string(),
        );

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert(
            "global.log_format".into(),
            self.global.log_format.to_string(),
        );
        options.insert("global.offline".into(), self.global.offline.to_string());
    }

    fn format_versions_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "versions.file".into(),
            self.versions.file.display().to_string(),
        );
        options.insert(
            "versions.current".into(),
            self.versions.current.clone().unwrap_or_default(),
        );
        options.insert(
            "versions.constant_type".into(),
            self.versions.constant_type.clone(),
        );
        options.insert(
            "versions.constant_prefix".into(),
            self.versions.constant_prefix.clone(),
        );
    }
}
