// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.
//!
//! ```text
//! Config: GlobalConfig, VersionsConfig, RegistryConfig, BwcConfig, OrderingConfig
//! projects:      [[projects]] path / dependencies / tasks
//! substitutions: [[substitutions]] coordinate --> project
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::{LogFormat, LogLevel};

/// Global options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for stdout output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file, no file logging when unset.
    pub log_file: Option<PathBuf>,
    /// File log line format.
    pub log_format: LogFormat,
    /// Refuse network access.
    pub offline: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
            log_format: LogFormat::default(),
            offline: false,
        }
    }
}

/// Where version constants are declared and how they look.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VersionsConfig {
    /// Source file holding the version constants.
    pub file: PathBuf,
    /// Version under development, `-SNAPSHOT` suffix allowed.
    pub current: Option<String>,
    /// Declared type of the constants.
    pub constant_type: String,
    /// Name prefix of the constants.
    pub constant_prefix: String,
}

impl Default for VersionsConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("core/src/main/java/org/elasticsearch/Version.java"),
            current: None,
            constant_type: "Version".to_string(),
            constant_prefix: "V_".to_string(),
        }
    }
}

/// Published-version registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// URL of the `maven-metadata.xml` document.
    pub url: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            url: "https://repo1.maven.org/maven2/org/elasticsearch/elasticsearch/maven-metadata.xml"
                .to_string(),
        }
    }
}

/// Backward-compatibility test switches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BwcConfig {
    /// Flip to `false` while backporting; `verify-bwc-tests` fails until restored.
    pub tests_enabled: bool,
}

impl Default for BwcConfig {
    fn default() -> Self {
        Self {
            tests_enabled: true,
        }
    }
}

/// Cross-project task ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrderingConfig {
    /// Task names that must run after the same task of upstream projects.
    pub tasks: Vec<String>,
    /// Projects that get no ordering edges.
    pub skip_projects: Vec<String>,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            tasks: vec!["test".to_string(), "integTest".to_string()],
            skip_projects: vec![":test:framework".to_string()],
        }
    }
}

/// A module of the build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project path, e.g. `:core`.
    pub path: String,
    /// Project paths (`:x:y`) or external `group:name:version` coordinates.
    pub dependencies: Vec<String>,
    /// Tasks the project defines.
    pub tasks: Vec<String>,
}

/// Maps an external coordinate to the project that builds it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Substitution {
    /// `group:name:version`.
    pub coordinate: String,
    /// Project path.
    pub project: String,
}
