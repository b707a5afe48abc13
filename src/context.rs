// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-invocation build context.
//!
//! ```text
//! Config + BUILD_METADATA + --task/-D
//!        |
//!        v
//! BuildContext::load()   (once, read-only afterwards)
//!   config, compat windows, metadata, ide mode
//!        |
//!        v
//! &BuildContext --> every command
//! ```

use std::collections::BTreeMap;

use anyhow::Context;
use serde::Serialize;

use crate::compat::CompatVersions;
use crate::config::Config;
use crate::error::Result;
use crate::metadata::BuildMetadata;
use crate::version::{Version, VersionLog};

/// IDE integrations requested for this invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IdeMode {
    pub eclipse: bool,
    pub idea: bool,
}

impl IdeMode {
    /// Detects IDE mode from requested task names and launcher properties.
    #[must_use]
    pub fn detect(tasks: &[String], properties: &BTreeMap<String, String>) -> Self {
        let requested = |names: &[&str]| tasks.iter().any(|t| names.contains(&t.as_str()));

        Self {
            eclipse: properties.contains_key("eclipse.launcher")
                || requested(&["eclipse", "cleanEclipse"]),
            idea: properties.contains_key("idea.active") || requested(&["idea", "cleanIdea"]),
        }
    }
}

/// Everything the commands need, computed once up front.
#[derive(Debug, Clone)]
pub struct BuildContext {
    config: Config,
    compat: CompatVersions,
    metadata: BuildMetadata,
    ide: IdeMode,
}

impl BuildContext {
    /// Reads the version file named by the config and derives the
    /// compatibility windows.
    ///
    /// # Errors
    ///
    /// Returns an error if `versions.current` is missing or invalid, the
    /// version file cannot be read, or its constants are out of order.
    pub fn load(config: Config, metadata: BuildMetadata, ide: IdeMode) -> Result<Self> {
        let current = config.current_version()?;
        let format = config.declaration_format()?;
        let log = VersionLog::from_file(&config.versions.file, current, &format).with_context(
            || {
                format!(
                    "failed to read versions from {}",
                    config.versions.file.display()
                )
            },
        )?;

        Ok(Self::from_parts(
            config,
            CompatVersions::from_log(log),
            metadata,
            ide,
        ))
    }

    #[must_use]
    pub const fn from_parts(
        config: Config,
        compat: CompatVersions,
        metadata: BuildMetadata,
        ide: IdeMode,
    ) -> Self {
        Self {
            config,
            compat,
            metadata,
            ide,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub const fn compat(&self) -> &CompatVersions {
        &self.compat
    }

    #[must_use]
    pub const fn metadata(&self) -> &BuildMetadata {
        &self.metadata
    }

    #[must_use]
    pub const fn ide(&self) -> IdeMode {
        self.ide
    }

    #[must_use]
    pub const fn current(&self) -> Version {
        self.compat.current()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::IdeMode;

    fn tasks(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_ide_mode_from_tasks() {
        let none = IdeMode::detect(&tasks(&["test", "check"]), &BTreeMap::new());
        assert_eq!(none, IdeMode::default());

        let eclipse = IdeMode::detect(&tasks(&["cleanEclipse"]), &BTreeMap::new());
        assert!(eclipse.eclipse && !eclipse.idea);

        let both = IdeMode::detect(&tasks(&["eclipse", "idea"]), &BTreeMap::new());
        assert!(both.eclipse && both.idea);
    }

    #[test]
    fn test_ide_mode_from_properties() {
        let properties = BTreeMap::from([("idea.active".to_string(), "true".to_string())]);
        let mode = IdeMode::detect(&[], &properties);
        assert!(mode.idea && !mode.eclipse);
    }
}
