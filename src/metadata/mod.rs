// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build metadata handed over from a previous build.
//!
//! ```text
//! BUILD_METADATA="bwc_refspec_5_x=abc123;git_sha=def456"
//!   --> { bwc_refspec_5_x: abc123, git_sha: def456 }
//! ```


use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::ConfigError;

/// Environment variable carrying the metadata string.
pub const BUILD_METADATA_ENV: &str = "BUILD_METADATA";

/// Key/value pairs describing the build, e.g. hashes used for bwc checkouts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BuildMetadata(BTreeMap<String, String>);

impl BuildMetadata {
    /// Parses `key=value` pairs separated by `;`.
    ///
    /// Empty segments are skipped. The value is everything after the first
    /// `=`, so values may contain `=` themselves.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a segment without `=`.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let mut entries = BTreeMap::new();

        for segment in raw.split(';').filter(|s| !s.is_empty()) {
            let (key, value) = segment
                .split_once('=')
                .ok_or_else(|| ConfigError::InvalidValue {
                    section: "env".to_string(),
                    key: BUILD_METADATA_ENV.to_string(),
                    message: format!("expected key=value, got '{segment}'"),
                })?;
            entries.insert(key.to_string(), value.to_string());
        }

        Ok(Self(entries))
    }

    /// Reads and parses [`BUILD_METADATA_ENV`]; unset means empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        std::env::var(BUILD_METADATA_ENV).map_or_else(|_| Ok(Self::default()), |raw| Self::parse(&raw))
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
