// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Extraction of version constants from source text.
//!
//! ```text
//!     public static final Version V_5_6_3 = new Version(...);   match
//!     public static final Version V_6_0_0_alpha1 = ...;         skipped
//!     public static final Version CURRENT = V_6_0_0;            skipped
//! ```
//!
//! The declaration grammar lives behind [`DeclarationFormat`] so callers
//! never see the regex.

use std::path::Path;

use anyhow::Context;
use regex::Regex;
use tracing::debug;

use super::Version;
use crate::error::{BwcResult, FsError, Result, VersionError};

/// Recognizes a version declaration on a single line of source text.
pub trait DeclarationFormat {
    /// Returns the declared version, or `None` when the line is not a
    /// declaration this format understands.
    fn parse_line(&self, line: &str) -> Option<Version>;
}

/// `public static final <Type> <prefix><major>_<minor>_<bugfix> ...` constants.
///
/// The line must start with at least one non-word character (indentation)
/// and the third number must be followed by a space, which is what keeps
/// `_alpha1`/`_beta2`/`_rc1` constants out.
#[derive(Debug, Clone)]
pub struct ConstantFormat {
    pattern: Regex,
}

impl ConstantFormat {
    pub const DEFAULT_TYPE: &'static str = "Version";
    pub const DEFAULT_PREFIX: &'static str = "V_";

    /// Creates the format for `public static final Version V_x_y_z` constants.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern fails to compile.
    pub fn new() -> Result<Self> {
        Self::with_names(Self::DEFAULT_TYPE, Self::DEFAULT_PREFIX)
    }

    /// Creates a format for a custom constant type and name prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting pattern fails to compile.
    pub fn with_names(type_name: &str, prefix: &str) -> Result<Self> {
        let source = format!(
            r"^\W+public static final {} {}([0-9]+)_([0-9]+)_([0-9]+) .*$",
            regex::escape(type_name),
            regex::escape(prefix)
        );
        let pattern = Regex::new(&source)
            .with_context(|| format!("failed to compile declaration pattern {source}"))?;
        Ok(Self { pattern })
    }
}

impl DeclarationFormat for ConstantFormat {
    fn parse_line(&self, line: &str) -> Option<Version> {
        let captures = self.pattern.captures(line)?;
        let number = |i: usize| captures.get(i)?.as_str().parse::<u32>().ok();
        Some(Version::new(number(1)?, number(2)?, number(3)?))
    }
}

/// Historical versions discovered in a version file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionLog {
    current: Version,
    versions: Vec<Version>,
    prev_minor_index: Option<usize>,
}

impl VersionLog {
    /// Scans `lines` for declarations, excluding `current`.
    ///
    /// Also records where the newest minor of the previous major starts,
    /// which is where wire compatibility begins.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::OutOfOrder`] if the declarations are not
    /// already in ascending order.
    pub fn from_lines<'a, I, F>(
        lines: I,
        current: Version,
        format: &F,
    ) -> std::result::Result<Self, VersionError>
    where
        I: IntoIterator<Item = &'a str>,
        F: DeclarationFormat + ?Sized,
    {
        let prev_major = current.previous_major();
        let mut versions = Vec::new();
        let mut prev_minor_index = None;
        let mut last_prev_minor: Option<u32> = None;

        for line in lines {
            let Some(found) = format.parse_line(line) else {
                continue;
            };

            if found != current {
                versions.push(found);
            }

            if Some(found.major()) == prev_major
                && last_prev_minor.is_none_or(|minor| found.minor() > minor)
            {
                prev_minor_index = versions.len().checked_sub(1);
                last_prev_minor = Some(found.minor());
            }
        }

        if !versions.is_sorted() {
            return Err(VersionError::OutOfOrder { versions });
        }

        Ok(Self {
            current,
            versions,
            prev_minor_index,
        })
    }

    /// Reads and scans a version file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its declarations are
    /// out of order.
    pub fn from_file<F>(path: &Path, current: Version, format: &F) -> BwcResult<Self>
    where
        F: DeclarationFormat + ?Sized,
    {
        let content = std::fs::read_to_string(path).map_err(|source| FsError::IoError {
            path: path.display().to_string(),
            source,
        })?;

        let log = Self::from_lines(content.lines(), current, format)?;
        debug!(
            path = %path.display(),
            count = log.versions.len(),
            current = %current,
            "Extracted version constants"
        );
        Ok(log)
    }

    /// The version under development.
    #[must_use]
    pub const fn current(&self) -> Version {
        self.current
    }

    /// Historical versions in declaration order.
    #[must_use]
    pub fn versions(&self) -> &[Version] {
        &self.versions
    }

    /// Index of the first entry of the newest minor of the previous major.
    #[must_use]
    pub const fn prev_minor_index(&self) -> Option<usize> {
        self.prev_minor_index
    }

    pub(crate) fn into_parts(self) -> (Version, Vec<Version>, Option<usize>) {
        (self.current, self.versions, self.prev_minor_index)
    }
}
