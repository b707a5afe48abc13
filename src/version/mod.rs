// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Version identifiers and the version log.
//!
//! ```text
//! Version.java (text)
//!     |  DeclarationFormat::parse_line (per line)
//!     v
//! VersionLog { versions, prev_minor_index }
//!     |  ordering check, current excluded
//!     v
//! compat::CompatVersions
//! ```
//!
//! Ordering and equality look at `(major, minor, bugfix)` only; the
//! snapshot flag is carried along as metadata.

pub mod extract;

#[cfg(test)]
mod tests;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::VersionError;

pub use extract::{ConstantFormat, DeclarationFormat, VersionLog};

const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// A `major.minor.bugfix` version with a snapshot marker.
#[derive(Debug, Clone, Copy)]
pub struct Version {
    major: u32,
    minor: u32,
    bugfix: u32,
    snapshot: bool,
}

impl Version {
    /// Creates a released (non-snapshot) version.
    #[must_use]
    pub const fn new(major: u32, minor: u32, bugfix: u32) -> Self {
        Self {
            major,
            minor,
            bugfix,
            snapshot: false,
        }
    }

    /// Returns a copy of this version flagged as an unreleased snapshot.
    #[must_use]
    pub const fn as_snapshot(self) -> Self {
        Self {
            snapshot: true,
            ..self
        }
    }

    #[must_use]
    pub const fn major(&self) -> u32 {
        self.major
    }

    #[must_use]
    pub const fn minor(&self) -> u32 {
        self.minor
    }

    #[must_use]
    pub const fn bugfix(&self) -> u32 {
        self.bugfix
    }

    #[must_use]
    pub const fn is_snapshot(&self) -> bool {
        self.snapshot
    }

    /// Major version immediately preceding this one, if any.
    #[must_use]
    pub const fn previous_major(&self) -> Option<u32> {
        self.major.checked_sub(1)
    }

    const fn key(&self) -> (u32, u32, u32) {
        (self.major, self.minor, self.bugfix)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.bugfix)?;
        if self.snapshot {
            f.write_str(SNAPSHOT_SUFFIX)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    /// Parses `MAJOR.MINOR.BUGFIX` with an optional `-SNAPSHOT` suffix.
    ///
    /// Pre-release qualifiers (`-alpha1`, `-rc2`, ...) are rejected.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || VersionError::Invalid {
            input: s.to_string(),
        };

        let (core, snapshot) = match s.strip_suffix(SNAPSHOT_SUFFIX) {
            Some(core) => (core, true),
            None => (s, false),
        };

        let mut parts = core.split('.');
        let mut component = || -> std::result::Result<u32, VersionError> {
            let part = parts.next().ok_or_else(invalid)?;
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse().map_err(|_| invalid())
        };

        let major = component()?;
        let minor = component()?;
        let bugfix = component()?;
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self {
            major,
            minor,
            bugfix,
            snapshot,
        })
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
