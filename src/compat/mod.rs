// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Compatibility windows derived from a [`VersionLog`].
//!
//! ```text
//! historical: 5.5.0 5.5.1 5.6.0 5.6.1 6.0.0 6.1.0      current 6.2.0
//!             |-------------- index compat --------------|
//!                         |-------- wire compat ---------|
//!                                                   ^ snapshot (bugfix 0)
//!                                             ^ snapshot (6.1.0 bugfix 0)
//! ```
//!
//! When the current bugfix is 0 the branch's nearest predecessors may
//! themselves be unreleased, so they are tested as snapshots.


use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::version::{Version, VersionLog};

/// Versions the current release must stay compatible with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatVersions {
    current: Version,
    versions: Vec<Version>,
    wire_start: usize,
}

impl CompatVersions {
    /// Derives both windows and applies snapshot marking.
    #[must_use]
    pub fn from_log(log: VersionLog) -> Self {
        let (current, mut versions, prev_minor_index) = log.into_parts();

        if current.bugfix() == 0 {
            mark_unreleased(&mut versions);
        }

        let wire_start = prev_minor_index.unwrap_or_else(|| {
            warn!(
                current = %current,
                "No versions of the previous major declared; wire compatibility covers all versions"
            );
            0
        });

        debug!(
            current = %current,
            index = versions.len(),
            wire = versions.len() - wire_start,
            "Derived compatibility windows"
        );

        Self {
            current,
            versions,
            wire_start,
        }
    }

    #[must_use]
    pub const fn current(&self) -> Version {
        self.current
    }

    /// Every prior release whose on-disk format must remain readable.
    #[must_use]
    pub fn index_compat(&self) -> &[Version] {
        &self.versions
    }

    /// Prior releases the network protocol must still talk to.
    #[must_use]
    pub fn wire_compat(&self) -> &[Version] {
        &self.versions[self.wire_start..]
    }

    /// Index-compatible versions that have been released.
    #[must_use]
    pub fn released(&self) -> BTreeSet<Version> {
        self.versions
            .iter()
            .filter(|v| !v.is_snapshot())
            .copied()
            .collect()
    }

    /// Index-compatible versions still flagged as snapshots.
    #[must_use]
    pub fn unreleased(&self) -> Vec<Version> {
        self.versions
            .iter()
            .filter(|v| v.is_snapshot())
            .copied()
            .collect()
    }
}

/// Flags the newest entry, and the one before it when the newest is a `.0`
/// release, as snapshots.
fn mark_unreleased(versions: &mut [Version]) {
    let Some((last, rest)) = versions.split_last_mut() else {
        return;
    };

    *last = last.as_snapshot();
    if last.bugfix() == 0
        && let Some(second) = rest.last_mut()
    {
        *second = second.as_snapshot();
    }
}
