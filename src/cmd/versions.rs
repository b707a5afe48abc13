// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `versions` command: prints the compatibility windows.

use serde::Serialize;

use crate::cli::OutputArgs;
use crate::context::BuildContext;
use crate::error::Result;
use crate::version::Version;

#[derive(Debug, Serialize)]
pub(crate) struct VersionsReport<'a> {
    current: Version,
    index_compatible: &'a [Version],
    wire_compatible: &'a [Version],
    unreleased: Vec<Version>,
}

impl<'a> VersionsReport<'a> {
    pub(crate) fn new(ctx: &'a BuildContext) -> Self {
        let compat = ctx.compat();
        Self {
            current: compat.current(),
            index_compatible: compat.index_compat(),
            wire_compatible: compat.wire_compat(),
            unreleased: compat.unreleased(),
        }
    }

    pub(crate) fn to_text(&self) -> String {
        let join = |versions: &[Version]| {
            versions
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };

        format!(
            "current          = {}\nindex compatible = [{}]\nwire compatible  = [{}]\nunreleased       = [{}]",
            self.current,
            join(self.index_compatible),
            join(self.wire_compatible),
            join(&self.unreleased),
        )
    }
}

/// Prints the index and wire compatibility versions.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run_versions_command(args: &OutputArgs, ctx: &BuildContext) -> Result<()> {
    let report = VersionsReport::new(ctx);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}
