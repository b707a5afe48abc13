// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `metadata` command.

use crate::cli::OutputArgs;
use crate::error::Result;
use crate::metadata::BuildMetadata;

pub(crate) fn metadata_text(metadata: &BuildMetadata) -> String {
    if metadata.is_empty() {
        return "No build metadata".to_string();
    }
    metadata
        .iter()
        .map(|(key, value)| format!("{key} = {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prints the parsed `BUILD_METADATA` pairs.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run_metadata_command(args: &OutputArgs, metadata: &BuildMetadata) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(metadata)?);
    } else {
        println!("{}", metadata_text(metadata));
    }
    Ok(())
}
