// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `ide` command.

use crate::context::IdeMode;

pub(crate) fn ide_text(mode: IdeMode) -> String {
    format!("eclipse = {}\nidea    = {}", mode.eclipse, mode.idea)
}

/// Prints which IDE integrations were detected.
pub fn run_ide_command(mode: IdeMode) {
    println!("{}", ide_text(mode));
}
