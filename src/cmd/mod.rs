// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config    options, inis
//!   versions  index / wire windows
//!   verify    verify-versions, verify-bwc-tests, branch-consistency
//!   metadata  BUILD_METADATA
//!   order     task-order
//!   ide       IDE detection
//! ```

pub mod config;
pub mod ide;
pub mod metadata;
pub mod order;
pub mod verify;
pub mod versions;
