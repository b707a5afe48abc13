// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        versions / verify / task-order
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!              context      graph     net
//!           compat windows  hooks   registry
//!                 |                    |
//!                 v                    v
//!              version  ---------->  verify
//!            VersionLog          reconciliation
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, metadata  |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod compat;
pub mod config;
pub mod context;
pub mod error;
pub mod graph;
pub mod hooks;
pub mod logging;
pub mod metadata;
pub mod net;
pub mod verify;
pub mod version;
