// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for bwc-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! bwc [global options] <command>
//! version | options | inis
//! versions [--json]
//! verify-versions
//! verify-bwc-tests
//! branch-consistency
//! metadata [--json]
//! task-order [--json]
//! ide
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{Args, Parser, Subcommand};

/// Backward-compatibility version bookkeeping.
#[derive(Debug, Parser)]
#[command(
    name = "bwc",
    author,
    version,
    about = "Backward-compatibility version tool",
    long_about = "bwc-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads the version constants of a multi-module build, derives\n\
                  the index and wire compatibility windows, and checks them\n\
                  against the published releases.",
    after_help = "CONFIG FILES:\n\n\
                  Files given with --config are loaded first, in order. Then\n\
                  `bwc.toml` in the current directory is loaded if present,\n\
                  unless --no-default-config is given. BWC_<SECTION>__<KEY>\n\
                  environment variables and --set come last."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the config files used.
    Inis,

    /// Prints the index and wire compatibility versions.
    Versions(OutputArgs),

    /// Checks released versions against the published registry (online only).
    #[command(name = "verify-versions")]
    VerifyVersions,

    /// Fails while backward-compatibility tests are disabled.
    #[command(name = "verify-bwc-tests")]
    VerifyBwcTests,

    /// Ensures this branch is internally consistent.
    #[command(name = "branch-consistency")]
    BranchConsistency,

    /// Prints the build metadata from BUILD_METADATA.
    Metadata(OutputArgs),

    /// Prints the cross-project task ordering.
    #[command(name = "task-order")]
    TaskOrder(OutputArgs),

    /// Prints which IDE integrations are active.
    Ide,
}

/// Output selection shared by reporting commands.
#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
