// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE      ← Config files (can repeat)
//! --offline          ← global.offline
//! --current X.Y.Z    ← versions.current
//! --version-file F   ← versions.file
//! --log-level N      ← Console verbosity (0-6)
//! --file-log-level   ← File verbosity (defaults to --log-level)
//! --set S.KEY=VAL    ← Direct config override
//! --task NAME        ← Requested build tasks (IDE detection)
//! -D KEY=VALUE       ← Launcher properties (IDE detection)
//!
//! Precedence: CLI flags > --set > env > config files > defaults
//! ```

use clap::Args;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::logging::LogFormat;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to configuration file(s). Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Disables auto loading of `bwc.toml` from the current directory.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,

    /// Refuses network access; network-dependent checks fail.
    #[arg(long)]
    pub offline: bool,

    /// Version under development, e.g. 6.0.0 or 6.0.0-SNAPSHOT.
    #[arg(long = "current", value_name = "VERSION")]
    pub current: Option<String>,

    /// Source file declaring the version constants.
    #[arg(long = "version-file", value_name = "FILE")]
    pub version_file: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log file line format.
    #[arg(long = "log-format", value_name = "FORMAT", value_enum)]
    pub log_format: Option<LogFormat>,

    /// Sets an option, such as 'registry.url=https://...'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Build task requested by the caller, e.g. 'eclipse'. Can repeat.
    #[arg(short = 't', long = "task", value_name = "NAME", action = clap::ArgAction::Append)]
    pub tasks: Vec<String>,

    /// Launcher property, e.g. '-D idea.active=true'. Can repeat.
    #[arg(short = 'D', value_name = "KEY=VALUE", action = clap::ArgAction::Append)]
    pub properties: Vec<String>,
}

impl GlobalOptions {
    /// Converts command-line options to `section.key=value` overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if let Some(level) = self.log_level {
            overrides.push(format!("global.output_log_level={level}"));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(format!("global.file_log_level={level}"));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(format!("global.log_file={}", path.display()));
        }

        if let Some(format) = self.log_format {
            overrides.push(format!("global.log_format={format}"));
        }

        if self.offline {
            overrides.push("global.offline=true".to_string());
        }

        if let Some(ref current) = self.current {
            overrides.push(format!("versions.current={current}"));
        }

        if let Some(ref file) = self.version_file {
            overrides.push(format!("versions.file={}", file.display()));
        }

        overrides
    }

    /// `-D` properties as a map; a bare key maps to an empty value.
    #[must_use]
    pub fn property_map(&self) -> BTreeMap<String, String> {
        self.properties
            .iter()
            .map(|p| match p.split_once('=') {
                Some((key, value)) => (key.to_string(), value.to_string()),
                None => (p.clone(), String::new()),
            })
            .collect()
    }
}
