// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            BwcError (16 bytes)
//!                   |
//!   +-------+-------+-------+-------+
//!   |       |       |       |       |
//!   v       v       v       v       v
//! Version Verify   Net    Cfg      Fs
//!   Box    Box     Box    Box     Box
//!
//! Sub-errors (unboxed internally):
//!   Version  OutOfOrder, Invalid
//!   Verify   Offline, Mismatch, BwcTestsDisabled, MalformedRegistry
//!   Network  Reqwest, HttpError, InvalidUrl
//!   Config   ParseError, MissingKey, InvalidValue, NotFound
//!   Fs       IoError
//! ```
//!
//! Every variant is fatal: nothing is retried and there is no degraded mode.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use thiserror::Error;

use crate::version::Version;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`BwcError`].
pub type BwcResult<T> = std::result::Result<T, BwcError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at two words on the stack.
#[derive(Debug, Error)]
pub enum BwcError {
    /// Version declarations are malformed or inconsistent.
    #[error("version error: {0}")]
    Version(#[from] Box<VersionError>),

    /// A verification check failed.
    #[error("verification failed: {0}")]
    Verify(#[from] Box<VerifyError>),

    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for BwcError {
                fn from(err: $error) -> Self {
                    BwcError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    VersionError => Version,
    VerifyError => Verify,
    NetworkError => Network,
    ConfigError => Config,
    FsError => Fs,
}

/// Formats versions as `[a, b, c]` for error messages.
fn format_list<'a>(versions: impl IntoIterator<Item = &'a Version>) -> String {
    let mut out = String::from("[");
    for (i, version) in versions.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{version}");
    }
    out.push(']');
    out
}

// --- Version Errors ---

/// Errors raised while reading version declarations.
#[derive(Debug, Error)]
pub enum VersionError {
    /// Declared versions are not in ascending order.
    #[error("version constants are out of order: {}", format_list(.versions))]
    OutOfOrder { versions: Vec<Version> },

    /// A version identifier could not be parsed.
    #[error("invalid version '{input}': expected MAJOR.MINOR.BUGFIX[-SNAPSHOT]")]
    Invalid { input: String },
}

// --- Verify Errors ---

/// Verification task failures.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// A network-dependent check was invoked offline.
    #[error("must run in online mode to verify versions")]
    Offline,

    /// Locally released versions disagree with the registry.
    #[error(
        "out-of-date released versions\nActual  : {}\nExpected: {}\n\
         Update the version file. The current version doesn't count because it is not released.",
        format_list(.actual),
        format_list(.expected)
    )]
    Mismatch {
        actual: BTreeSet<Version>,
        expected: BTreeSet<Version>,
    },

    /// Backward-compatibility tests are switched off.
    #[error(
        "bwc tests are disabled; they must be re-enabled after completing backcompat behavior backporting"
    )]
    BwcTestsDisabled,

    /// Registry document could not be understood.
    #[error("malformed registry document: {message}")]
    MalformedRegistry { message: String },
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration.
    #[error("failed to parse config '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
