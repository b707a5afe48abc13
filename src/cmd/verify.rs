// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Consistency check commands.

use tracing::info;

use crate::config::Config;
use crate::context::BuildContext;
use crate::error::Result;
use crate::net::RegistryClient;
use crate::verify::{verify_bwc_tests_enabled, verify_versions};

/// Runs `verify-versions` against the configured registry.
///
/// # Errors
///
/// Returns an error when offline, on fetch failures, or when the released
/// versions differ from the registry.
pub async fn run_verify_versions_command(ctx: &BuildContext) -> Result<()> {
    verify_versions(ctx, RegistryClient::new()).await?;
    println!("Released versions are consistent with the registry");
    Ok(())
}

/// Runs `verify-bwc-tests`.
///
/// # Errors
///
/// Returns an error while backward-compatibility tests are disabled.
pub fn run_verify_bwc_tests_command(config: &Config) -> Result<()> {
    verify_bwc_tests_enabled(&config.bwc)?;
    println!("Backward-compatibility tests are enabled");
    Ok(())
}

/// Runs every branch consistency check: the bwc-tests guard, then the
/// registry comparison.
///
/// # Errors
///
/// Returns the first failing check.
pub async fn run_branch_consistency_command(ctx: &BuildContext) -> Result<()> {
    info!(current = %ctx.current(), "Checking branch consistency");
    verify_bwc_tests_enabled(&ctx.config().bwc)?;
    run_verify_versions_command(ctx).await
}
