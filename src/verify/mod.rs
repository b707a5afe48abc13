// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch consistency checks.
//!
//! ```text
//! verify_versions:
//!   ensure_online: offline? --> Offline
//!   fetch maven-metadata.xml
//!   <metadata><versioning><versions><version>M.m.b</version>...
//!   keep: strict M.m.b, major >= current.major - 1, < current
//!   compare with released index-compat versions --> Mismatch{actual, expected}
//!
//! verify_bwc_tests_enabled:
//!   bwc.tests_enabled == false --> BwcTestsDisabled
//! ```

#[cfg(test)]
mod tests;

use std::collections::BTreeSet;

use regex::Regex;
use roxmltree::Document;
use tracing::{debug, info};

use crate::config::Config;
use crate::config::types::BwcConfig;
use crate::context::BuildContext;
use crate::error::{BwcResult, VerifyError};
use crate::net::RegistryClient;
use crate::version::Version;

/// Extracts every strictly `M.m.b` version listed in a `maven-metadata.xml`.
///
/// # Errors
///
/// Returns [`VerifyError::MalformedRegistry`] if the document is not XML or
/// has no `versioning/versions` element.
pub fn published_versions(xml: &str) -> Result<BTreeSet<Version>, VerifyError> {
    let malformed = |message: String| VerifyError::MalformedRegistry { message };

    let strict = Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$")
        .map_err(|e| malformed(format!("version pattern: {e}")))?;
    let doc = Document::parse(xml).map_err(|e| malformed(e.to_string()))?;

    let versions = doc
        .root_element()
        .children()
        .filter(|n| n.has_tag_name("versioning"))
        .flat_map(|n| n.children())
        .find(|n| n.has_tag_name("versions"))
        .ok_or_else(|| malformed("missing <versioning><versions>".to_string()))?;

    let published = versions
        .children()
        .filter(|n| n.has_tag_name("version"))
        .filter_map(|n| n.text())
        .filter(|text| strict.is_match(text))
        .filter_map(|text| text.parse::<Version>().ok())
        .collect();

    Ok(published)
}

/// Restricts registry versions to the ones the local list must mention:
/// from the previous major up to, but excluding, `current`.
#[must_use]
pub fn expected_versions(published: &BTreeSet<Version>, current: Version) -> BTreeSet<Version> {
    let min_major = current.previous_major().unwrap_or(0);
    published
        .iter()
        .filter(|v| v.major() >= min_major && **v < current)
        .copied()
        .collect()
}

/// Compares local released versions with the registry.
///
/// # Errors
///
/// Returns [`VerifyError::Mismatch`] carrying both sets when they differ.
pub fn reconcile(
    actual: &BTreeSet<Version>,
    expected: &BTreeSet<Version>,
) -> Result<(), VerifyError> {
    if actual == expected {
        return Ok(());
    }

    debug!(
        missing_locally = ?expected.difference(actual).collect::<Vec<_>>(),
        unpublished = ?actual.difference(expected).collect::<Vec<_>>(),
        "Released versions differ from registry"
    );

    Err(VerifyError::Mismatch {
        actual: actual.clone(),
        expected: expected.clone(),
    })
}

/// Checks that every released version known locally is published and vice versa.
///
/// # Errors
///
/// Returns an error when offline, when the registry cannot be fetched or
/// parsed, or when the sets differ.
pub async fn verify_versions(ctx: &BuildContext, client: RegistryClient) -> BwcResult<()> {
    ensure_online(ctx.config())?;

    let url = ctx.config().registry.url.clone();
    info!(url = %url, "Reading published versions");
    let xml = client.url(url).fetch_string().await?;

    let published = published_versions(&xml)?;
    let expected = expected_versions(&published, ctx.current());
    let actual = ctx.compat().released();

    reconcile(&actual, &expected)?;
    info!(count = actual.len(), "Released versions match the registry");
    Ok(())
}

/// Refuses network-dependent checks when running offline.
///
/// # Errors
///
/// Returns [`VerifyError::Offline`] when `global.offline` is set.
pub fn ensure_online(config: &Config) -> Result<(), VerifyError> {
    if config.global.offline {
        Err(VerifyError::Offline)
    } else {
        Ok(())
    }
}

/// Fails while backward-compatibility tests are switched off.
///
/// # Errors
///
/// Returns [`VerifyError::BwcTestsDisabled`] when `tests_enabled` is false.
pub fn verify_bwc_tests_enabled(config: &BwcConfig) -> Result<(), VerifyError> {
    if config.tests_enabled {
        Ok(())
    } else {
        Err(VerifyError::BwcTestsDisabled)
    }
}
