// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeSet;

use super::{BwcError, BwcResult, ConfigError, VersionError, VerifyError};
use crate::version::Version;

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "versions".to_string(),
        key: "current".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"missing required config key 'current' in section '[versions]'"
    );
}

#[test]
fn test_out_of_order_lists_versions() {
    let err = VersionError::OutOfOrder {
        versions: vec![Version::new(5, 1, 0), Version::new(5, 0, 0)],
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"version constants are out of order: [5.1.0, 5.0.0]"
    );
}

#[test]
fn test_mismatch_reports_both_sets() {
    let actual: BTreeSet<_> = [Version::new(5, 0, 0), Version::new(5, 0, 1)].into();
    let expected: BTreeSet<_> = [
        Version::new(5, 0, 0),
        Version::new(5, 0, 1),
        Version::new(5, 0, 2),
    ]
    .into();
    let message = VerifyError::Mismatch { actual, expected }.to_string();

    assert!(message.contains("Actual  : [5.0.0, 5.0.1]\n"), "{message}");
    assert!(message.contains("Expected: [5.0.0, 5.0.1, 5.0.2]\n"), "{message}");
}

#[test]
fn test_boxed_conversion() {
    let err: BwcError = VerifyError::Offline.into();
    assert!(matches!(err, BwcError::Verify(ref inner) if matches!(**inner, VerifyError::Offline)));
    assert_eq!(
        err.to_string(),
        "verification failed: must run in online mode to verify versions"
    );
}

#[test]
fn test_bwc_error_size() {
    // Thin boxes only: discriminant + pointer
    let size = std::mem::size_of::<BwcError>();
    assert!(size <= 16, "BwcError is {size} bytes, expected <= 16");
}

#[test]
fn test_bwc_result_size() {
    let size = std::mem::size_of::<BwcResult<()>>();
    assert!(size <= 16, "BwcResult<()> is {size} bytes, expected <= 16");
}
