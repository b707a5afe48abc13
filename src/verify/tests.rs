// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeSet;

use super::{
    ensure_online, expected_versions, published_versions, reconcile, verify_bwc_tests_enabled,
};
use crate::config::Config;
use crate::config::types::BwcConfig;
use crate::error::VerifyError;
use crate::version::Version;

const METADATA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata>
  <groupId>org.example</groupId>
  <artifactId>server</artifactId>
  <versioning>
    <latest>6.0.0-beta1</latest>
    <release>6.0.0-beta1</release>
    <versions>
      <version>2.4.6</version>
      <version>4.9.5</version>
      <version>5.0.0-alpha5</version>
      <version>5.0.0</version>
      <version> 5.0.1 </version>
      <version>5.0.2</version>
      <version>6.0.0-beta1</version>
      <version>6.0.0</version>
    </versions>
    <lastUpdated>20171114182314</lastUpdated>
  </versioning>
</metadata>
"#;

fn set(versions: &[&str]) -> BTreeSet<Version> {
    versions.iter().map(|v| v.parse().unwrap()).collect()
}

#[test]
fn test_published_versions_keeps_strict_releases() {
    let published = published_versions(METADATA).unwrap();
    assert_eq!(
        published,
        set(&["2.4.6", "4.9.5", "5.0.0", "5.0.2", "6.0.0"])
    );
}

#[test]
fn test_published_versions_rejects_garbage() {
    let err = published_versions("not xml <").unwrap_err();
    assert!(matches!(err, VerifyError::MalformedRegistry { .. }));
}

#[test]
fn test_published_versions_requires_versions_element() {
    let err = published_versions("<metadata><versioning/></metadata>").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"malformed registry document: missing <versioning><versions>"
    );
}

#[test]
fn test_expected_versions_window() {
    let published = published_versions(METADATA).unwrap();
    let expected = expected_versions(&published, Version::new(5, 1, 0));

    assert_eq!(expected, set(&["4.9.5", "5.0.0", "5.0.2"]));
}

#[test]
fn test_expected_versions_excludes_current() {
    let published = set(&["5.0.0", "5.0.1", "5.0.2"]);
    let expected = expected_versions(&published, Version::new(5, 0, 2));
    assert_eq!(expected, set(&["5.0.0", "5.0.1"]));
}

#[test]
fn test_reconcile_equal_sets() {
    let local = set(&["5.0.0", "5.0.1"]);
    assert!(reconcile(&local, &local.clone()).is_ok());
}

#[test]
fn test_reconcile_mismatch_lists_both_sets() {
    let local = set(&["5.0.0", "5.0.1"]);
    let remote = set(&["5.0.0", "5.0.1", "5.0.2"]);

    match reconcile(&local, &remote).unwrap_err() {
        VerifyError::Mismatch { actual, expected } => {
            assert_eq!(actual, local);
            assert_eq!(expected, remote);
        }
        other => panic!("expected Mismatch, got {other:?}"),
    }
}

#[test]
fn test_bwc_tests_guard() {
    assert!(verify_bwc_tests_enabled(&BwcConfig::default()).is_ok());

    let disabled = BwcConfig {
        tests_enabled: false,
    };
    assert!(matches!(
        verify_bwc_tests_enabled(&disabled),
        Err(VerifyError::BwcTestsDisabled)
    ));
}

#[test]
fn test_ensure_online() {
    let mut config = Config::default();
    assert!(ensure_online(&config).is_ok());

    config.global.offline = true;
    assert!(matches!(ensure_online(&config), Err(VerifyError::Offline)));
}

#[test]
fn test_published_versions_rejects_padded_text() {
    let xml = "<metadata><versioning><versions>\
               <version> 5.0.1 </version><version>5.0.2</version>\
               </versions></versioning></metadata>";
    assert_eq!(published_versions(xml).unwrap(), set(&["5.0.2"]));
}
