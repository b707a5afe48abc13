// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeSet;
use std::io::Write as _;

use super::{ConstantFormat, DeclarationFormat, Version, VersionLog};
use crate::error::{BwcError, VersionError};

const VERSION_SOURCE: &str = r"
package org.example;

public class Version {
    public static final int V_4_9_5_ID = 4090599;
    public static final Version V_4_9_5 = new Version(V_4_9_5_ID, Lucene.LUCENE_6_0);
    public static final Version V_5_0_0_alpha1 = new Version(V_5_0_0_alpha1_ID, Lucene.LUCENE_6_1);
    public static final Version V_5_0_0 = new Version(V_5_0_0_ID, Lucene.LUCENE_6_2);
    public static final Version V_5_0_1 = new Version(V_5_0_1_ID, Lucene.LUCENE_6_2);
    public static final Version V_5_1_0 = new Version(V_5_1_0_ID, Lucene.LUCENE_6_3);
    public static final Version V_5_1_1 = new Version(V_5_1_1_ID, Lucene.LUCENE_6_3);
    public static final Version V_6_0_0_beta1 = new Version(V_6_0_0_beta1_ID, Lucene.LUCENE_7_0);
    public static final Version V_6_0_0 = new Version(V_6_0_0_ID, Lucene.LUCENE_7_0);
    public static final Version CURRENT = V_6_0_0;
}
";

fn format() -> ConstantFormat {
    ConstantFormat::new().expect("default format compiles")
}

fn names(versions: &[Version]) -> Vec<String> {
    versions.iter().map(ToString::to_string).collect()
}

#[test]
fn test_parse_version() {
    let v: Version = "5.6.12".parse().unwrap();
    assert_eq!((v.major(), v.minor(), v.bugfix()), (5, 6, 12));
    assert!(!v.is_snapshot());

    let snapshot: Version = "6.0.0-SNAPSHOT".parse().unwrap();
    assert!(snapshot.is_snapshot());
    assert_eq!(snapshot.to_string(), "6.0.0-SNAPSHOT");
}

#[test]
fn test_parse_version_rejects_malformed() {
    for input in ["", "5", "5.0", "5.0.0.1", "5.0.0-alpha1", "5..0", "a.b.c", " 5.0.0", "+5.0.0"] {
        let result = input.parse::<Version>();
        assert!(
            matches!(result, Err(VersionError::Invalid { .. })),
            "{input:?} should be rejected, got {result:?}"
        );
    }
}

#[test]
fn test_ordering_ignores_snapshot() {
    let released = Version::new(5, 1, 0);
    let snapshot = released.as_snapshot();
    assert_eq!(released, snapshot);
    assert!(Version::new(5, 0, 9) < Version::new(5, 1, 0));
    assert!(Version::new(4, 9, 9) < Version::new(5, 0, 0));

    let set: BTreeSet<_> = [released, snapshot].into();
    assert_eq!(set.len(), 1);
}

#[test]
fn test_serde_as_string() {
    let json = serde_json::to_string(&Version::new(5, 6, 3).as_snapshot()).unwrap();
    assert_eq!(json, r#""5.6.3-SNAPSHOT""#);
    let back: Version = serde_json::from_str(r#""5.6.3""#).unwrap();
    assert_eq!(back, Version::new(5, 6, 3));
}

#[test]
fn test_constant_format_matches_declarations_only() {
    let format = format();
    let cases = [
        ("    public static final Version V_5_6_3 = new Version(1);", Some("5.6.3")),
        ("\tpublic static final Version V_10_20_30 = x;", Some("10.20.30")),
        ("    public static final Version V_6_0_0_alpha1 = x;", None),
        ("    public static final Version V_6_0_0_rc2 = x;", None),
        ("    public static final int V_5_6_3_ID = 5060399;", None),
        ("public static final Version V_5_6_3 = x;", None),
        ("    public static final Version CURRENT = V_6_0_0;", None),
        ("", None),
    ];

    for (line, expected) in cases {
        let parsed = format.parse_line(line).map(|v| v.to_string());
        assert_eq!(parsed.as_deref(), expected, "line: {line:?}");
    }
}

#[test]
fn test_constant_format_custom_names() {
    let format = ConstantFormat::with_names("Release", "R_").unwrap();
    assert_eq!(
        format.parse_line("  public static final Release R_1_2_3 = x;"),
        Some(Version::new(1, 2, 3))
    );
    assert_eq!(
        format.parse_line("  public static final Version V_1_2_3 = x;"),
        None
    );
}

#[test]
fn test_extract_excludes_current_and_prereleases() {
    let log = VersionLog::from_lines(VERSION_SOURCE.lines(), Version::new(6, 0, 0), &format())
        .unwrap();

    assert_eq!(
        names(log.versions()),
        ["4.9.5", "5.0.0", "5.0.1", "5.1.0", "5.1.1"]
    );
    assert!(!log.versions().contains(&log.current()));
}

#[test]
fn test_extract_tracks_newest_prior_major_minor() {
    let log = VersionLog::from_lines(VERSION_SOURCE.lines(), Version::new(6, 0, 0), &format())
        .unwrap();

    // First 5.1.x entry.
    assert_eq!(log.prev_minor_index(), Some(3));
}

#[test]
fn test_extract_without_prior_major() {
    let log = VersionLog::from_lines(VERSION_SOURCE.lines(), Version::new(8, 0, 0), &format())
        .unwrap();
    assert_eq!(log.prev_minor_index(), None);
    assert_eq!(log.versions().len(), 6);
}

#[test]
fn test_extract_out_of_order_fails() {
    let shuffled = [
        "    public static final Version V_5_0_0 = x;",
        "    public static final Version V_5_1_0 = x;",
        "    public static final Version V_5_0_1 = x;",
    ];
    let err = VersionLog::from_lines(shuffled, Version::new(6, 0, 0), &format()).unwrap_err();

    match err {
        VersionError::OutOfOrder { versions } => {
            assert_eq!(names(&versions), ["5.0.0", "5.1.0", "5.0.1"]);
        }
        other => panic!("expected OutOfOrder, got {other:?}"),
    }
}

#[test]
fn test_extract_ignores_non_matching_lines() {
    let lines = ["// nothing here", "class Foo {}", "   V_1_2_3"];
    let log = VersionLog::from_lines(lines, Version::new(2, 0, 0), &format()).unwrap();
    assert!(log.versions().is_empty());
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(VERSION_SOURCE.as_bytes()).unwrap();

    let log = VersionLog::from_file(file.path(), Version::new(5, 1, 1), &format()).unwrap();
    assert_eq!(names(log.versions()), ["4.9.5", "5.0.0", "5.0.1", "5.1.0", "6.0.0"]);
    assert_eq!(log.prev_minor_index(), Some(0));
}

#[test]
fn test_from_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = VersionLog::from_file(&dir.path().join("Version.java"), Version::new(1, 0, 0), &format())
        .unwrap_err();
    assert!(matches!(err, BwcError::Fs(_)), "got {err:?}");
}
