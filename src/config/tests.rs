// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::logging::{LogFormat, LogLevel};
use crate::version::{DeclarationFormat, Version};
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.global.log_format, LogFormat::Text);
    assert!(!config.global.offline);
    assert!(config.bwc.tests_enabled);
    assert_eq!(config.ordering.tasks, ["test", "integTest"]);
    assert_eq!(config.ordering.skip_projects, [":test:framework"]);
    assert_eq!(config.versions.constant_prefix, "V_");
    assert!(config.versions.current.is_none());
}

#[test]
fn test_parse_sections() {
    let config = Config::parse(
        r#"
[global]
offline = true
output_log_level = 4

[versions]
file = "server/Version.java"
current = "6.1.0-SNAPSHOT"

[bwc]
tests_enabled = false

[[projects]]
path = ":core"
dependencies = [":libs:x"]
tasks = ["test"]

[[projects]]
path = ":libs:x"
tasks = ["test"]

[[substitutions]]
coordinate = "org.example:x:6.1.0"
project = ":libs:x"
"#,
    )
    .unwrap();

    assert!(config.global.offline);
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.versions.file, PathBuf::from("server/Version.java"));
    assert!(!config.bwc.tests_enabled);
    assert_eq!(config.projects.len(), 2);
    assert_eq!(config.projects[0].dependencies, [":libs:x"]);
    assert!(config.projects[1].dependencies.is_empty());
    assert_eq!(config.substitutions[0].project, ":libs:x");
}

#[test]
fn test_unknown_field_rejected() {
    let result = Config::parse("[global]\nnot_a_field = 1\n");
    assert!(result.is_err());
}

#[test]
fn test_invalid_log_level_rejected() {
    let result = Config::parse("[global]\noutput_log_level = 9\n");
    assert!(result.is_err());
}

#[test]
fn test_duplicate_projects_rejected() {
    let result = Config::parse(
        r#"
[[projects]]
path = ":core"

[[projects]]
path = ":core"
"#,
    );
    let err = result.unwrap_err().to_string();
    assert!(err.contains("duplicate project ':core'"), "{err}");
}

#[test]
fn test_current_version_strips_snapshot() {
    let mut config = Config::default();
    config.versions.current = Some("6.0.0-SNAPSHOT".to_string());

    let current = config.current_version().unwrap();
    assert_eq!(current, Version::new(6, 0, 0));
    assert!(!current.is_snapshot());
}

#[test]
fn test_current_version_missing() {
    let err = Config::default().current_version().unwrap_err().to_string();
    insta::assert_snapshot!(err, @"missing required config key 'current' in section '[versions]'");
}

#[test]
fn test_current_version_invalid() {
    let mut config = Config::default();
    config.versions.current = Some("6.0.0-alpha1".to_string());
    let err = config.current_version().unwrap_err().to_string();
    assert!(err.contains("versions"), "{err}");
    assert!(err.contains("6.0.0-alpha1"), "{err}");
}

#[test]
fn test_declaration_format_uses_configured_names() {
    let mut config = Config::default();
    config.versions.constant_type = "Release".to_string();
    config.versions.constant_prefix = "REL_".to_string();

    let format = config.declaration_format().unwrap();
    assert_eq!(
        format.parse_line("  public static final Release REL_2_3_4 = x;"),
        Some(Version::new(2, 3, 4))
    );
}

#[test]
fn test_loader_overrides() {
    let config = ConfigLoader::new()
        .add_toml_str("[versions]\ncurrent = \"5.0.0\"\n")
        .set_assignment("versions.current=5.1.0")
        .unwrap()
        .set("global.offline", true)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.versions.current.as_deref(), Some("5.1.0"));
    assert!(config.global.offline);
}

#[test]
fn test_loader_rejects_bare_assignment() {
    assert!(ConfigLoader::new().set_assignment("offline").is_err());
    assert!(ConfigLoader::new().set_assignment("offline=true").is_err());
}

#[test]
fn test_loader_missing_required_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = ConfigLoader::new()
        .add_toml_file(dir.path().join("missing.toml"))
        .build();
    assert!(result.is_err());
}

#[test]
fn test_loader_optional_file_not_listed_when_absent() {
    let dir = tempfile::tempdir().unwrap();
    let loader = ConfigLoader::new().add_toml_file_optional(dir.path().join("bwc.toml"));
    assert!(loader.loaded_files().is_empty());
    assert!(loader.build().is_ok());
}

#[test]
fn test_format_options_aligned() {
    let options = Config::default().format_options();
    let offline = options
        .iter()
        .find(|line| line.starts_with("global.offline"))
        .unwrap();
    assert!(offline.ends_with("= false"), "{offline}");

    let widths: Vec<_> = options.iter().map(|l| l.find(" = ").unwrap()).collect();
    assert!(widths.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_project_map_form_rejected() {
    let err = Config::parse(
        r#"
[projects.":server"]
dependencies = [":libs:core"]
tasks = ["test"]
"#,
    )
    .unwrap_err()
    .to_string();
    assert!(err.starts_with("failed to parse config '<string>'"), "{err}");
    assert!(err.contains("expected a sequence for key `projects`"), "{err}");

    let err = Config::parse("[substitutions]\n\"org.example:fw:1.0.0\" = \":test:fw\"\n")
        .unwrap_err()
        .to_string();
    assert!(err.contains("expected a sequence for key `substitutions`"), "{err}");
}
