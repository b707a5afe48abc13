// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogFormat, LogLevel};

#[test]
fn test_log_level_range() {
    assert_eq!(LogLevel::from_u8(0), Some(LogLevel::SILENT));
    assert_eq!(LogLevel::from_u8(6), Some(LogLevel::DUMP));
    assert_eq!(LogLevel::from_u8(7), None);
    assert!(LogLevel::new(42).is_err());
    assert_eq!(u8::from(LogLevel::TRACE), 5);
}

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<_> = (0..=6)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();

    insta::assert_snapshot!(filters.join("\n"), @r"
    off
    error
    warn
    warn,bwc_rs=info,bwc=info
    warn,bwc_rs=debug,bwc=debug
    warn,bwc_rs=trace,bwc=trace
    trace
    ");
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert_eq!(config.file_format(), LogFormat::Text);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}

#[test]
fn test_log_format_display() {
    assert_eq!(LogFormat::Text.to_string(), "text");
    assert_eq!(LogFormat::Json.to_string(), "json");
}
