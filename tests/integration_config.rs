// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic JSON configurations.

use std::path::PathBuf;

use uget_rs::config::Config;
use uget_rs::config::types::BuildConfiguration;

// =============================================================================
// Loading from JSON strings
// =============================================================================

#[test]
fn config_parse_minimal() {
    let config = Config::parse("{}").unwrap();
    assert_eq!(config.project.path, PathBuf::from("."));
    assert_eq!(config.project.output_dir, PathBuf::from("Output"));
    assert_eq!(config.project.configuration, BuildConfiguration::Release);
    assert!(!config.global.debug);
}

#[test]
fn config_parse_project_section() {
    let json = r#"
{
  "project": {
    "path": "src/MyPlugin",
    "output_dir": "Artifacts",
    "configuration": "Debug"
  }
}
"#;
    let config = Config::parse(json).unwrap();
    assert_eq!(config.project.path, PathBuf::from("src/MyPlugin"));
    assert_eq!(config.project.output_dir, PathBuf::from("Artifacts"));
    assert_eq!(config.project.configuration, BuildConfiguration::Debug);
}

#[test]
fn config_parse_tools_section() {
    let json = r#"
{
  "tools": {
    "msbuild": "/opt/msbuild/MSBuild.exe",
    "nuget": "/usr/local/bin/nuget",
    "unity": "/opt/unity/Editor/Unity"
  }
}
"#;
    let config = Config::parse(json).unwrap();
    assert_eq!(config.tools.msbuild, PathBuf::from("/opt/msbuild/MSBuild.exe"));
    assert_eq!(config.tools.nuget, PathBuf::from("/usr/local/bin/nuget"));
    assert_eq!(config.tools.unity, PathBuf::from("/opt/unity/Editor/Unity"));
}

#[test]
fn config_parse_nuget_and_unity_sections() {
    let json = r#"
{
  "nuget": {
    "feed": "https://nuget.example.com/v3/index.json",
    "api_key": "secret"
  },
  "unity": {
    "project_path": "/projects/unity-host",
    "root_dir": "MyPlugin",
    "username": "user@example.com"
  }
}
"#;
    let config = Config::parse(json).unwrap();
    assert_eq!(config.nuget.feed, "https://nuget.example.com/v3/index.json");
    assert_eq!(config.nuget.api_key, "secret");
    assert_eq!(config.unity.project_path, PathBuf::from("/projects/unity-host"));
    assert_eq!(config.unity.root_dir, PathBuf::from("MyPlugin"));
    assert_eq!(config.unity.username, "user@example.com");
    assert!(config.unity.password.is_empty());
}

#[test]
fn config_parse_rejects_unknown_keys() {
    assert!(Config::parse(r#"{"project":{"paths":"typo"}}"#).is_err());
}

#[test]
fn config_parse_rejects_bad_configuration() {
    assert!(Config::parse(r#"{"project":{"configuration":"Profile"}}"#).is_err());
}

// =============================================================================
// Loading from files and layering
// =============================================================================

#[test]
fn config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("uget.json");
    std::fs::write(&path, r#"{"nuget":{"feed":"https://feed.example.com"}}"#).unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.nuget.feed, "https://feed.example.com");
}

#[test]
fn config_inline_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("uget.json");
    std::fs::write(
        &path,
        r#"{"project":{"output_dir":"FromFile"},"nuget":{"feed":"https://file.example.com"}}"#,
    )
    .unwrap();

    let config = Config::builder()
        .add_json_file(&path)
        .add_json_str(r#"{"nuget":{"feed":"https://inline.example.com"}}"#)
        .build()
        .unwrap();

    // Inline blob wins for the key it sets, the file fills the rest.
    assert_eq!(config.nuget.feed, "https://inline.example.com");
    assert_eq!(config.project.output_dir, PathBuf::from("FromFile"));
}

#[test]
fn config_set_overrides_everything() {
    let config = Config::builder()
        .add_json_str(r#"{"global":{"quiet":false},"project":{"configuration":"Debug"}}"#)
        .set("global.quiet", true)
        .unwrap()
        .set("project.configuration", "Release")
        .unwrap()
        .build()
        .unwrap();

    assert!(config.global.quiet);
    assert_eq!(config.project.configuration, BuildConfiguration::Release);
}

#[test]
fn config_missing_file_is_error() {
    assert!(Config::from_file("/nonexistent/uget.json").is_err());
}

// =============================================================================
// Options display
// =============================================================================

#[test]
fn config_format_options_hides_secrets() {
    let config = Config::parse(
        r#"{"nuget":{"api_key":"secret"},"unity":{"password":"hunter2","serial":"SB-1"}}"#,
    )
    .unwrap();

    let rendered = config.format_options().join("\n");
    assert!(!rendered.contains("secret"));
    assert!(!rendered.contains("hunter2"));
    assert!(!rendered.contains("SB-1"));
    assert!(rendered.contains("[hidden]"));
}
