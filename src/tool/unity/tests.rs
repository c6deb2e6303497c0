// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::Arc;

use super::{UnityTool, resolve};
use crate::config::Config;
use crate::error::UsageError;
use crate::tool::test_utils::run_with_logs;
use crate::tool::{Tool, ToolContext};

fn dry_run_context() -> ToolContext {
    let mut config = Config::default();
    config.global.dry = true;
    ToolContext::new(Arc::new(config))
}

#[tokio::test]
async fn test_dry_run_export_arguments() {
    let ctx = dry_run_context();
    let tool = UnityTool::export(
        "unity",
        "/tmp/staged-project",
        "Assets/MyProject",
        "/tmp/out/MyProject_1.2.3_Release.unitypackage",
        "/tmp/logs",
    );

    let (code, logs) = run_with_logs(|| async { tool.run(&ctx).await })
        .await
        .expect("dry run should succeed");

    assert_eq!(code, 0);
    assert!(logs.contains("-projectPath /tmp/staged-project"));
    assert!(logs.contains(
        "-exportPackage Assets/MyProject /tmp/out/MyProject_1.2.3_Release.unitypackage"
    ));
    assert!(logs.contains("-logFile /tmp/logs/unity.log"));
    assert!(logs.contains("-batchmode -quit"));
    assert!(!logs.contains("-username"));
}

#[tokio::test]
async fn test_dry_run_export_with_credentials() {
    let ctx = dry_run_context();
    let tool = UnityTool::export("unity", "/p", "Assets/X", "/out/x.unitypackage", "/logs")
        .credentials("user@example.com", "pw", "SERIAL-123");

    let (_, logs) = run_with_logs(|| async { tool.run(&ctx).await })
        .await
        .expect("dry run should succeed");

    assert!(logs.contains("-username user@example.com"));
    assert!(logs.contains("-password pw"));
    assert!(logs.contains("-serial SERIAL-123"));
}

#[tokio::test]
async fn test_dry_run_export_empty_credentials_skipped() {
    let ctx = dry_run_context();
    let tool = UnityTool::export("unity", "/p", "Assets/X", "/out/x.unitypackage", "/logs")
        .credentials("", "", "");

    let (_, logs) = run_with_logs(|| async { tool.run(&ctx).await })
        .await
        .expect("dry run should succeed");

    assert!(!logs.contains("-username"));
    assert!(!logs.contains("-password"));
    assert!(!logs.contains("-serial"));
}

#[test]
fn test_resolve_explicit_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let unity = dir.path().join("Unity");
    std::fs::write(&unity, b"stub").expect("write");

    let config = Config::default();
    let resolved = resolve(&config, Some(&unity)).expect("resolve");
    assert_eq!(resolved, unity);
}

#[test]
fn test_resolve_explicit_invalid() {
    let config = Config::default();
    let err = resolve(&config, Some(std::path::Path::new("/nonexistent/Unity")))
        .expect_err("should reject");
    assert!(matches!(
        err.downcast_ref::<UsageError>(),
        Some(UsageError::ExecutableInvalid { .. })
    ));
}

#[test]
fn test_resolve_from_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let unity = dir.path().join("Unity");
    std::fs::write(&unity, b"stub").expect("write");

    let mut config = Config::default();
    config.tools.unity = unity.clone();
    assert_eq!(resolve(&config, None).expect("resolve"), unity);
}

#[test]
fn test_resolve_nothing_configured() {
    let config = Config::default();
    let err = resolve(&config, None).expect_err("should fail");
    assert!(matches!(
        err.downcast_ref::<UsageError>(),
        Some(UsageError::ExecutableNotLocated { .. })
    ));
}
