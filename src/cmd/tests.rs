// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use super::build::{locate_csproj, run_build_command};
use super::config::resolve_config;
use super::create::{export_root_relative, run_create_command};
use super::exit_code_for_error;
use super::pack::{derive_artifact_path, run_pack_command};
use super::push::{locate_nupkg, run_push_command};
use crate::cli::build::BuildArgs;
use crate::cli::create::CreateArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::pack::PackArgs;
use crate::cli::push::PushArgs;
use crate::config::Config;
use crate::core::process::ProcessBuilder;
use crate::error::{ConfigError, FsError, USAGE_EXIT_CODE, UsageError};
use crate::tool::test_utils::run_with_logs;

const CSPROJ_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="14.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <PropertyGroup>
    <AssemblyName>TestProject</AssemblyName>
  </PropertyGroup>
</Project>
"#;

const ASSEMBLY_INFO: &str = r#"[assembly: AssemblyVersion("1.2.3")]"#;

fn write_project(dir: &Path) {
    std::fs::write(dir.join("TestProject.csproj"), CSPROJ_XML).expect("write csproj");
    let properties = dir.join("Properties");
    std::fs::create_dir_all(&properties).expect("mkdir");
    std::fs::write(properties.join("AssemblyInfo.cs"), ASSEMBLY_INFO).expect("write info");
}

#[test]
fn test_export_root_defaults_to_assembly_name() {
    assert_eq!(
        export_root_relative(Path::new(""), "MyProject"),
        Path::new("Assets").join("MyProject")
    );
}

#[test]
fn test_export_root_forced_under_assets() {
    assert_eq!(
        export_root_relative(Path::new("Plugins/MyProject"), "MyProject"),
        Path::new("Assets").join("Plugins/MyProject")
    );
    assert_eq!(
        export_root_relative(Path::new("Assets/MyProject"), "ignored"),
        PathBuf::from("Assets/MyProject")
    );
}

#[test]
fn test_locate_csproj_missing_is_usage_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = locate_csproj(dir.path()).expect_err("should fail");
    assert!(matches!(
        err.downcast_ref::<UsageError>(),
        Some(UsageError::DescriptorNotFound { .. })
    ));
    assert_eq!(exit_code_for_error(&err), USAGE_EXIT_CODE);
}

#[test]
fn test_derive_artifact_path_from_csproj() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_project(dir.path());

    let artifact =
        derive_artifact_path(dir.path(), Path::new("Output"), "Release").expect("derive");
    assert_eq!(
        artifact,
        Path::new("Output").join("TestProject_1.2.3_Release.unitypackage")
    );
}

#[test]
fn test_derive_artifact_path_from_nuspec() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("TestProject.nuspec"),
        r#"<?xml version="1.0"?>
<package>
  <metadata>
    <id>NuSpecProject</id>
    <version>2.0.0</version>
  </metadata>
</package>
"#,
    )
    .expect("write nuspec");

    let artifact = derive_artifact_path(dir.path(), Path::new("Out"), "Debug").expect("derive");
    assert_eq!(
        artifact,
        Path::new("Out").join("NuSpecProject_2.0.0_Debug.unitypackage")
    );
}

#[test]
fn test_derive_artifact_path_no_descriptor() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = derive_artifact_path(dir.path(), Path::new("Output"), "Release")
        .expect_err("should fail");
    assert!(matches!(
        err.downcast_ref::<UsageError>(),
        Some(UsageError::DescriptorNotFound { .. })
    ));
}

#[test]
fn test_locate_nupkg_explicit_missing_file() {
    let err = locate_nupkg(Path::new("/nonexistent/pkg.nupkg"), Path::new("Output"))
        .expect_err("should fail");
    assert!(matches!(
        err.downcast_ref::<FsError>(),
        Some(FsError::NotFound(_))
    ));
    assert_eq!(exit_code_for_error(&err), 1);
}

#[test]
fn test_locate_nupkg_explicit_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let nupkg = dir.path().join("TestProject.1.2.3.nupkg");
    std::fs::write(&nupkg, b"pkg").expect("write");

    assert_eq!(locate_nupkg(&nupkg, Path::new("unused")).expect("locate"), nupkg);
}

#[test]
fn test_locate_nupkg_derived_from_csproj() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_project(dir.path());
    let output = dir.path().join("Output");
    std::fs::create_dir_all(&output).expect("mkdir");
    let nupkg = output.join("TestProject.1.2.3.nupkg");
    std::fs::write(&nupkg, b"pkg").expect("write");

    assert_eq!(locate_nupkg(dir.path(), &output).expect("locate"), nupkg);
}

#[test]
fn test_locate_nupkg_derived_uses_normalized_version() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("TestProject.csproj"), CSPROJ_XML).expect("write");
    let properties = dir.path().join("Properties");
    std::fs::create_dir_all(&properties).expect("mkdir");
    std::fs::write(
        properties.join("AssemblyInfo.cs"),
        r#"[assembly: AssemblyVersion("1.2.3.0")]"#,
    )
    .expect("write");

    let output = dir.path().join("Output");
    std::fs::create_dir_all(&output).expect("mkdir");
    // NuGet names the package after the normalized version.
    let nupkg = output.join("TestProject.1.2.3.nupkg");
    std::fs::write(&nupkg, b"pkg").expect("write");

    assert_eq!(locate_nupkg(dir.path(), &output).expect("locate"), nupkg);
}

#[test]
fn test_locate_nupkg_derived_missing_package() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_project(dir.path());
    let output = dir.path().join("Output");
    std::fs::create_dir_all(&output).expect("mkdir");

    let err = locate_nupkg(dir.path(), &output).expect_err("should fail");
    assert!(matches!(
        err.downcast_ref::<UsageError>(),
        Some(UsageError::ArtifactNotFound { .. })
    ));
}

// =============================================================================
// Configuration resolution
// =============================================================================

#[test]
fn test_resolve_config_rejects_malformed_inline_json() {
    let global = GlobalOptions {
        config_json: Some("{not json".to_string()),
        ..GlobalOptions::default()
    };

    let err = resolve_config(&global).expect_err("should fail");
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::ParseError { .. })
    ));
    assert!(err.to_string().contains("--config"));
}

#[test]
fn test_resolve_config_applies_inline_json() {
    let global = GlobalOptions {
        config_json: Some(r#"{"nuget":{"feed":"https://feed.example.com"}}"#.to_string()),
        ..GlobalOptions::default()
    };

    let config = resolve_config(&global).expect("resolve");
    assert_eq!(config.nuget.feed, "https://feed.example.com");
}

// =============================================================================
// Command orchestration (dry runs and preconditions)
// =============================================================================

const CSPROJ_WITH_OUTPUT_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="14.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <PropertyGroup>
    <AssemblyName>TestProject</AssemblyName>
  </PropertyGroup>
  <PropertyGroup Condition=" '$(Configuration)|$(Platform)' == 'Release|AnyCPU' ">
    <OutputPath>bin/Release/</OutputPath>
  </PropertyGroup>
</Project>
"#;

fn write_buildable_project(dir: &Path) {
    std::fs::write(dir.join("TestProject.csproj"), CSPROJ_WITH_OUTPUT_XML).expect("write csproj");
    let properties = dir.join("Properties");
    std::fs::create_dir_all(&properties).expect("mkdir");
    std::fs::write(properties.join("AssemblyInfo.cs"), ASSEMBLY_INFO).expect("write info");
}

fn dry_config(project_dir: &Path) -> Config {
    let mut config = Config::default();
    config.global.dry = true;
    config.project.path = project_dir.to_path_buf();
    config
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_build_command_dry_run_logs_msbuild_invocation() {
    if !ProcessBuilder::exists("echo") {
        return;
    }
    let dir = tempfile::tempdir().expect("tempdir");
    write_buildable_project(dir.path());
    let config = dry_config(dir.path());

    let args = BuildArgs {
        msbuild_path: Some(PathBuf::from("echo")),
        ..BuildArgs::default()
    };
    let (code, logs) = run_with_logs(|| async { run_build_command(&args, &config).await })
        .await
        .expect("dry build should succeed");

    assert_eq!(code, 0);
    assert!(logs.contains("[dry-run] Would run:"));
    assert!(logs.contains("/t:Build"));
    assert!(logs.contains("/p:Configuration=Release"));
}

#[tokio::test]
async fn test_create_command_dry_run_logs_unity_invocation() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_buildable_project(dir.path());

    let unity_exe = dir.path().join("Unity");
    std::fs::write(&unity_exe, b"stub").expect("write unity stub");

    let mut config = dry_config(dir.path());
    config.tools.unity = unity_exe;
    config.unity.project_path = dir.path().join("UnityHost");

    let args = CreateArgs::default();
    let (code, logs) = run_with_logs(|| async { run_create_command(&args, &config).await })
        .await
        .expect("dry create should succeed");

    assert_eq!(code, 0);
    assert!(logs.contains("[dry-run] Would run:"));
    assert!(logs.contains("-exportPackage"));
    assert!(logs.contains(&Path::new("Assets").join("TestProject").display().to_string()));
    assert!(logs.contains("TestProject_1.2.3_Release.unitypackage"));
}

#[tokio::test]
async fn test_create_command_missing_assembly_hint() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_buildable_project(dir.path());
    std::fs::create_dir_all(dir.path().join("bin/Release")).expect("mkdir");

    let mut config = Config::default();
    config.project.path = dir.path().to_path_buf();

    let err = run_create_command(&CreateArgs::default(), &config)
        .await
        .expect_err("missing dll should fail");
    assert!(err.to_string().contains("Did you forget to build the project?"));
}

#[tokio::test]
async fn test_create_command_missing_symbols_hint() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_buildable_project(dir.path());
    let bin = dir.path().join("bin/Release");
    std::fs::create_dir_all(&bin).expect("mkdir");
    std::fs::write(bin.join("TestProject.dll"), b"stub").expect("write dll");

    let mut config = Config::default();
    config.project.path = dir.path().to_path_buf();

    let err = run_create_command(&CreateArgs::default(), &config)
        .await
        .expect_err("missing pdb should fail");
    assert!(err.to_string().contains("generate debug symbols"));
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_pack_command_dry_run_logs_sorted_properties() {
    if !ProcessBuilder::exists("echo") {
        return;
    }
    let dir = tempfile::tempdir().expect("tempdir");
    write_buildable_project(dir.path());
    let config = dry_config(dir.path());

    let args = PackArgs {
        nuget_path: Some(PathBuf::from("echo")),
        ..PackArgs::default()
    };
    let (code, logs) = run_with_logs(|| async { run_pack_command(&args, &config).await })
        .await
        .expect("dry pack should succeed");

    assert_eq!(code, 0);
    assert!(logs.contains("[dry-run] Would run:"));
    assert!(logs.contains("pack"));
    assert!(logs.contains("Configuration=Release;unityPackagePath="));
    assert!(logs.contains("TestProject_1.2.3_Release.unitypackage"));
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_push_command_dry_run_logs_feed() {
    if !ProcessBuilder::exists("echo") {
        return;
    }
    let dir = tempfile::tempdir().expect("tempdir");
    write_buildable_project(dir.path());
    let output = dir.path().join("Output");
    std::fs::create_dir_all(&output).expect("mkdir");
    std::fs::write(output.join("TestProject.1.2.3.nupkg"), b"pkg").expect("write");

    let mut config = dry_config(dir.path());
    config.project.output_dir = output;

    let args = PushArgs {
        nuget_path: Some(PathBuf::from("echo")),
        feed: Some("https://feed.example.com".to_string()),
        ..PushArgs::default()
    };
    let (code, logs) = run_with_logs(|| async { run_push_command(&args, &config).await })
        .await
        .expect("dry push should succeed");

    assert_eq!(code, 0);
    assert!(logs.contains("[dry-run] Would run:"));
    assert!(logs.contains("push"));
    assert!(logs.contains("-Source https://feed.example.com"));
}
