// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Create command implementation.
//!
//! ```text
//! csproj metadata --> dll+pdb --> Unity project Assets/<root>
//!   stage project copy (minus lock files) --> unity -exportPackage
//!   copy exported subtree back (preserves regenerated GUIDs)
//!   verify .unitypackage, optionally clean stale versions
//! ```
//!
//! The export runs against a staged copy of the Unity project so a
//! concurrently open editor never corrupts the source project; the
//! `Assets/<root>` subtree is copied back afterwards because the export
//! regenerates `.meta` GUIDs that later exports must keep.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::artifact::{remove_stale_packages, unitypackage_filename};
use crate::cli::create::CreateArgs;
use crate::cmd::build::locate_csproj;
use crate::config::Config;
use crate::error::{Result, UsageError};
use crate::project::CsProj;
use crate::tool::unity::{self, UnityTool};
use crate::tool::{Tool, ToolContext};
use crate::utility::fs::{copy_dir_contents, replace_dir};

/// File names excluded when staging the Unity project. Both are editor
/// lock files that only exist while the project is open.
const STAGE_EXCLUSIONS: &[&str] = &["UnityLockfile", "db.lock"];

/// Main handler for the `create` command.
///
/// # Errors
///
/// Returns usage errors for missing metadata or invalid paths, and
/// runtime errors when the build output or the exported package is
/// absent or the editor exits non-zero.
pub async fn run_create_command(args: &CreateArgs, config: &Config) -> Result<i32> {
    let config = apply_args(args, config);
    let dry = config.global.dry;

    let csproj_path = locate_csproj(&config.project.path)?;
    let csproj = CsProj::open(&csproj_path)?;

    let assembly_name = csproj
        .assembly_name()?
        .ok_or_else(|| UsageError::MissingMetadata {
            what: "package id".to_string(),
        })?;
    let version = csproj
        .assembly_version()?
        .ok_or_else(|| UsageError::MissingMetadata {
            what: "package version".to_string(),
        })?;
    let configuration = config.project.configuration.to_string();

    let build_output = build_output_dir(&csproj, &configuration)?;
    if !dry && !build_output.is_dir() {
        return Err(UsageError::InvalidPath {
            path: build_output.display().to_string(),
            message: "output directory not found".to_string(),
        }
        .into());
    }

    let dll_name = format!("{assembly_name}.dll");
    let pdb_name = format!("{assembly_name}.pdb");
    let dll_path = build_output.join(&dll_name);
    let pdb_path = build_output.join(&pdb_name);

    if !dry {
        if !dll_path.is_file() {
            anyhow::bail!(
                "assembly not found at path {}. Did you forget to build the project?",
                dll_path.display()
            );
        }
        if !pdb_path.is_file() {
            anyhow::bail!(
                "debug symbols not found at path {}. Make sure project is set up \
                 to generate debug symbols.",
                pdb_path.display()
            );
        }
    }

    let unity_project = config.unity.project_path.clone();
    if unity_project.as_os_str().is_empty() || (!dry && !unity_project.is_dir()) {
        return Err(UsageError::InvalidPath {
            path: unity_project.display().to_string(),
            message: "not a valid Unity project directory".to_string(),
        }
        .into());
    }

    let root_rel = export_root_relative(&config.unity.root_dir, &assembly_name);
    let unity_path = unity::resolve(&config, args.unity_path.as_deref())?;

    let output_dir = config.project.output_dir.clone();
    let package_name = unitypackage_filename(&assembly_name, &version, &configuration);
    let package_path = output_dir.join(&package_name);

    let ctx = ToolContext::new(Arc::new(config.clone()));

    if dry {
        let tool = UnityTool::export(
            unity_path,
            &unity_project,
            &root_rel,
            &package_path,
            std::env::temp_dir().join("uget-unity-logs"),
        )
        .credentials(
            &config.unity.username,
            &config.unity.password,
            &config.unity.serial,
        );
        return tool.run(&ctx).await;
    }

    // Copy the build output into the source project before staging so
    // the staged copy already carries it.
    let export_root_src = unity_project.join(&root_rel);
    tokio::fs::create_dir_all(&export_root_src).await?;
    tokio::fs::copy(&dll_path, export_root_src.join(&dll_name)).await?;
    tokio::fs::copy(&pdb_path, export_root_src.join(&pdb_name)).await?;

    tokio::fs::create_dir_all(&output_dir).await?;
    let package_path_abs = std::path::absolute(&package_path)?;

    let stage = tempfile::tempdir()?;
    let project_name = unity_project
        .file_name()
        .map_or_else(|| PathBuf::from("project"), PathBuf::from);
    let staged_project = stage.path().join(project_name);
    copy_dir_contents(&unity_project, &staged_project, STAGE_EXCLUSIONS).await?;

    // Log directory survives the run so a failed export can be diagnosed.
    let log_dir = tempfile::Builder::new()
        .prefix("uget-unity-logs-")
        .tempdir()?
        .keep();

    info!("Running Unity to build {package_name}");
    let tool = UnityTool::export(
        unity_path,
        &staged_project,
        &root_rel,
        &package_path_abs,
        &log_dir,
    )
    .credentials(
        &config.unity.username,
        &config.unity.password,
        &config.unity.serial,
    );

    let exit_code = tool.run(&ctx).await?;
    if exit_code != 0 {
        anyhow::bail!(
            "Unity failed with non-zero exit code {exit_code}. Check log files \
             located at: {}",
            log_dir.display()
        );
    }

    replace_dir(&staged_project.join(&root_rel), &export_root_src).await?;
    drop(stage);

    if !package_path.is_file() {
        anyhow::bail!("UnityPackage not found at path: {}", package_path.display());
    }
    info!("Unity package has successfully been built: {}", package_path.display());

    if args.clean {
        remove_stale_packages(&output_dir, &assembly_name, &version, &configuration);
    }

    Ok(0)
}

/// Applies command-line flags over the resolved configuration.
fn apply_args(args: &CreateArgs, config: &Config) -> Config {
    let mut config = config.clone();
    if let Some(path) = &args.path {
        config.project.path = path.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.project.output_dir = dir.clone();
    }
    if let Some(configuration) = args.configuration {
        config.project.configuration = configuration;
    }
    if let Some(dir) = &args.unity_project_path {
        config.unity.project_path = dir.clone();
    }
    if let Some(dir) = &args.root_dir {
        config.unity.root_dir = dir.clone();
    }
    if let Some(username) = &args.unity_username {
        config.unity.username = username.clone();
    }
    if let Some(password) = &args.unity_password {
        config.unity.password = password.clone();
    }
    if let Some(serial) = &args.unity_serial {
        config.unity.serial = serial.clone();
    }
    config
}

/// Returns the export root relative to the Unity project. Defaults to
/// the assembly name and is always forced under `Assets/`.
pub(crate) fn export_root_relative(root_dir: &Path, assembly_name: &str) -> PathBuf {
    let root = if root_dir.as_os_str().is_empty() {
        PathBuf::from(assembly_name)
    } else {
        root_dir.to_path_buf()
    };
    if root.starts_with("Assets") {
        root
    } else {
        Path::new("Assets").join(root)
    }
}

/// Resolves the per-configuration build output directory, relative to
/// the `.csproj` location when the project records a relative path.
fn build_output_dir(csproj: &CsProj, configuration: &str) -> Result<PathBuf> {
    let output = csproj
        .output_path(configuration)?
        .ok_or_else(|| UsageError::MissingMetadata {
            what: format!("output path for configuration {configuration}"),
        })?;
    if output.is_absolute() {
        return Ok(output);
    }
    let csproj_dir = csproj.path().parent().unwrap_or_else(|| Path::new("."));
    Ok(csproj_dir.join(output))
}
