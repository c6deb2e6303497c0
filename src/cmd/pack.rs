// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pack command implementation.
//!
//! ```text
//! resolve NuGet --> derive .unitypackage path (unless given)
//!   nuget pack <path> -OutputDirectory <dir>
//!     -Properties Configuration=<C>;unityPackagePath=<artifact>
//! exit code passed through
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::artifact::unitypackage_filename;
use crate::cli::pack::PackArgs;
use crate::cmd::resolve_nuget;
use crate::config::Config;
use crate::error::{Result, UsageError};
use crate::project::{CsProj, NuSpec};
use crate::tool::nuget::NuGetTool;
use crate::tool::{Tool, ToolContext};

/// Main handler for the `pack` command. Returns NuGet's exit code.
///
/// # Errors
///
/// Returns usage errors when the `NuGet` executable, the descriptor or
/// the package metadata cannot be resolved.
pub async fn run_pack_command(args: &PackArgs, config: &Config) -> Result<i32> {
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

    let nuget_path = resolve_nuget(&config, args.nuget_path.as_deref()).await?;

    let configuration = config.project.configuration.to_string();
    let artifact_path = match &args.artifact_path {
        Some(path) => path.clone(),
        None => derive_artifact_path(
            &config.project.path,
            &config.project.output_dir,
            &configuration,
        )?,
    };

    let path = config.project.path.clone();
    let output_dir = config.project.output_dir.clone();
    let ctx = ToolContext::new(Arc::new(config));

    let tool = NuGetTool::pack(nuget_path, path, output_dir)
        .property("Configuration", &configuration)
        .property("unityPackagePath", artifact_path.display().to_string());

    tool.run(&ctx).await
}

/// Derives the `.unitypackage` path embedded into the package from the
/// project metadata: id and version come from the `.csproj` when one
/// exists, otherwise from the `.nuspec`.
pub(crate) fn derive_artifact_path(
    path: &Path,
    output_dir: &Path,
    configuration: &str,
) -> Result<PathBuf> {
    let (package_id, version) = if CsProj::find_at_path(path).is_some() {
        let csproj = CsProj::open(path)?;
        (csproj.assembly_name()?, csproj.assembly_version()?)
    } else if NuSpec::find_at_path(path).is_some() {
        let nuspec = NuSpec::open(path)?;
        (nuspec.package_id()?, nuspec.package_version()?)
    } else {
        return Err(UsageError::DescriptorNotFound {
            path: path.display().to_string(),
        }
        .into());
    };

    let package_id = package_id.ok_or_else(|| UsageError::MissingMetadata {
        what: "package id".to_string(),
    })?;
    let version = version.ok_or_else(|| UsageError::MissingMetadata {
        what: "package version".to_string(),
    })?;

    Ok(output_dir.join(unitypackage_filename(&package_id, &version, configuration)))
}
