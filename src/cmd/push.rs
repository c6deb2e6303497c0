// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Push command implementation.
//!
//! ```text
//! locate .nupkg (explicit, or derived from the .csproj and searched in
//! the output dir) --> resolve NuGet --> nuget push
//! exit code passed through
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::artifact::nupkg_filename;
use crate::cli::push::PushArgs;
use crate::cmd::resolve_nuget;
use crate::config::Config;
use crate::error::{FsError, Result, UsageError};
use crate::project::CsProj;
use crate::tool::nuget::{NuGetTool, normalize_pack_version};
use crate::tool::{Tool, ToolContext};

/// Main handler for the `push` command. Returns NuGet's exit code.
///
/// # Errors
///
/// Returns a filesystem error when an explicit `.nupkg` path is absent,
/// and usage errors when no package can be derived or the `NuGet`
/// executable cannot be resolved.
pub async fn run_push_command(args: &PushArgs, config: &Config) -> Result<i32> {
    let mut config = config.clone();
    if let Some(path) = &args.path {
        config.project.path = path.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.project.output_dir = dir.clone();
    }
    if let Some(feed) = &args.feed {
        config.nuget.feed = feed.clone();
    }
    if let Some(api_key) = &args.api_key {
        config.nuget.api_key = api_key.clone();
    }

    let nupkg_path = locate_nupkg(&config.project.path, &config.project.output_dir)?;
    let nuget_path = resolve_nuget(&config, args.nuget_path.as_deref()).await?;

    let feed = config.nuget.feed.clone();
    let api_key = config.nuget.api_key.clone();
    let ctx = ToolContext::new(Arc::new(config));

    let tool = NuGetTool::push(nuget_path, nupkg_path)
        .feed(feed)
        .api_key(api_key);

    tool.run(&ctx).await
}

/// Finds the `.nupkg` to push.
///
/// An explicit `.nupkg` path must exist. Otherwise the path is treated
/// as a `.csproj` location: the package name is derived from the
/// assembly name and NuGet-normalized version, and searched in
/// `output_dir`.
pub(crate) fn locate_nupkg(path: &Path, output_dir: &Path) -> Result<PathBuf> {
    if path.extension().is_some_and(|ext| ext == "nupkg") {
        if !path.is_file() {
            return Err(FsError::NotFound(path.display().to_string()).into());
        }
        return Ok(path.to_path_buf());
    }

    let not_found = || UsageError::ArtifactNotFound {
        what: "Nuget Package (.nupkg) or Visual Studio project".to_string(),
        path: path.display().to_string(),
    };

    if CsProj::find_at_path(path).is_none() {
        return Err(not_found().into());
    }
    let csproj = CsProj::open(path)?;
    let assembly_name = csproj.assembly_name()?.ok_or_else(not_found)?;
    let version = csproj.assembly_version()?.ok_or_else(not_found)?;

    let nupkg_path = output_dir.join(nupkg_filename(
        &assembly_name,
        &normalize_pack_version(&version)?,
    ));
    if !nupkg_path.is_file() {
        return Err(not_found().into());
    }
    Ok(nupkg_path)
}
