// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build command implementation.
//!
//! ```text
//! locate .csproj --> resolve MSBuild --> msbuild <project> /t:Build
//! exit code passed through
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::cli::build::BuildArgs;
use crate::config::Config;
use crate::error::{Result, UsageError};
use crate::project::CsProj;
use crate::tool::msbuild::{self, MsBuildTool};
use crate::tool::{Tool, ToolContext};

/// Main handler for the `build` command. Returns MSBuild's exit code.
///
/// # Errors
///
/// Returns a usage error when the `.csproj` or the `MSBuild` executable
/// cannot be located.
pub async fn run_build_command(args: &BuildArgs, config: &Config) -> Result<i32> {
    let mut config = config.clone();
    if let Some(path) = &args.path {
        config.project.path = path.clone();
    }
    if let Some(configuration) = args.configuration {
        config.project.configuration = configuration;
    }

    let csproj_path = locate_csproj(&config.project.path)?;
    let msbuild_path = resolve_msbuild(&config, args.msbuild_path.as_deref()).await?;

    let configuration = config.project.configuration;
    let ctx = ToolContext::new(Arc::new(config));
    let tool = MsBuildTool::new(msbuild_path, csproj_path)
        .configuration(configuration)
        .rebuild(args.rebuild);

    tool.run(&ctx).await
}

/// Locates the `.csproj` to build.
pub(crate) fn locate_csproj(path: &Path) -> Result<PathBuf> {
    CsProj::find_at_path(path).ok_or_else(|| {
        UsageError::DescriptorNotFound {
            path: path.display().to_string(),
        }
        .into()
    })
}

/// Resolves the `MSBuild` executable, printing install hints when
/// auto-discovery fails and hints are not suppressed.
async fn resolve_msbuild(config: &Config, explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = msbuild::locate(config, explicit).await? {
        return Ok(path);
    }

    if !config.global.quiet {
        info!(
            "You can install msbuild as part of the Visual Studio package: \
             https://visualstudio.microsoft.com/vs/"
        );
    }
    Err(UsageError::ExecutableNotLocated {
        tool: "msbuild".to_string(),
    }
    .into())
}
