// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `MSBuild` tool for Visual C# project builds.
//!
//! ```text
//! locate: explicit > config/env > install roots > PATH
//! MsBuildTool
//!   <project> /t:Build|/t:Rebuild /p:Configuration=<C> /verbosity:...
//! ```

use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;
use tracing::{debug, info};

use super::{Tool, ToolContext, validate_executable};
use crate::config::Config;
use crate::config::types::BuildConfiguration;
use crate::core::process::{ProcessBuilder, ProcessFlags};
use crate::error::{Result, UsageError};

/// Help flag accepted by every `MSBuild` version; exit code 0 confirms a
/// candidate is really `MSBuild`.
const HELP_FLAG: &str = "/?";

/// Resolves the `MSBuild` executable.
///
/// Order: explicit path, configured/environment path, well-known Windows
/// install roots, PATH. Every candidate must answer `/?` with exit code
/// 0. Returns `Ok(None)` when auto-discovery finds nothing usable.
///
/// # Errors
///
/// Returns `UsageError::ExecutableInvalid` when an explicitly supplied
/// path fails validation.
pub async fn locate(config: &Config, explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if validate_executable(path, HELP_FLAG).await {
            return Ok(Some(path.to_path_buf()));
        }
        return Err(UsageError::ExecutableInvalid {
            tool: "msbuild".to_string(),
            path: path.display().to_string(),
        }
        .into());
    }

    let configured = &config.tools.msbuild;
    if !configured.as_os_str().is_empty() {
        if validate_executable(configured, HELP_FLAG).await {
            return Ok(Some(configured.clone()));
        }
        debug!(path = %configured.display(), "configured msbuild path failed validation");
    }

    for candidate in install_root_candidates() {
        if validate_executable(&candidate, HELP_FLAG).await {
            return Ok(Some(candidate));
        }
    }

    if let Some(candidate) = ProcessBuilder::find("msbuild")
        && validate_executable(&candidate, HELP_FLAG).await
    {
        return Ok(Some(candidate));
    }

    Ok(None)
}

/// Enumerates `MSBuild.exe` candidates under the Windows install roots,
/// in deterministic order: .NET Framework versions first, then Visual
/// Studio editions. Directory entries are visited lexically sorted.
#[cfg(windows)]
fn install_root_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(windir) = std::env::var_os("WINDIR") {
        let framework = Path::new(&windir).join("Microsoft.NET").join("Framework");
        for version_dir in sorted_subdirs(&framework) {
            let exe = version_dir.join("MSBuild.exe");
            if exe.is_file() {
                candidates.push(exe);
            }
        }
    }

    if let Some(program_files) = std::env::var_os("ProgramFiles") {
        let vs_root = Path::new(&program_files).join("Microsoft Visual Studio");
        for year_dir in sorted_subdirs(&vs_root) {
            for edition_dir in sorted_subdirs(&year_dir) {
                for tools_dir in sorted_subdirs(&edition_dir.join("MSBuild")) {
                    let exe = tools_dir.join("Bin").join("MSBuild.exe");
                    if exe.is_file() {
                        candidates.push(exe);
                    }
                }
            }
        }
    }

    candidates
}

#[cfg(not(windows))]
fn install_root_candidates() -> Vec<PathBuf> {
    Vec::new()
}

#[cfg(windows)]
fn sorted_subdirs(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut dirs: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    dirs
}

/// `MSBuild` tool building a Visual C# project.
#[derive(Debug, Clone)]
pub struct MsBuildTool {
    executable: PathBuf,
    project: PathBuf,
    configuration: BuildConfiguration,
    rebuild: bool,
}

impl MsBuildTool {
    /// Creates a new `MsBuildTool` for the given executable and project.
    pub fn new(executable: impl Into<PathBuf>, project: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            project: project.into(),
            configuration: BuildConfiguration::default(),
            rebuild: false,
        }
    }

    #[must_use]
    pub const fn configuration(mut self, configuration: BuildConfiguration) -> Self {
        self.configuration = configuration;
        self
    }

    /// Runs the Rebuild target instead of Build.
    #[must_use]
    pub const fn rebuild(mut self, rebuild: bool) -> Self {
        self.rebuild = rebuild;
        self
    }

    fn builder(&self, ctx: &ToolContext) -> ProcessBuilder {
        let target = if self.rebuild { "Rebuild" } else { "Build" };
        let verbosity = if ctx.is_debug() { "detailed" } else { "normal" };

        ProcessBuilder::new(&self.executable)
            .name("msbuild")
            .arg(&self.project)
            .arg(format!("/t:{target}"))
            .arg(format!("/p:Configuration={}", self.configuration))
            .arg(format!("/verbosity:{verbosity}"))
            .flag(ProcessFlags::ALLOW_FAILURE)
    }

    async fn do_run(&self, ctx: &ToolContext) -> Result<i32> {
        let builder = self.builder(ctx);

        if ctx.is_dry_run() {
            info!("[dry-run] Would run: {}", builder.command_line());
            return Ok(0);
        }

        debug!(command = %builder.command_line(), "running msbuild");
        let output = builder.run().await?;
        Ok(output.exit_code())
    }
}

impl Tool for MsBuildTool {
    fn name(&self) -> &str {
        "msbuild"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<i32>> {
        Box::pin(self.do_run(ctx))
    }
}
