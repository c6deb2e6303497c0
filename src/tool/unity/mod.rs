// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Unity editor tool for `.unitypackage` exports.
//!
//! ```text
//! UnityTool
//!   -projectPath <p> -exportPackage <root> <out>
//!   -logFile <log_dir>/unity.log -batchmode -quit
//!   [-username U -password PW -serial S]
//! stdout/stderr -> <log_dir>/unity_{stdout,stderr}.log
//! ```
//!
//! The editor writes its own log through `-logFile`; stdout and stderr
//! are redirected to files as well since batch mode output is noisy and
//! only interesting after a failure.

use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;
use tracing::{debug, info};

use super::{Tool, ToolContext};
use crate::config::Config;
use crate::core::process::{ProcessBuilder, ProcessFlags};
use crate::error::{Result, UsageError};

/// Editor log file names inside the export log directory.
pub const EDITOR_LOG: &str = "unity.log";
pub const STDOUT_LOG: &str = "unity_stdout.log";
pub const STDERR_LOG: &str = "unity_stderr.log";

/// Resolves the Unity editor executable from the explicit flag or the
/// configuration. The editor has no cheap help invocation, so
/// validation stops at the path pointing to an existing file.
///
/// # Errors
///
/// Returns `UsageError::ExecutableInvalid` for a path that is not a
/// file, and `UsageError::ExecutableNotLocated` when neither flag nor
/// configuration supplies one.
pub fn resolve(config: &Config, explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(UsageError::ExecutableInvalid {
            tool: "unity".to_string(),
            path: path.display().to_string(),
        }
        .into());
    }

    let configured = &config.tools.unity;
    if !configured.as_os_str().is_empty() {
        if configured.is_file() {
            return Ok(configured.clone());
        }
        return Err(UsageError::ExecutableInvalid {
            tool: "unity".to_string(),
            path: configured.display().to_string(),
        }
        .into());
    }

    Err(UsageError::ExecutableNotLocated {
        tool: "unity".to_string(),
    }
    .into())
}

/// Unity editor invocation exporting a package root in batch mode.
#[derive(Debug, Clone)]
pub struct UnityTool {
    executable: PathBuf,
    project_path: PathBuf,
    export_root: PathBuf,
    output_path: PathBuf,
    log_dir: PathBuf,
    username: Option<String>,
    password: Option<String>,
    serial: Option<String>,
}

impl UnityTool {
    /// Creates an export operation.
    ///
    /// `export_root` is the subtree under the Unity project to export
    /// (e.g. `Assets/MyProject`); `output_path` is where the produced
    /// `.unitypackage` lands.
    pub fn export(
        executable: impl Into<PathBuf>,
        project_path: impl Into<PathBuf>,
        export_root: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        log_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            executable: executable.into(),
            project_path: project_path.into(),
            export_root: export_root.into(),
            output_path: output_path.into(),
            log_dir: log_dir.into(),
            username: None,
            password: None,
            serial: None,
        }
    }

    /// Supplies license credentials; empty values are skipped.
    #[must_use]
    pub fn credentials(mut self, username: &str, password: &str, serial: &str) -> Self {
        self.username = (!username.is_empty()).then(|| username.to_string());
        self.password = (!password.is_empty()).then(|| password.to_string());
        self.serial = (!serial.is_empty()).then(|| serial.to_string());
        self
    }

    fn builder(&self) -> ProcessBuilder {
        let mut builder = ProcessBuilder::new(&self.executable)
            .name("unity")
            .arg("-projectPath")
            .arg(&self.project_path)
            .arg("-exportPackage")
            .arg(&self.export_root)
            .arg(&self.output_path)
            .arg("-logFile")
            .arg(self.log_dir.join(EDITOR_LOG))
            .arg("-batchmode")
            .arg("-quit");

        if let Some(username) = &self.username {
            builder = builder.arg("-username").arg(username);
        }
        if let Some(password) = &self.password {
            builder = builder.arg("-password").arg(password);
        }
        if let Some(serial) = &self.serial {
            builder = builder.arg("-serial").arg(serial);
        }

        builder
            .stdout_to_file(self.log_dir.join(STDOUT_LOG))
            .stderr_to_file(self.log_dir.join(STDERR_LOG))
            .flag(ProcessFlags::ALLOW_FAILURE)
    }

    async fn do_run(&self, ctx: &ToolContext) -> Result<i32> {
        let builder = self.builder();

        if ctx.is_dry_run() {
            info!("[dry-run] Would run: {}", builder.command_line());
            return Ok(0);
        }

        tokio::fs::create_dir_all(&self.log_dir).await?;

        debug!(command = %builder.command_line(), "running unity editor");
        let output = builder.run().await?;

        if !output.success() && ctx.is_debug() {
            self.dump_logs().await;
        }

        Ok(output.exit_code())
    }

    /// Dumps the editor log files into the trace after a failed export.
    async fn dump_logs(&self) {
        for name in [EDITOR_LOG, STDOUT_LOG, STDERR_LOG] {
            let path = self.log_dir.join(name);
            match tokio::fs::read_to_string(&path).await {
                Ok(contents) if !contents.trim().is_empty() => {
                    info!(log = name, "--- {name} ---\n{contents}");
                }
                _ => {}
            }
        }
    }
}

impl Tool for UnityTool {
    fn name(&self) -> &str {
        "unity"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<i32>> {
        Box::pin(self.do_run(ctx))
    }
}

#[cfg(test)]
mod tests;
