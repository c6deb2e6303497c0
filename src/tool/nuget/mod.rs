// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `NuGet` tool for packaging and publishing.
//!
//! ```text
//! locate: explicit > config/env > PATH
//! NuGetTool
//!   pack <path> -OutputDirectory <dir> -Properties k=v;k=v -Verbosity ...
//!   push <path> [-Source <feed>] [-ApiKey <key>] -Verbosity ...
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;
use tracing::{debug, info};

use super::{Tool, ToolContext, validate_executable};
use crate::config::Config;
use crate::core::process::{ProcessBuilder, ProcessFlags};
use crate::error::{Result, UsageError};

/// `nuget help` exits 0 for any real NuGet CLI.
const HELP_FLAG: &str = "help";

/// Resolves the `NuGet` executable: explicit path, configured path,
/// `nuget` on PATH. Returns `Ok(None)` when auto-discovery finds
/// nothing usable.
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
            tool: "nuget".to_string(),
            path: path.display().to_string(),
        }
        .into());
    }

    let configured = &config.tools.nuget;
    if !configured.as_os_str().is_empty() {
        if validate_executable(configured, HELP_FLAG).await {
            return Ok(Some(configured.clone()));
        }
        debug!(path = %configured.display(), "configured nuget path failed validation");
    }

    if let Some(candidate) = ProcessBuilder::find("nuget")
        && validate_executable(&candidate, HELP_FLAG).await
    {
        return Ok(Some(candidate));
    }

    Ok(None)
}

/// Normalizes a version string the way `nuget pack` does when naming the
/// produced `.nupkg`: a 4-component version whose fourth component is
/// `0` loses that component. `1.0.0.1` and shorter versions pass
/// through unchanged.
///
/// # Errors
///
/// Returns an error for non-numeric components or more than 4
/// components.
pub fn normalize_pack_version(version: &str) -> Result<String> {
    let components: Vec<&str> = version.split('.').collect();
    if components.len() > 4 || components.is_empty() {
        anyhow::bail!("invalid version '{version}': expected 1 to 4 components");
    }
    for component in &components {
        if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
            anyhow::bail!("invalid version '{version}': component '{component}' is not numeric");
        }
    }

    if components.len() == 4 && components[3] == "0" {
        return Ok(components[..3].join("."));
    }
    Ok(version.to_string())
}

/// `NuGet` operation to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
enum NuGetOperation {
    Pack {
        output_dir: PathBuf,
        properties: BTreeMap<String, String>,
    },
    Push {
        feed: Option<String>,
        api_key: Option<String>,
    },
}

/// `NuGet` tool packing a `.nuspec`/`.csproj` or pushing a `.nupkg`.
#[derive(Debug, Clone)]
pub struct NuGetTool {
    executable: PathBuf,
    path: PathBuf,
    operation: NuGetOperation,
}

impl NuGetTool {
    /// Creates a pack operation for the given descriptor path.
    pub fn pack(
        executable: impl Into<PathBuf>,
        path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            executable: executable.into(),
            path: path.into(),
            operation: NuGetOperation::Pack {
                output_dir: output_dir.into(),
                properties: BTreeMap::new(),
            },
        }
    }

    /// Creates a push operation for the given `.nupkg` path.
    pub fn push(executable: impl Into<PathBuf>, package: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            path: package.into(),
            operation: NuGetOperation::Push {
                feed: None,
                api_key: None,
            },
        }
    }

    /// Adds a `-Properties` entry (pack only; ignored for push).
    #[must_use]
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let NuGetOperation::Pack { properties, .. } = &mut self.operation {
            properties.insert(key.into(), value.into());
        }
        self
    }

    /// Sets the target feed (`-Source`), skipped when empty.
    #[must_use]
    pub fn feed(mut self, feed: impl Into<String>) -> Self {
        if let NuGetOperation::Push { feed: slot, .. } = &mut self.operation {
            let feed = feed.into();
            *slot = (!feed.is_empty()).then_some(feed);
        }
        self
    }

    /// Sets the feed api key (`-ApiKey`), skipped when empty.
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        if let NuGetOperation::Push { api_key: slot, .. } = &mut self.operation {
            let api_key = api_key.into();
            *slot = (!api_key.is_empty()).then_some(api_key);
        }
        self
    }

    fn builder(&self, ctx: &ToolContext) -> ProcessBuilder {
        let verbosity = if ctx.is_debug() { "detailed" } else { "normal" };

        let mut builder = ProcessBuilder::new(&self.executable).name("nuget");
        match &self.operation {
            NuGetOperation::Pack {
                output_dir,
                properties,
            } => {
                builder = builder
                    .arg("pack")
                    .arg(&self.path)
                    .arg("-OutputDirectory")
                    .arg(output_dir);
                if !properties.is_empty() {
                    let props: Vec<String> = properties
                        .iter()
                        .map(|(key, value)| format!("{key}={value}"))
                        .collect();
                    builder = builder.arg("-Properties").arg(props.join(";"));
                }
            }
            NuGetOperation::Push { feed, api_key } => {
                builder = builder.arg("push").arg(&self.path);
                if let Some(feed) = feed {
                    builder = builder.arg("-Source").arg(feed);
                }
                if let Some(api_key) = api_key {
                    builder = builder.arg("-ApiKey").arg(api_key);
                }
            }
        }
        builder
            .arg("-Verbosity")
            .arg(verbosity)
            .flag(ProcessFlags::ALLOW_FAILURE)
    }

    async fn do_run(&self, ctx: &ToolContext) -> Result<i32> {
        let builder = self.builder(ctx);

        if ctx.is_dry_run() {
            info!("[dry-run] Would run: {}", builder.command_line());
            return Ok(0);
        }

        debug!(command = %builder.command_line(), "running nuget");
        let output = builder.run().await?;
        Ok(output.exit_code())
    }
}

impl Tool for NuGetTool {
    fn name(&self) -> &str {
        "nuget"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<i32>> {
        Box::pin(self.do_run(ctx))
    }
}
