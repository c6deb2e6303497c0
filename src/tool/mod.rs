// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! External tool invokers.
//!
//! ```text
//! Command --> ToolContext --> ProcessBuilder --> Tools
//!   MsBuild, NuGet, Unity
//! ```
//!
//! Each tool renders its argument list, spawns the external process and
//! hands the exit code back to the orchestrator unmodified. With
//! `--dry` the command line is logged and nothing is spawned.

use std::path::Path;
use std::sync::Arc;

use futures_util::future::BoxFuture;

use crate::config::Config;
use crate::core::process::{ProcessBuilder, ProcessFlags};
use crate::error::Result;

pub mod msbuild;
pub mod nuget;
pub mod unity;

#[cfg(test)]
pub(crate) mod test_utils;

/// Context provided to tools during execution.
#[derive(Clone)]
pub struct ToolContext {
    config: Arc<Config>,
}

impl ToolContext {
    /// Creates a new `ToolContext`.
    #[must_use]
    pub const fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Returns a reference to the configuration.
    #[must_use]
    pub const fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Returns whether this is a dry-run execution.
    #[must_use]
    pub fn is_dry_run(&self) -> bool {
        self.config.global.dry
    }

    /// Returns whether verbose tool output was requested.
    #[must_use]
    pub fn is_debug(&self) -> bool {
        self.config.global.debug
    }

    /// Returns whether interactive hints are suppressed.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.config.global.quiet
    }
}

/// Trait for tools that execute external processes.
///
/// Each tool encapsulates one external operation (msbuild compile,
/// nuget pack, unity export). `run` blocks until the process exits and
/// returns its exit code; interpreting that code is the caller's job.
pub trait Tool: Send + Sync {
    /// Returns the name of this tool (e.g., "msbuild", "nuget").
    fn name(&self) -> &str;

    /// Executes the tool's operation, returning the process exit code.
    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<i32>>;
}

/// Checks whether a candidate executable responds to its help flag with
/// exit code 0. Used by the locate flows to reject paths that exist but
/// are not the expected tool. A bare command name without a path
/// separator is resolved through PATH first.
pub(crate) async fn validate_executable(path: &Path, help_arg: &str) -> bool {
    let resolved = if path.is_file() {
        path.to_path_buf()
    } else {
        let Some(name) = path.to_str().filter(|s| !s.contains(['/', '\\'])) else {
            return false;
        };
        let Some(found) = ProcessBuilder::find(name) else {
            return false;
        };
        found
    };

    let result = ProcessBuilder::new(resolved)
        .arg(help_arg)
        .flag(ProcessFlags::ALLOW_FAILURE)
        .quiet()
        .run()
        .await;

    matches!(result, Ok(output) if output.success())
}
