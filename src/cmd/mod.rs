// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   build, create, pack, push, options
//! ```
//!
//! Handlers return the exit code of the external tool they drove;
//! `build`, `pack` and `push` pass it through verbatim.

pub mod build;
pub mod config;
pub mod create;
pub mod pack;
pub mod push;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Config;
use crate::error::{USAGE_EXIT_CODE, UsageError};
use crate::tool::nuget;

/// Maps a command failure to a process exit code: usage errors get their
/// distinct code, everything else is a plain failure.
#[must_use]
pub fn exit_code_for_error(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<UsageError>().is_some() {
        USAGE_EXIT_CODE
    } else {
        1
    }
}

/// Resolves the `NuGet` executable for the `pack` and `push` commands,
/// printing install hints when auto-discovery fails and hints are not
/// suppressed.
pub(crate) async fn resolve_nuget(
    config: &Config,
    explicit: Option<&Path>,
) -> crate::error::Result<PathBuf> {
    if let Some(path) = nuget::locate(config, explicit).await? {
        return Ok(path);
    }

    if !config.global.quiet {
        info!("You can install NuGet from the official website: https://www.nuget.org/downloads");
        info!("You might need to add the NuGet installation folder to your PATH variable.");
    }
    Err(UsageError::ExecutableNotLocated {
        tool: "nuget".to_string(),
    }
    .into())
}
