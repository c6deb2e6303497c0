// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build command arguments.

use clap::Args;
use std::path::PathBuf;

use crate::config::types::BuildConfiguration;

/// Arguments for the `build` command.
#[derive(Debug, Clone, Default, Args)]
pub struct BuildArgs {
    /// Path to the .csproj file, or a directory containing one.
    #[arg(short = 'p', long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Build configuration (Debug or Release).
    #[arg(short = 'c', long, value_name = "CONFIGURATION")]
    pub configuration: Option<BuildConfiguration>,

    /// Path to the MSBuild executable. Auto-located when omitted.
    #[arg(short = 'm', long = "msbuild-path", value_name = "PATH")]
    pub msbuild_path: Option<PathBuf>,

    /// Runs the Rebuild target instead of Build.
    #[arg(short = 'r', long)]
    pub rebuild: bool,
}
