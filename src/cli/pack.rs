// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pack command arguments.

use clap::Args;
use std::path::PathBuf;

use crate::config::types::BuildConfiguration;

/// Arguments for the `pack` command.
#[derive(Debug, Clone, Default, Args)]
pub struct PackArgs {
    /// Path to the .csproj or .nuspec file, or a directory containing either.
    #[arg(short = 'p', long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Directory receiving the generated .nupkg.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to the NuGet executable. Auto-located when omitted.
    #[arg(short = 'n', long = "nuget-path", value_name = "PATH")]
    pub nuget_path: Option<PathBuf>,

    /// Path to the .unitypackage embedded into the package.
    /// Derived from the project metadata when omitted.
    #[arg(short = 'a', long = "artifact-path", value_name = "PATH")]
    pub artifact_path: Option<PathBuf>,

    /// Build configuration recorded in the package properties.
    #[arg(short = 'c', long, value_name = "CONFIGURATION")]
    pub configuration: Option<BuildConfiguration>,
}
