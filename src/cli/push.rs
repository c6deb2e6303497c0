// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Push command arguments.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `push` command.
#[derive(Debug, Clone, Default, Args)]
pub struct PushArgs {
    /// Path to the .nupkg file, or to the .csproj it was packed from.
    #[arg(short = 'p', long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Directory searched for the .nupkg when deriving its name.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// NuGet feed URL, passed as -Source.
    #[arg(short = 'f', long, value_name = "URL")]
    pub feed: Option<String>,

    /// Path to the NuGet executable. Auto-located when omitted.
    #[arg(short = 'n', long = "nuget-path", value_name = "PATH")]
    pub nuget_path: Option<PathBuf>,

    /// Feed api key, passed as -ApiKey.
    #[arg(short = 'a', long = "api-key", value_name = "KEY")]
    pub api_key: Option<String>,
}
