// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Create command arguments.
//!
//! ```text
//! create: compiled dll+pdb --> Unity project --> .unitypackage
//! Export root: Assets/<root-dir or assembly name>
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::types::BuildConfiguration;

/// Arguments for the `create` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CreateArgs {
    /// Path to the .csproj file, or a directory containing one.
    #[arg(short = 'p', long, value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Directory receiving the exported .unitypackage.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Build configuration whose output is packaged (Debug or Release).
    #[arg(short = 'c', long, value_name = "CONFIGURATION")]
    pub configuration: Option<BuildConfiguration>,

    /// Path to the Unity editor executable.
    #[arg(short = 'u', long = "unity-path", value_name = "PATH")]
    pub unity_path: Option<PathBuf>,

    /// Path to the Unity project used for the export.
    #[arg(short = 't', long = "unity-project-path", value_name = "DIR")]
    pub unity_project_path: Option<PathBuf>,

    /// Export root inside the Unity project, relative to Assets/.
    /// Defaults to the assembly name.
    #[arg(long = "root-dir", value_name = "DIR")]
    pub root_dir: Option<PathBuf>,

    /// Removes .unitypackage files with the same name and configuration
    /// but a different version after a successful export.
    #[arg(long)]
    pub clean: bool,

    /// Unity account name.
    #[arg(long = "unity-username", value_name = "USERNAME")]
    pub unity_username: Option<String>,

    /// Unity account password.
    #[arg(long = "unity-password", value_name = "PASSWORD")]
    pub unity_password: Option<String>,

    /// Unity license serial.
    #[arg(long = "unity-serial", value_name = "SERIAL")]
    pub unity_serial: Option<String>,
}
