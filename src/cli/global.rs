// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config-path FILE ← JSON config file
//! --config JSON      ← Inline JSON blob
//! UGET_* env vars
//! --debug/--quiet/--dry/--log-level/... and per-command flags
//!
//! Precedence: CLI flags > env > --config > --config-path > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Inline JSON configuration blob, e.g. '{"nuget":{"feed":"..."}}'.
    #[arg(long = "config", value_name = "JSON")]
    pub config_json: Option<String>,

    /// Path to a JSON configuration file.
    #[arg(long = "config-path", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Verbose external tool output; dumps editor logs after a failed export.
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Suppresses interactive hints when a tool cannot be located.
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Logs the commands that would run without spawning anything.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}
