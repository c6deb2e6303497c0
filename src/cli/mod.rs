// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for uget-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! uget [global options] <command>
//! build   compile the C# project with MSBuild
//! create  export a .unitypackage via the Unity editor
//! pack    pack a NuGet package embedding the .unitypackage
//! push    push the .nupkg to a feed
//! options dump the resolved configuration
//! version
//! ```

pub mod build;
pub mod create;
pub mod global;
pub mod pack;
pub mod push;


use clap::{Parser, Subcommand};

use crate::cli::build::BuildArgs;
use crate::cli::create::CreateArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::pack::PackArgs;
use crate::cli::push::PushArgs;

/// uGet CLI - Rust Port
///
/// Build, package and publish Unity plugins distributed via `NuGet`.
#[derive(Debug, Parser)]
#[command(
    name = "uget",
    author,
    version,
    about = "Unity package build and publish tool",
    long_about = "uget-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Builds a Visual C# project with MSBuild, exports the compiled\n\
                  plugin as a .unitypackage through the Unity editor, packs it\n\
                  into a NuGet package and pushes it to a feed. Each step is a\n\
                  separate command; a typical release runs\n\
                  `uget build`, `uget create`, `uget pack`, `uget push`.",
    after_help = "CONFIGURATION:\n\n\
                  Options come from (lowest to highest precedence) a JSON file\n\
                  given with --config-path, an inline JSON blob given with\n\
                  --config, UGET_* environment variables (UGET_TOOLS__MSBUILD,\n\
                  UGET_NUGET__API_KEY, ...) and explicit command-line flags."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their resolved values.
    Options,

    /// Builds the C# project with `MSBuild`.
    Build(BuildArgs),

    /// Exports the built plugin as a .unitypackage.
    Create(CreateArgs),

    /// Packs the `NuGet` package embedding the .unitypackage.
    Pack(PackArgs),

    /// Pushes the .nupkg to a `NuGet` feed.
    Push(PushArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
