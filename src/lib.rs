// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        build / create / pack / push
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  JSON + env + CLI layers  |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!             project      artifact   tool
//!          csproj/nuspec    naming  msbuild/nuget/unity
//!                                      |
//!   +-----------------------------------------+
//!   |  core   process builder and runner      |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod artifact;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod project;
pub mod tool;
pub mod utility;
