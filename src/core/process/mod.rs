// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process spawning and execution.
//!
//! ```text
//! builder.rs  ProcessBuilder configuration (args, streams, flags)
//! runner.rs   spawn/wait/validate, stream forwarding
//! ```

pub mod builder;
mod runner;


pub use builder::{ProcessBuilder, ProcessFlags, ProcessOutput, StreamFlags};
