// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core process execution layer.
//!
//! ```text
//!        core
//!          |
//!          v
//!       process
//!          |
//!   Builder / Output
//! ```

pub mod process;
