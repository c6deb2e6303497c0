// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities for staging directory trees.
//!
//! ```text
//! copy:  copy_dir_contents()  recursive copy with name exclusions
//!        replace_dir()        delete destination, then copy
//! ```

pub mod copy;


pub use copy::{copy_dir_contents, replace_dir};
