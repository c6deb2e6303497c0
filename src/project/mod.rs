// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project and package descriptor readers.
//!
//! ```text
//! CsProj  .csproj   AssemblyName / OutputPath (per configuration)
//!                   AssemblyVersion via Properties/AssemblyInfo.cs
//! NuSpec  .nuspec   metadata/id, metadata/version
//! ```
//!
//! Descriptors are parsed on demand and never cached; every read opens
//! the file fresh.

pub mod csproj;
pub mod nuspec;


use std::path::{Path, PathBuf};

pub use csproj::CsProj;
pub use nuspec::NuSpec;

/// Finds the first file with the given extension in a directory.
///
/// Entries are visited in lexically sorted order so the result is
/// deterministic regardless of the platform's directory ordering.
#[must_use]
pub fn find_file_with_extension(dir: &Path, extension: &str) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;
    let mut names: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.file_name()
                    .is_some_and(|n| n.to_string_lossy().ends_with(extension))
        })
        .collect();
    names.sort();
    names.into_iter().next()
}

/// Locates a descriptor file: the path itself when it is a file with the
/// extension, or the first matching file when the path is a directory.
#[must_use]
pub fn descriptor_at_path(path: &Path, extension: &str) -> Option<PathBuf> {
    if path.is_file()
        && path
            .file_name()
            .is_some_and(|n| n.to_string_lossy().ends_with(extension))
    {
        return Some(path.to_path_buf());
    }
    if path.is_dir() {
        return find_file_with_extension(path, extension);
    }
    None
}
