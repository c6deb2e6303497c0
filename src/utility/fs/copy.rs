// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use anyhow::Context;
use ignore::WalkBuilder;
use tokio::fs;

use crate::error::Result;

/// Recursively copies the contents of `src` into `dst`, skipping any
/// entry (file or directory) whose name matches one of
/// `exclude_names`.
///
/// Creates `dst` if it doesn't exist. The walk ignores no files on its
/// own; `.gitignore` and hidden-file filtering are disabled so the copy
/// is exact apart from the exclusions.
///
/// # Errors
///
/// Returns an error if any IO operation fails (traversal, creating
/// directories, copying).
pub async fn copy_dir_contents(src: &Path, dst: &Path, exclude_names: &[&str]) -> Result<()> {
    fs::create_dir_all(dst)
        .await
        .with_context(|| format!("failed to create directory {}", dst.display()))?;

    let excluded: Vec<String> = exclude_names.iter().map(ToString::to_string).collect();
    let walker = WalkBuilder::new(src)
        .hidden(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .filter_entry(move |entry| {
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !excluded.iter().any(|e| e == name))
        })
        .build();

    for entry in walker {
        let entry = entry.with_context(|| format!("failed to walk {}", src.display()))?;
        let src_path = entry.path();
        if src_path == src {
            continue;
        }
        let relative = src_path
            .strip_prefix(src)
            .with_context(|| format!("path {} escapes {}", src_path.display(), src.display()))?;
        let dst_path: PathBuf = dst.join(relative);

        if entry.file_type().is_some_and(|t| t.is_dir()) {
            fs::create_dir_all(&dst_path)
                .await
                .with_context(|| format!("failed to create directory {}", dst_path.display()))?;
        } else {
            if let Some(parent) = dst_path.parent() {
                fs::create_dir_all(parent).await.with_context(|| {
                    format!("failed to create directory {}", parent.display())
                })?;
            }
            fs::copy(src_path, &dst_path).await.with_context(|| {
                format!(
                    "failed to copy {} to {}",
                    src_path.display(),
                    dst_path.display()
                )
            })?;
        }
    }

    Ok(())
}

/// Replaces `dst` with a copy of `src`: the destination tree is removed
/// first so files deleted in the source don't linger.
///
/// # Errors
///
/// Returns an error if the removal or copy fails.
pub async fn replace_dir(src: &Path, dst: &Path) -> Result<()> {
    if dst.exists() {
        fs::remove_dir_all(dst)
            .await
            .with_context(|| format!("failed to remove directory {}", dst.display()))?;
    }
    copy_dir_contents(src, dst, &[]).await
}
