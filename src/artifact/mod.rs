// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Artifact naming and output directory upkeep.
//!
//! ```text
//! MyProject_1.2.3_Release.unitypackage
//! MyProject.1.2.3.nupkg
//! ```

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

#[cfg(test)]
mod tests;

/// Matches `{name}_{version}_{configuration}.unitypackage`.
fn unitypackage_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(.*)_(.*)_(.*)\.unitypackage$")
            .unwrap_or_else(|e| unreachable!("invalid unitypackage regex: {e}"))
    })
}

/// Builds the `.unitypackage` file name for a project build.
#[must_use]
pub fn unitypackage_filename(name: &str, version: &str, configuration: &str) -> String {
    format!("{name}_{version}_{configuration}.unitypackage")
}

/// Builds the `.nupkg` file name NuGet produces for a package.
///
/// `version` must already be in NuGet-normalized form.
#[must_use]
pub fn nupkg_filename(package_id: &str, version: &str) -> String {
    format!("{package_id}.{version}.nupkg")
}

/// Splits a `.unitypackage` file name back into `(name, version,
/// configuration)`. Returns `None` for names that do not follow the
/// naming scheme.
#[must_use]
pub fn parse_unitypackage_filename(filename: &str) -> Option<(String, String, String)> {
    let captures = unitypackage_regex().captures(filename)?;
    Some((
        captures.get(1)?.as_str().to_string(),
        captures.get(2)?.as_str().to_string(),
        captures.get(3)?.as_str().to_string(),
    ))
}

/// Removes stale `.unitypackage` files from an output directory.
///
/// A package is stale when it carries the same project name and build
/// configuration but a different version than the one just produced.
/// Companion `.meta` files the editor writes next to a package follow
/// their package. Removal is best effort; failures are logged and
/// skipped so a locked file never fails the build.
pub fn remove_stale_packages(output_dir: &Path, name: &str, version: &str, configuration: &str) {
    let Ok(entries) = std::fs::read_dir(output_dir) else {
        return;
    };

    for entry in entries.filter_map(std::result::Result::ok) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(filename) = path.file_name().map(|n| n.to_string_lossy().to_string()) else {
            continue;
        };
        let package_name = filename.strip_suffix(".meta").unwrap_or(&filename);
        let Some((file_name, file_version, file_configuration)) =
            parse_unitypackage_filename(package_name)
        else {
            continue;
        };
        if file_name == name && file_configuration == configuration && file_version != version {
            debug!(path = %path.display(), "removing stale package");
            if let Err(e) = std::fs::remove_file(&path) {
                warn!(path = %path.display(), error = %e, "failed to remove stale package");
            }
        }
    }
}
