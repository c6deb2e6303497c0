// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! NuGet package manifest (`.nuspec`) reader.

use std::path::{Path, PathBuf};

use crate::error::ProjectError;
use crate::project::descriptor_at_path;

/// Read-only view over a NuGet package manifest.
///
/// Nuspec schema versions differ only in namespace URI, so elements are
/// matched by local name.
#[derive(Debug, Clone)]
pub struct NuSpec {
    path: PathBuf,
}

impl NuSpec {
    /// Locates a `.nuspec` at the given path (exact file or directory
    /// scan) and opens it.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::DescriptorNotFound` when no `.nuspec` can
    /// be located.
    pub fn open(path: &Path) -> std::result::Result<Self, ProjectError> {
        Self::find_at_path(path)
            .map(|path| Self { path })
            .ok_or_else(|| ProjectError::DescriptorNotFound {
                extension: ".nuspec".to_string(),
                path: path.display().to_string(),
            })
    }

    /// If path is a `.nuspec` file, returns it; if path is a directory,
    /// finds a `.nuspec` file inside it.
    #[must_use]
    pub fn find_at_path(path: &Path) -> Option<PathBuf> {
        descriptor_at_path(path, ".nuspec")
    }

    /// Returns the resolved manifest path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads `package/metadata/id`.
    ///
    /// Replacement tokens (values starting with `$`) are treated as
    /// absent since they only resolve during `nuget pack`.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn package_id(&self) -> std::result::Result<Option<String>, ProjectError> {
        self.metadata_value("id")
    }

    /// Reads `package/metadata/version`, skipping replacement tokens.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn package_version(&self) -> std::result::Result<Option<String>, ProjectError> {
        self.metadata_value("version")
    }

    fn metadata_value(&self, name: &str) -> std::result::Result<Option<String>, ProjectError> {
        let text =
            std::fs::read_to_string(&self.path).map_err(|e| ProjectError::MalformedXml {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;
        let doc = roxmltree::Document::parse(&text).map_err(|e| ProjectError::MalformedXml {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        let value = doc
            .root_element()
            .children()
            .find(|node| node.is_element() && node.tag_name().name() == "metadata")
            .into_iter()
            .flat_map(|metadata| metadata.children())
            .find(|node| node.is_element() && node.tag_name().name() == name)
            .and_then(|node| node.text())
            .map(str::trim)
            .filter(|value| !value.is_empty() && !value.starts_with('$'))
            .map(ToString::to_string);
        Ok(value)
    }
}
