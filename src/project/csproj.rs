// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Visual C# project descriptor (`.csproj`) reader.
//!
//! ```text
//! CsProj::open(path)
//!   assembly_name()            <PropertyGroup><AssemblyName>
//!   output_path(configuration) <PropertyGroup Condition=...><OutputPath>
//!   assembly_version()         Properties/AssemblyInfo.cs regex
//! ```

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::error::ProjectError;
use crate::project::descriptor_at_path;

/// MSBuild project XML namespace. Classic (non-SDK) csproj files qualify
/// every element with it.
const MSBUILD_XMLNS: &str = "http://schemas.microsoft.com/developer/msbuild/2003";

/// Matches `[assembly: AssemblyVersion("1.2.3")]` in AssemblyInfo.cs.
fn assembly_version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\[assembly: AssemblyVersion\("([\d.]+)"\)\]"#)
            .unwrap_or_else(|e| unreachable!("invalid AssemblyVersion regex: {e}"))
    })
}

/// Read-only view over a Visual C# project file.
#[derive(Debug, Clone)]
pub struct CsProj {
    path: PathBuf,
}

impl CsProj {
    /// Locates a `.csproj` at the given path (exact file or directory
    /// scan) and opens it.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::DescriptorNotFound` when no `.csproj` can
    /// be located.
    pub fn open(path: &Path) -> std::result::Result<Self, ProjectError> {
        Self::find_at_path(path)
            .map(|path| Self { path })
            .ok_or_else(|| ProjectError::DescriptorNotFound {
                extension: ".csproj".to_string(),
                path: path.display().to_string(),
            })
    }

    /// If path is a `.csproj` file, returns it; if path is a directory,
    /// finds a `.csproj` file inside it.
    #[must_use]
    pub fn find_at_path(path: &Path) -> Option<PathBuf> {
        descriptor_at_path(path, ".csproj")
    }

    /// Returns the resolved descriptor path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the assembly name from the first `<PropertyGroup>` that
    /// carries an `<AssemblyName>` element.
    ///
    /// Returns `Ok(None)` when the element is absent.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn assembly_name(&self) -> std::result::Result<Option<String>, ProjectError> {
        self.with_document(|doc| {
            property_groups(doc)
                .find_map(|group| element_text(&group, "AssemblyName"))
        })
    }

    /// Reads the `<OutputPath>` of the property group whose `Condition`
    /// selects the given configuration (`AnyCPU` platform).
    ///
    /// Returns `Ok(None)` when no matching group exists.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn output_path(
        &self,
        configuration: &str,
    ) -> std::result::Result<Option<PathBuf>, ProjectError> {
        let condition = format!(" '$(Configuration)|$(Platform)' == '{configuration}|AnyCPU' ");
        self.with_document(|doc| {
            property_groups(doc)
                .filter(|group| group.attribute("Condition") == Some(condition.as_str()))
                .find_map(|group| element_text(&group, "OutputPath"))
                .map(PathBuf::from)
        })
    }

    /// Extracts the assembly version from `Properties/AssemblyInfo.cs`
    /// next to the project file.
    ///
    /// Returns `Ok(None)` when the companion file does not exist; a
    /// present file without an `AssemblyVersion` attribute is a hard
    /// error since every downstream artifact name needs the version.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::VersionNotFound` when the pattern is absent.
    pub fn assembly_version(&self) -> std::result::Result<Option<String>, ProjectError> {
        let assembly_info = self
            .path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join("Properties")
            .join("AssemblyInfo.cs");
        if !assembly_info.is_file() {
            return Ok(None);
        }

        let text = std::fs::read_to_string(&assembly_info).map_err(|e| {
            ProjectError::MalformedXml {
                path: assembly_info.display().to_string(),
                message: e.to_string(),
            }
        })?;

        assembly_version_regex()
            .captures(&text)
            .and_then(|captures| captures.get(1))
            .map(|version| Some(version.as_str().to_string()))
            .ok_or_else(|| ProjectError::VersionNotFound {
                path: assembly_info.display().to_string(),
            })
    }

    /// Parses the descriptor and applies `f` to the document.
    fn with_document<T>(
        &self,
        f: impl FnOnce(&roxmltree::Document<'_>) -> T,
    ) -> std::result::Result<T, ProjectError> {
        let text =
            std::fs::read_to_string(&self.path).map_err(|e| ProjectError::MalformedXml {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;
        let doc = roxmltree::Document::parse(&text).map_err(|e| ProjectError::MalformedXml {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(f(&doc))
    }
}

/// Iterates the `<PropertyGroup>` children of the project root.
fn property_groups<'a>(
    doc: &'a roxmltree::Document<'_>,
) -> impl Iterator<Item = roxmltree::Node<'a, 'a>> {
    doc.root_element()
        .children()
        .filter(|node| node.is_element() && node.has_tag_name((MSBUILD_XMLNS, "PropertyGroup")))
}

/// Returns the trimmed text of a namespaced child element.
fn element_text(group: &roxmltree::Node<'_, '_>, name: &str) -> Option<String> {
    group
        .children()
        .find(|node| node.is_element() && node.has_tag_name((MSBUILD_XMLNS, name)))
        .and_then(|node| node.text())
        .map(|text| text.trim().to_string())
}
