// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for uget-rs.
//!
//! ```text
//! Config: GlobalConfig, ProjectConfig, ToolsConfig, NuGetConfig, UnityConfig
//! BuildConfiguration: Debug | Release (default)
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Build configuration selecting the MSBuild conditional property group
/// and the `Configuration` property passed downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum BuildConfiguration {
    Debug,
    #[default]
    Release,
}

impl std::fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Debug => write!(f, "Debug"),
            Self::Release => write!(f, "Release"),
        }
    }
}

impl std::str::FromStr for BuildConfiguration {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "release" => Ok(Self::Release),
            _ => Err(ConfigError::InvalidValue {
                section: "project".to_string(),
                key: "configuration".to_string(),
                message: format!("expected 'Debug' or 'Release', got '{s}'"),
            }),
        }
    }
}

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Verbose external tool output and log dumps on failure.
    pub debug: bool,
    /// Suppress interactive hints when a tool cannot be located.
    pub quiet: bool,
    /// Log what would run without spawning anything.
    pub dry: bool,
    /// Log level for stdout output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file (empty = console only).
    pub log_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            debug: false,
            quiet: false,
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: PathBuf::new(),
        }
    }
}

/// Project input/output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Path to the `.csproj`/`.nuspec`, or a directory containing either.
    pub path: PathBuf,
    /// Directory receiving generated artifacts.
    pub output_dir: PathBuf,
    /// Build configuration (Debug, Release).
    pub configuration: BuildConfiguration,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            output_dir: PathBuf::from("Output"),
            configuration: BuildConfiguration::default(),
        }
    }
}

/// External tool paths. Empty paths mean auto-locate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    /// `MSBuild` executable.
    pub msbuild: PathBuf,
    /// `NuGet` executable.
    pub nuget: PathBuf,
    /// Unity editor executable.
    pub unity: PathBuf,
}

/// NuGet feed configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NuGetConfig {
    /// Feed URL passed as `-Source`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub feed: String,
    /// Api key passed as `-ApiKey`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_key: String,
}

/// Unity project and credential configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UnityConfig {
    /// Path to the Unity project used to export the `.unitypackage`.
    pub project_path: PathBuf,
    /// Export root inside the Unity project, relative to `Assets/`.
    /// Empty = derived from the assembly name.
    pub root_dir: PathBuf,
    /// Unity account name, passed as `-username`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    /// Unity account password, passed as `-password`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    /// Unity license serial, passed as `-serial`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub serial: String,
}
