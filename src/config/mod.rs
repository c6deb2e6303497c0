// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for uget-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. --config-path FILE (JSON)
//! 3. --config JSON (inline blob)
//! 4. UGET_* env vars
//! 5. CLI flags
//! ```
//!
//! The environment is consulted exactly once, inside the loader; nothing
//! downstream reads it again. Two historical variants of this tool
//! disagreed on whether a config file overrides explicit flags — here
//! flags always win.
//!
//! # Environment Variable Mapping
//!
//! ```text
//! UGET_TOOLS__MSBUILD=/path  → tools.msbuild = "/path"
//! UGET_TOOLS__NUGET=/path    → tools.nuget = "/path"
//! UGET_NUGET__API_KEY=secret → nuget.api_key = "secret"
//! UGET_UNITY__USERNAME=user  → unity.username = "user"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{GlobalConfig, NuGetConfig, ProjectConfig, ToolsConfig, UnityConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Project input/output options.
    pub project: ProjectConfig,
    /// Tool paths.
    pub tools: ToolsConfig,
    /// NuGet feed options.
    pub nuget: NuGetConfig,
    /// Unity project and credentials.
    pub unity: UnityConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use uget_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_json_file("uget.json")
    ///     .with_env_prefix("UGET")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single JSON file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid JSON,
    /// or does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_json_file(path).build()
    }

    /// Load configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid JSON or does not match
    /// the `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_json_str(content).build()
    }

    /// Format configuration options for display.
    ///
    /// Sensitive fields (api key, password, serial) are replaced with a
    /// `[hidden]` marker. Output is deterministically ordered.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_project_options(&mut options);
        self.format_tools_options(&mut options);
        self.format_nuget_options(&mut options);
        self.format_unity_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.debug".into(), self.global.debug.to_string());
        options.insert("global.quiet".into(), self.global.quiet.to_string());
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global.log_file.display().to_string(),
        );
    }

    fn format_project_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "project.path".into(),
            self.project.path.display().to_string(),
        );
        options.insert(
            "project.output_dir".into(),
            self.project.output_dir.display().to_string(),
        );
        options.insert(
            "project.configuration".into(),
            self.project.configuration.to_string(),
        );
    }

    fn format_tools_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "tools.msbuild".into(),
            self.tools.msbuild.display().to_string(),
        );
        options.insert("tools.nuget".into(), self.tools.nuget.display().to_string());
        options.insert("tools.unity".into(), self.tools.unity.display().to_string());
    }

    fn format_nuget_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("nuget.feed".into(), self.nuget.feed.clone());
        if !self.nuget.api_key.is_empty() {
            options.insert("nuget.api_key".into(), "[hidden]".into());
        }
    }

    fn format_unity_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "unity.project_path".into(),
            self.unity.project_path.display().to_string(),
        );
        options.insert(
            "unity.root_dir".into(),
            self.unity.root_dir.display().to_string(),
        );
        options.insert("unity.username".into(), self.unity.username.clone());
        if !self.unity.password.is_empty() {
            options.insert("unity.password".into(), "[hidden]".into());
        }
        if !self.unity.serial.is_empty() {
            options.insert("unity.serial".into(), "[hidden]".into());
        }
    }
}
