// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration resolution and config-related commands.

use crate::cli::global::GlobalOptions;
use crate::config::{Config, loader::ConfigLoader};
use crate::error::{ConfigError, Result};

/// Resolves the effective configuration from all sources.
///
/// Sources, lowest to highest precedence: struct defaults, the
/// `--config-path` file, the `--config` inline blob, `UGET_*`
/// environment variables, explicit global flags. Boolean flags are only
/// applied when set so an unset flag never shadows a configured value.
///
/// # Errors
///
/// Returns an error when a config source cannot be read or the merged
/// result does not deserialize into [`Config`].
pub fn resolve_config(global: &GlobalOptions) -> Result<Config> {
    let mut loader = ConfigLoader::new();

    if let Some(path) = &global.config_path {
        loader = loader.add_json_file(path);
    }
    if let Some(json) = &global.config_json {
        // Syntax-check the blob up front so a typo is reported against
        // --config instead of an anonymous merged source.
        serde_json::from_str::<serde_json::Value>(json).map_err(|e| ConfigError::ParseError {
            source_name: "--config".to_string(),
            message: e.to_string(),
        })?;
        loader = loader.add_json_str(json);
    }
    loader = loader.with_env_prefix("UGET");

    if global.debug {
        loader = loader.set("global.debug", true)?;
    }
    if global.quiet {
        loader = loader.set("global.quiet", true)?;
    }
    if global.dry {
        loader = loader.set("global.dry", true)?;
    }
    if let Some(level) = global.log_level {
        loader = loader.set("global.output_log_level", i64::from(level))?;
    }
    if let Some(level) = global.file_log_level.or(global.log_level) {
        loader = loader.set("global.file_log_level", i64::from(level))?;
    }
    if let Some(path) = &global.log_file {
        loader = loader.set("global.log_file", path.display().to_string())?;
    }

    loader.build()
}

/// Display current configuration options.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}
