// uget-rs: uGet CLI - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//! anyhow::Result carries every command error; typed sub-errors are
//! attached as the source and recovered via downcast:
//!   Usage    InvalidPath, DescriptorNotFound, ExecutableInvalid, ...
//!   Config   ParseError, InvalidValue
//!   Project  DescriptorNotFound, MalformedXml, VersionNotFound
//!   Process  ExecutableNotFound
//!   Fs       NotFound, IoError
//!
//! UsageError maps to exit code 2; everything else exits 1.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Exit code for usage errors (bad paths, unresolvable executables, missing metadata).
pub const USAGE_EXIT_CODE: u8 = 2;

// --- Usage Errors ---

/// Errors caused by invalid user input. Reported with a message and a
/// distinct exit code; nothing is attempted afterwards.
#[derive(Debug, Error)]
pub enum UsageError {
    /// Path does not point at a usable file or directory.
    #[error("invalid path {path}: {message}")]
    InvalidPath { path: String, message: String },

    /// No project or package descriptor could be located.
    #[error(
        "path must be a valid path to .csproj file, .nuspec file, \
         or a directory containing either: {path}"
    )]
    DescriptorNotFound { path: String },

    /// An explicitly supplied tool path failed validation.
    #[error("{path} is not a valid {tool} executable")]
    ExecutableInvalid { tool: String, path: String },

    /// Auto-discovery found no usable executable.
    #[error("failed to locate {tool} executable")]
    ExecutableNotLocated { tool: String },

    /// A required metadata field could not be derived.
    #[error("failed to identify {what}")]
    MissingMetadata { what: String },

    /// An expected artifact file is absent.
    #[error("failed to find {what} at path {path}")]
    ArtifactNotFound { what: String, path: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration content.
    #[error("failed to parse config '{source_name}': {message}")]
    ParseError { source_name: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Project Errors ---

/// Errors while reading `.csproj` / `.nuspec` descriptors.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// Descriptor file could not be located.
    #[error("failed to locate {extension} at path: {path}")]
    DescriptorNotFound { extension: String, path: String },

    /// Descriptor XML is malformed.
    #[error("failed to parse {path}: {message}")]
    MalformedXml { path: String, message: String },

    /// A companion source file exists but the expected pattern is absent.
    #[error("failed to extract AssemblyVersion from {path}")]
    VersionNotFound { path: String },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
