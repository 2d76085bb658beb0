//! Error types for notypos operations.
//!
//! This module defines [`NotyposError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `NotyposError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `NotyposError::Other`) for unexpected errors
//! - Findings of the lint rule are diagnostics, never errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for notypos operations.
#[derive(Debug, Error)]
pub enum NotyposError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A source file could not be parsed as ECMAScript.
    #[error("Failed to parse {path}:{line}:{column}: {message}")]
    SourceParseError {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// Nothing to analyze under the given paths.
    #[error("No source files found in {}", join_paths(.paths))]
    NoSourceFiles { paths: Vec<PathBuf> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for notypos operations.
pub type Result<T> = std::result::Result<T, NotyposError>;
