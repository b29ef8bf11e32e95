//! Error types for validation runs.
//!
//! This module defines [`ValidateError`], the error type returned by check
//! groups, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Missing files, variables and packages are *not* errors; checks report
//!   them as failed results
//! - `ValidateError` covers things that went wrong while checking
//! - Use `anyhow::Error` (via `ValidateError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for validation operations.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// A file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file exists but is not valid UTF-8 text.
    #[error("File is not valid UTF-8: {path}")]
    InvalidUtf8 { path: PathBuf },

    /// A package is installed but raised an error other than `ImportError`
    /// while being imported.
    #[error("{package} failed to import: {reason}")]
    PackageImport { package: String, reason: String },

    /// The requested project root is not a directory.
    #[error("Project root not found: {path}")]
    ProjectRootNotFound { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for validation operations.
pub type Result<T> = std::result::Result<T, ValidateError>;
