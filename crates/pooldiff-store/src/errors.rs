//! Error handling for pooldiff-store
//!
//! Wraps pooldiff-core ExError with store-specific helpers

use pooldiff_core::errors::{ExError, PoolDiffError};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// A snapshot (or snapshot directory) is absent or unreadable
pub fn missing_input(path: &Path, err: &std::io::Error) -> ExError {
    PoolDiffError::MissingInput {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
    .into()
}

/// Create an IO error for a write or rename failure
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::from(PoolDiffError::Io {
        op: operation.to_string(),
        message: err.to_string(),
    })
    .with_path(path.display().to_string())
}

/// Configuration file could not be parsed
pub fn invalid_config(path: &Path, reason: impl std::fmt::Display) -> ExError {
    PoolDiffError::InvalidConfig {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
    .into()
}
