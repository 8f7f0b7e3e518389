//! Error types for the vault manifest generator.

use std::path::PathBuf;
use thiserror::Error;

/// Manifest generation errors
///
/// Every failure aborts the run; partial manifests are never emitted.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Path not found: {0:?}")]
    PathNotFound(PathBuf),

    #[error("Root directory is not a valid vault node")]
    InvalidRoot,

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
