//! Error types for account file operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating, reading or writing account files.
#[derive(Debug, Error)]
pub enum AccountsError {
    /// A file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A file was read but is not the expected JSON.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A file could not be written or moved into place.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Destination that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A value could not be encoded as JSON.
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// Key generation failed.
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    /// The partition plan cannot produce any output.
    #[error("invalid partition plan: {0}")]
    InvalidPlan(String),
}

/// A specialized Result type for account file operations.
pub type Result<T> = std::result::Result<T, AccountsError>;
