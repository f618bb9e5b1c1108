//! Error types for loading reference snapshots.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading reference data.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The snapshot file could not be read.
    #[error("Failed to read reference snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot document is not valid JSON for the expected shape.
    #[error("Failed to parse reference snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// A top-level key is not a chain ID.
    #[error("Invalid chain ID key in reference snapshot: {0}")]
    InvalidChainKey(String),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
