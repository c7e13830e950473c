//! Error types for the icope library.
//!
//! Screening and CSV rendering are total and never fail; errors only arise
//! at the file boundaries (loading answers, writing exports).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for icope operations.
#[derive(Debug, Error)]
pub enum IcopeError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for icope operations.
pub type Result<T> = std::result::Result<T, IcopeError>;
