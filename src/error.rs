//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for apidoc-query operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods at the loading and process boundaries.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when loading a documentation model fails.
///
/// The query core itself never fails: lookup misses are `None` and malformed type
/// expressions are passed through. Only getting the model into memory can go wrong.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Model file not found at the expected path.
    #[error("Documentation model not found at {}", path.display())]
    NotFound { path: PathBuf },
    /// The model file exists but could not be read.
    #[error("Failed to read documentation model at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The model is not valid JSON or does not match the expected shape.
    #[error("Failed to parse documentation model: {0}")]
    Parse(#[from] serde_json::Error),
}
