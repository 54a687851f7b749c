//! Error types for registry loading.

use thiserror::Error;

/// Errors raised while loading a relation registry.
///
/// Resolution itself is infallible; these only surface at the loading boundary.
#[derive(Debug, Error)]
pub enum RelationsError {
    /// Registry JSON is malformed or has the wrong shape.
    #[error("invalid relation registry: {0}")]
    InvalidRegistry(#[from] serde_json::Error),

    /// Registry file could not be read.
    #[error("registry I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for registry operations.
pub type RelationsResult<T> = Result<T, RelationsError>;
