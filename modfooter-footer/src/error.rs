//! Error types for footer loading.

use thiserror::Error;

/// Errors raised at the loading boundary of the footer formatter.
#[derive(Debug, Error)]
pub enum FooterError {
    /// Content item JSON is malformed or missing required fields.
    #[error("invalid content item: {0}")]
    InvalidItem(#[from] serde_json::Error),

    /// Footer config TOML could not be parsed.
    #[error("invalid footer config: {0}")]
    InvalidConfig(#[from] toml::de::Error),

    /// Config file could not be read.
    #[error("footer I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for footer loading operations.
pub type FooterResult<T> = Result<T, FooterError>;
