//! Error types for filtering-listener.

use thiserror::Error;

/// Main error type for filtering-listener.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// A required argument was missing or invalid at construction time
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The filter strategy failed while evaluating a record
    #[error("Filter predicate failed: {0}")]
    Predicate(String),

    /// The delegate listener failed to handle a record
    #[error("Delegate error: {0}")]
    Delegate(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Regex error
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result alias used across the library.
pub type Result<T, E = ListenerError> = std::result::Result<T, E>;
