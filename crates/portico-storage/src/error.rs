//! Storage error types.

use thiserror::Error;

/// Errors that can occur in storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database error from rusqlite.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO error (e.g., creating directories).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Stored value rejected by the domain.
    #[error("Invalid value: {0}")]
    Invalid(#[from] portico_core::CoreError),
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
