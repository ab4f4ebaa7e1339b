//! Error types for the UI crate.

use thiserror::Error;

/// UI-specific errors.
#[derive(Debug, Error)]
pub enum UiError {
    /// Storage error.
    #[error("storage error: {0}")]
    Storage(#[from] portico_storage::StorageError),

    /// Domain error.
    #[error("{0}")]
    Core(#[from] portico_core::CoreError),

    /// Backend client error.
    #[error("client error: {0}")]
    Client(#[from] portico_client::ClientError),
}

/// Result type for UI operations.
pub type Result<T> = std::result::Result<T, UiError>;
