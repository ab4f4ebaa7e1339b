//! Core error types.

use thiserror::Error;

/// Errors raised by the core domain and by collaborator implementations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Unknown form field name.
    #[error("unknown form field: {0}")]
    UnknownField(String),

    /// Color mode other than `light` or `dark`.
    #[error("unknown color mode: {0}")]
    UnknownColorMode(String),

    /// Language code not in the supported list.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// A public setting lookup failed.
    #[error("public setting '{key}' unavailable: {reason}")]
    SettingUnavailable {
        /// The setting key that was requested.
        key: String,
        /// Human-readable failure reason.
        reason: String,
    },
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
