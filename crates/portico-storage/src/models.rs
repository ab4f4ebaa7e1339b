//! Database models.

use chrono::{DateTime, Utc};

/// A durable string preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preference {
    /// Preference key.
    pub key: String,
    /// Raw string value.
    pub value: String,
    /// When the value was last written.
    pub updated_at: DateTime<Utc>,
}
