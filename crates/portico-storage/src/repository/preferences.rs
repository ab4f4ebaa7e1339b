//! Preference repository.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::Result;
use crate::models::Preference;

/// Repository for durable string preferences.
pub struct PreferenceRepo;

impl PreferenceRepo {
    /// Get a preference.
    pub fn get(conn: &Connection, key: &str) -> Result<Option<Preference>> {
        let mut stmt =
            conn.prepare("SELECT key, value, updated_at FROM preferences WHERE key = ?1")?;

        let preference = stmt
            .query_row([key], |row| {
                let updated_at: String = row.get(2)?;
                Ok(Preference {
                    key: row.get(0)?,
                    value: row.get(1)?,
                    updated_at: DateTime::parse_from_rfc3339(&updated_at)
                        .map(|dt| dt.with_timezone(&Utc))
                        .unwrap_or_else(|_| Utc::now()),
                })
            })
            .optional()?;

        Ok(preference)
    }

    /// Set a preference (insert or update).
    pub fn set(conn: &Connection, key: &str, value: &str) -> Result<()> {
        conn.execute(
            "INSERT INTO preferences (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            params![key, value, Utc::now().to_rfc3339()],
        )?;

        Ok(())
    }

    /// Delete a preference.
    pub fn delete(conn: &Connection, key: &str) -> Result<bool> {
        let deleted = conn.execute("DELETE FROM preferences WHERE key = ?1", [key])?;
        Ok(deleted > 0)
    }
}
