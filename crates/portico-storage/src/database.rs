//! High-level database interface.

use std::path::PathBuf;

use directories::ProjectDirs;
use portico_core::{language, CoreError, LANGUAGE_STORAGE_KEY};
use tracing::{debug, info};

use crate::error::{Result, StorageError};
use crate::connection::SharedConnection;
use crate::repository::PreferenceRepo;

/// Durable preference storage for Portico.
#[derive(Clone)]
pub struct Database {
    conn: SharedConnection,
}

impl Database {
    /// Create a new database in the default app data directory.
    pub fn new() -> Result<Self> {
        Self::with_path(Self::default_db_path()?)
    }

    /// Create a new database at a specific path.
    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        info!("Opening database at: {:?}", path);
        let conn = SharedConnection::open(&path)?;

        Ok(Self { conn })
    }

    /// Create an in-memory database (for testing).
    pub fn in_memory() -> Result<Self> {
        let conn = SharedConnection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Get the default database path.
    pub fn default_db_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "portico", "portico")
            .ok_or_else(|| StorageError::Config("Could not determine app data directory".into()))?;

        Ok(proj_dirs.data_dir().join("portico.db"))
    }

    // === Preferences ===

    /// Get a preference value.
    pub fn get_preference(&self, key: &str) -> Result<Option<String>> {
        let preference = self.conn.with(|conn| PreferenceRepo::get(conn, key))?;
        Ok(preference.map(|p| p.value))
    }

    /// Set a preference value.
    pub fn set_preference(&self, key: &str, value: &str) -> Result<()> {
        self.conn.with(|conn| PreferenceRepo::set(conn, key, value))
    }

    /// Delete a preference.
    pub fn delete_preference(&self, key: &str) -> Result<bool> {
        self.conn.with(|conn| PreferenceRepo::delete(conn, key))
    }

    // === Language ===

    /// The persisted language code, if any.
    pub fn language(&self) -> Result<Option<String>> {
        self.get_preference(LANGUAGE_STORAGE_KEY)
    }

    /// Persist the selected language code.
    pub fn set_language(&self, code: &str) -> Result<()> {
        if language::find(code).is_none() {
            return Err(CoreError::UnsupportedLanguage(code.to_string()).into());
        }

        debug!("Persisting language: {}", code);
        self.set_preference(LANGUAGE_STORAGE_KEY, code)
    }
}
