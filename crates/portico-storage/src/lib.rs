//! Portico Storage - SQLite preference storage.
//!
//! Holds the small set of values that must survive a reload of the login
//! screen, most importantly the selected `language`.
//!
//! # Example
//!
//! ```no_run
//! use portico_storage::Database;
//!
//! let db = Database::in_memory().unwrap();
//! db.set_language("en").unwrap();
//! assert_eq!(db.language().unwrap().as_deref(), Some("en"));
//! ```

mod connection;
mod database;
pub mod error;
pub mod models;
pub mod repository;
mod schema;

pub use connection::SharedConnection;
pub use database::Database;
pub use error::{Result, StorageError};
pub use models::Preference;
