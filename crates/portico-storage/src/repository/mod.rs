//! Database repositories for each table.

pub mod preferences;

pub use preferences::PreferenceRepo;
