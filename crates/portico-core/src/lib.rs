//! Portico Core - Login screen domain model.
//!
//! This crate holds everything the login screen needs that is not rendering:
//!
//! - Credentials and the named form fields
//! - The static language option list and the enabled-language filter
//! - Public setting keys, company scoping, and the mount-time settings
//!   lookups with their fallbacks
//! - Color mode, theme branding, and background resolution
//! - The translation catalog
//! - Collaborator traits for authentication and public settings
//!
//! # Example
//!
//! ```
//! use portico_core::{Credentials, LoginField};
//!
//! let mut credentials = Credentials::default();
//! credentials.set_field(LoginField::Email, "ana@example.com");
//! assert_eq!(credentials.email, "ana@example.com");
//! ```

pub mod auth;
pub mod credentials;
pub mod error;
pub mod i18n;
pub mod language;
pub mod settings;
pub mod theme;

pub use auth::Authenticator;
pub use credentials::{Credentials, LoginField};
pub use error::{CoreError, Result};
pub use i18n::Translator;
pub use language::{LanguageOption, DEFAULT_ENABLED_LANGUAGES, LANGUAGE_OPTIONS};
pub use settings::{CompanyId, LoginSettings, PublicSettingKey, SettingsProvider};
pub use theme::{Background, ColorMode, Palette, ThemeState};

/// Durable storage key holding the selected language code.
pub const LANGUAGE_STORAGE_KEY: &str = "language";
