//! Portico Client - backend access for the login screen.
//!
//! Provides the concrete collaborators the login screen talks to:
//!
//! - [`BackendClient`] implements [`portico_core::SettingsProvider`] over
//!   `GET /public-settings/{key}?companyId=..`
//! - [`SessionAuthenticator`] implements [`portico_core::Authenticator`] over
//!   `POST /auth/login` and keeps the resulting session in memory

pub mod auth;
pub mod client;
pub mod error;
mod settings;

#[cfg(test)]
mod test_support;

pub use auth::{Session, SessionAuthenticator, SessionUser};
pub use client::{BackendClient, ClientConfig, DEFAULT_BACKEND_URL};
pub use error::{ClientError, Result};
