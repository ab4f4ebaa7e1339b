//! Portico UI - Login Screen GUI.
//!
//! This crate provides the desktop login window. It includes:
//!
//! - Email and password form with a masking toggle
//! - Language dropdown backed by persisted preferences
//! - Light/dark theme toggle with backend-provided backgrounds
//! - Optional signup link, driven by the backend's public settings
//!
//! # Usage
//!
//! ```no_run
//! use portico_storage::Database;
//! use portico_ui::{run_login, LoginConfig};
//!
//! let db = Database::new().expect("Failed to open database");
//! run_login(LoginConfig::default(), db).expect("Failed to run login window");
//! ```

mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod state;
pub mod theme;
pub mod views;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use portico_client::{BackendClient, ClientConfig, SessionAuthenticator};
use portico_storage::Database;
use tracing::info;

pub use config::LoginConfig;
pub use error::{Result, UiError};
pub use state::{AppContext, LoginState, SettingUpdate};

/// Runs the login window until it is closed.
pub fn run_login(config: LoginConfig, db: Database) -> Result<()> {
    let client = BackendClient::new(ClientConfig::new(config.backend_url.clone()))?;
    let auth = SessionAuthenticator::new(client.clone());

    info!(
        "Starting login window (backend: {}, company: {:?})",
        client.base_url(),
        config.company_id
    );

    let window = WindowBuilder::new()
        .with_title(config.theme.app_name.clone())
        .with_inner_size(LogicalSize::new(480.0, 720.0))
        .with_resizable(true);
    let desktop = Config::new()
        .with_window(window)
        .with_custom_head(format!("<style>{}</style>", theme::stylesheet()));

    let context = AppContext {
        settings: Arc::new(client),
        auth: Arc::new(auth),
        db,
        config,
    };

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .with_context(context)
        .launch(app::App);

    Ok(())
}
