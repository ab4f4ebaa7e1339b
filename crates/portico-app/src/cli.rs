//! Command-line arguments and their translation into a `LoginConfig`.

use std::path::PathBuf;

use clap::Parser;
use portico_core::{ColorMode, CompanyId, ThemeState};
use portico_ui::LoginConfig;

/// Portico - application login screen
#[derive(Parser, Debug)]
#[command(name = "portico", version, about)]
pub struct Args {
    /// Backend API base URL
    #[arg(long, default_value = "http://localhost:8080")]
    pub backend_url: String,

    /// Frontend base URL for the signup link (defaults to the backend URL)
    #[arg(long)]
    pub frontend_url: Option<String>,

    /// Company whose public settings are shown
    #[arg(long)]
    pub company_id: Option<String>,

    /// URL the screen was opened with; its companyId query parameter is used
    /// when --company-id is not given
    #[arg(long)]
    pub launch_url: Option<String>,

    /// Start in dark mode
    #[arg(long)]
    pub dark: bool,

    /// Application name shown in the window title
    #[arg(long)]
    pub app_name: Option<String>,

    /// Preferences database path
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Company id from `--company-id`, else from the launch URL's query.
    pub fn company_id(&self) -> Option<CompanyId> {
        match (&self.company_id, &self.launch_url) {
            (Some(raw), _) => CompanyId::parse(raw),
            (None, Some(url)) => CompanyId::from_query(url),
            (None, None) => None,
        }
    }

    pub fn login_config(&self) -> LoginConfig {
        let mut theme = ThemeState::default();
        if self.dark {
            theme.mode = ColorMode::Dark;
        }
        if let Some(name) = &self.app_name {
            theme.app_name = name.clone();
        }

        LoginConfig {
            backend_url: self.backend_url.clone(),
            frontend_url: self
                .frontend_url
                .clone()
                .unwrap_or_else(|| self.backend_url.clone()),
            company_id: self.company_id(),
            theme,
        }
    }
}
