//! Launch configuration for the login window.

use portico_client::DEFAULT_BACKEND_URL;
use portico_core::{CompanyId, ThemeState};

/// Path of the signup page on the frontend.
pub const SIGNUP_PATH: &str = "/signup";

/// Everything the login window needs to know at launch.
#[derive(Debug, Clone)]
pub struct LoginConfig {
    /// Backend API base URL (settings, auth, public assets).
    pub backend_url: String,
    /// Frontend base URL, used for the signup link.
    pub frontend_url: String,
    /// Company scope for public settings.
    pub company_id: Option<CompanyId>,
    /// Initial theme and branding.
    pub theme: ThemeState,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            frontend_url: DEFAULT_BACKEND_URL.to_string(),
            company_id: None,
            theme: ThemeState::default(),
        }
    }
}

impl LoginConfig {
    /// URL opened by the signup link.
    pub fn signup_url(&self) -> String {
        format!("{}{}", self.frontend_url.trim_end_matches('/'), SIGNUP_PATH)
    }
}
