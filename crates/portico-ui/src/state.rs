//! Application state for the login screen.
//!
//! `AppContext` carries the collaborators and lives for the whole window.
//! `LoginState` is the per-mount form state; it is rebuilt from scratch on
//! every reload.

use std::sync::Arc;

use portico_core::settings::{self, PublicSettingKey};
use portico_core::{
    language, Authenticator, Background, Credentials, LanguageOption, LoginField, LoginSettings,
    SettingsProvider, ThemeState, Translator,
};
use portico_storage::Database;
use tracing::{debug, info};

use crate::config::LoginConfig;
use crate::error::Result;

/// Collaborators shared via Dioxus context. Must be Clone.
#[derive(Clone)]
pub struct AppContext {
    /// Public settings source.
    pub settings: Arc<dyn SettingsProvider>,
    /// Authentication handler.
    pub auth: Arc<dyn Authenticator>,
    /// Durable preference storage.
    pub db: Database,
    /// Launch configuration.
    pub config: LoginConfig,
}

impl AppContext {
    /// Builds a translator from the persisted language.
    pub fn stored_translator(&self) -> Translator {
        let stored = match self.db.language() {
            Ok(code) => code,
            Err(e) => {
                debug!("Could not read stored language: {}", e);
                None
            }
        };
        Translator::from_stored(stored.as_deref())
    }

    /// Switches language and persists it. The caller reloads afterwards.
    pub fn select_language(&self, translator: &mut Translator, code: &str) -> Result<()> {
        translator.change_language(code)?;
        self.db.set_language(code)?;
        info!("Language changed to {}", code);
        Ok(())
    }

    /// Runs one public-settings lookup. Failures resolve to that setting's
    /// default.
    pub async fn fetch_setting(&self, key: PublicSettingKey) -> SettingUpdate {
        let provider = self.settings.as_ref();
        let company = self.config.company_id;
        let backend = self.config.backend_url.as_str();

        match key {
            PublicSettingKey::UserCreation => {
                SettingUpdate::AllowSignup(settings::fetch_allow_signup(provider, company).await)
            }
            PublicSettingKey::EnabledLanguages => SettingUpdate::EnabledLanguages(
                settings::fetch_enabled_languages(provider, company).await,
            ),
            PublicSettingKey::BackgroundLight => SettingUpdate::BackgroundLight(
                settings::fetch_background(provider, key, company, backend).await,
            ),
            PublicSettingKey::BackgroundDark => SettingUpdate::BackgroundDark(
                settings::fetch_background(provider, key, company, backend).await,
            ),
        }
    }
}

/// The outcome of one mount-time lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingUpdate {
    AllowSignup(bool),
    EnabledLanguages(Vec<String>),
    BackgroundLight(Option<String>),
    BackgroundDark(Option<String>),
}

impl SettingUpdate {
    /// Writes this result into the display settings.
    pub fn apply(self, target: &mut LoginSettings) {
        match self {
            Self::AllowSignup(allow) => target.allow_signup = allow,
            Self::EnabledLanguages(codes) => target.enabled_languages = codes,
            Self::BackgroundLight(url) => target.background_light = url,
            Self::BackgroundDark(url) => target.background_dark = url,
        }
    }
}

/// Public settings the screen fetches on mount, in no particular order.
pub const MOUNT_SETTINGS: [PublicSettingKey; 4] = [
    PublicSettingKey::UserCreation,
    PublicSettingKey::EnabledLanguages,
    PublicSettingKey::BackgroundLight,
    PublicSettingKey::BackgroundDark,
];

/// Per-mount form state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginState {
    /// Values typed into the form.
    pub credentials: Credentials,
    /// Whether the password input is unmasked.
    pub show_password: bool,
    /// Whether the language dropdown is open.
    pub language_menu_open: bool,
    /// Values derived from public settings.
    pub settings: LoginSettings,
}

impl LoginState {
    /// Merges an input change by field name.
    pub fn on_input(&mut self, name: &str, value: String) {
        if let Err(e) = self.credentials.set_named(name, value) {
            debug!("Ignoring input: {}", e);
        }
    }

    /// Flips password masking.
    pub fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }

    /// The `type` attribute for the password input.
    pub fn password_input_type(&self) -> &'static str {
        if self.show_password {
            "text"
        } else {
            "password"
        }
    }

    pub fn toggle_language_menu(&mut self) {
        self.language_menu_open = !self.language_menu_open;
    }

    /// Credentials to forward on submit.
    pub fn submission(&self) -> Credentials {
        self.credentials.clone()
    }

    /// Returns the current value of a field.
    pub fn value(&self, field: LoginField) -> &str {
        self.credentials.get(field)
    }

    /// Options listed in the dropdown.
    pub fn language_options(&self) -> Vec<&'static LanguageOption> {
        language::enabled_options(&self.settings.enabled_languages)
    }

    /// Background for the current theme.
    pub fn background(&self, theme: &ThemeState) -> Background {
        theme.background(
            self.settings.background_light.as_deref(),
            self.settings.background_dark.as_deref(),
        )
    }
}
