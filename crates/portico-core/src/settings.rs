//! Public settings: keys, company scoping, and the mount-time lookups.
//!
//! The login screen reads four public settings when it mounts. Each lookup is
//! independent and every failure is replaced by a fixed default:
//!
//! | key                      | on success                         | on failure      |
//! |--------------------------|------------------------------------|-----------------|
//! | `userCreation`           | signup shown iff value is `enabled` | signup hidden   |
//! | `enabledLanguages`       | JSON array of codes                | `["pt-BR","en"]` |
//! | `appLogoBackgroundLight` | `<backend>/public/<value>`         | no image        |
//! | `appLogoBackgroundDark`  | `<backend>/public/<value>`         | no image        |

use std::fmt;

use async_trait::async_trait;
use tracing::{debug, warn};
use url::{form_urlencoded, Url};

use crate::error::Result;
use crate::language::{default_enabled_languages, parse_enabled_languages};

/// Value of `userCreation` that enables the signup link.
pub const SIGNUP_ENABLED_VALUE: &str = "enabled";

/// Query parameter carrying the company scope.
pub const COMPANY_ID_PARAM: &str = "companyId";

/// Public settings read by the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicSettingKey {
    /// Whether self-service signup is allowed.
    UserCreation,
    /// JSON array of enabled language codes.
    EnabledLanguages,
    /// Background image for light mode.
    BackgroundLight,
    /// Background image for dark mode.
    BackgroundDark,
}

impl PublicSettingKey {
    /// Returns the key as stored on the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserCreation => "userCreation",
            Self::EnabledLanguages => "enabledLanguages",
            Self::BackgroundLight => "appLogoBackgroundLight",
            Self::BackgroundDark => "appLogoBackgroundDark",
        }
    }
}

impl fmt::Display for PublicSettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Company scope for public settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompanyId(pub i64);

impl CompanyId {
    /// Parses a company id with integer-prefix semantics.
    ///
    /// Leading whitespace and a sign are accepted, then decimal digits up to
    /// the first non-digit. `"12abc"` is 12; a value with no leading digits
    /// is no company at all. Digit runs beyond the `i64` range saturate.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim_start();
        let (negative, sign_len) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, 1),
            Some(b'+') => (false, 1),
            _ => (false, 0),
        };

        let digits_len = trimmed[sign_len..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits_len == 0 {
            return None;
        }

        // Only overflow can fail here.
        let value = trimmed[..sign_len + digits_len]
            .parse::<i64>()
            .unwrap_or(if negative { i64::MIN } else { i64::MAX });
        Some(Self(value))
    }

    /// Extracts `companyId` from a URL or a bare query string.
    ///
    /// Accepts `https://host/login?companyId=3`, `?companyId=3` and
    /// `companyId=3&x=y`. Names and values are percent-decoded; the first
    /// occurrence wins.
    pub fn from_query(url_or_query: &str) -> Option<Self> {
        let query = match Url::parse(url_or_query) {
            Ok(url) => url.query().unwrap_or_default().to_string(),
            Err(_) => {
                let query = url_or_query
                    .split_once('?')
                    .map_or(url_or_query, |(_, q)| q);
                query.split('#').next().unwrap_or_default().to_string()
            }
        };

        form_urlencoded::parse(query.as_bytes())
            .find(|(name, _)| name == COMPANY_ID_PARAM)
            .and_then(|(_, value)| Self::parse(&value))
    }
}

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of public settings.
///
/// An empty string means the setting exists but has no value.
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    /// Fetches a public setting, optionally scoped to a company.
    async fn get_public_setting(
        &self,
        key: PublicSettingKey,
        company_id: Option<CompanyId>,
    ) -> Result<String>;
}

/// Builds the public URL of an uploaded asset.
pub fn public_asset_url(backend_url: &str, file: &str) -> String {
    format!("{}/public/{}", backend_url.trim_end_matches('/'), file)
}

/// Reads `userCreation`. Failures hide the signup link.
pub async fn fetch_allow_signup(
    provider: &dyn SettingsProvider,
    company_id: Option<CompanyId>,
) -> bool {
    match provider
        .get_public_setting(PublicSettingKey::UserCreation, company_id)
        .await
    {
        Ok(value) => value == SIGNUP_ENABLED_VALUE,
        Err(e) => {
            warn!("Error reading setting: {}", e);
            false
        }
    }
}

/// Reads `enabledLanguages`. Failures yield the default pair.
pub async fn fetch_enabled_languages(
    provider: &dyn SettingsProvider,
    company_id: Option<CompanyId>,
) -> Vec<String> {
    match provider
        .get_public_setting(PublicSettingKey::EnabledLanguages, company_id)
        .await
    {
        Ok(value) => parse_enabled_languages(&value),
        Err(e) => {
            debug!("enabledLanguages unavailable, using defaults: {}", e);
            default_enabled_languages()
        }
    }
}

/// Reads one of the background settings. Empty values and failures yield no
/// image.
pub async fn fetch_background(
    provider: &dyn SettingsProvider,
    key: PublicSettingKey,
    company_id: Option<CompanyId>,
    backend_url: &str,
) -> Option<String> {
    match provider.get_public_setting(key, company_id).await {
        Ok(value) if !value.is_empty() => Some(public_asset_url(backend_url, &value)),
        Ok(_) => None,
        Err(e) => {
            debug!("{} unavailable: {}", key, e);
            None
        }
    }
}

/// Display state derived from public settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSettings {
    pub allow_signup: bool,
    pub enabled_languages: Vec<String>,
    pub background_light: Option<String>,
    pub background_dark: Option<String>,
}

impl Default for LoginSettings {
    fn default() -> Self {
        Self {
            allow_signup: false,
            enabled_languages: default_enabled_languages(),
            background_light: None,
            background_dark: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::error::CoreError;

    /// Provider backed by a map; missing keys fail.
    #[derive(Default)]
    struct MapProvider {
        values: HashMap<&'static str, String>,
        seen_company: Mutex<Vec<Option<CompanyId>>>,
    }

    impl MapProvider {
        fn with(mut self, key: PublicSettingKey, value: &str) -> Self {
            self.values.insert(key.as_str(), value.to_string());
            self
        }
    }

    #[async_trait]
    impl SettingsProvider for MapProvider {
        async fn get_public_setting(
            &self,
            key: PublicSettingKey,
            company_id: Option<CompanyId>,
        ) -> Result<String> {
            self.seen_company.lock().unwrap().push(company_id);
            self.values
                .get(key.as_str())
                .cloned()
                .ok_or_else(|| CoreError::SettingUnavailable {
                    key: key.to_string(),
                    reason: "missing".into(),
                })
        }
    }

    #[test]
    fn company_id_parses_integer_prefix() {
        assert_eq!(CompanyId::parse("42"), Some(CompanyId(42)));
        assert_eq!(CompanyId::parse("  7"), Some(CompanyId(7)));
        assert_eq!(CompanyId::parse("12abc"), Some(CompanyId(12)));
        assert_eq!(CompanyId::parse("-3"), Some(CompanyId(-3)));
        assert_eq!(CompanyId::parse("abc"), None);
        assert_eq!(CompanyId::parse(""), None);
        assert_eq!(CompanyId::parse("-"), None);
    }

    #[test]
    fn company_id_saturates_out_of_range() {
        assert_eq!(
            CompanyId::parse("99999999999999999999999"),
            Some(CompanyId(i64::MAX))
        );
        assert_eq!(
            CompanyId::parse("-99999999999999999999999x"),
            Some(CompanyId(i64::MIN))
        );
        assert_eq!(
            CompanyId::parse("9223372036854775807"),
            Some(CompanyId(i64::MAX))
        );
    }

    #[test]
    fn company_id_from_query() {
        assert_eq!(
            CompanyId::from_query("https://app.test/login?companyId=5"),
            Some(CompanyId(5))
        );
        assert_eq!(
            CompanyId::from_query("?lang=en&companyId=9#top"),
            Some(CompanyId(9))
        );
        assert_eq!(CompanyId::from_query("companyId=1&companyId=2"), Some(CompanyId(1)));
        assert_eq!(CompanyId::from_query("https://app.test/login"), None);
        assert_eq!(CompanyId::from_query("?companyId="), None);
    }

    #[test]
    fn company_id_from_query_is_percent_decoded() {
        assert_eq!(
            CompanyId::from_query("https://app.test/login?companyId=%31%32"),
            Some(CompanyId(12))
        );
        assert_eq!(CompanyId::from_query("?company%49d=5"), Some(CompanyId(5)));
        assert_eq!(
            CompanyId::from_query("companyId=+7&lang=en"),
            Some(CompanyId(7)),
            "a plus decodes to a leading space"
        );
        assert_eq!(
            CompanyId::from_query("https://app.test/login?x=1#companyId=3"),
            None
        );
    }

    #[test]
    fn public_asset_url_joins_backend_and_file() {
        assert_eq!(
            public_asset_url("http://api.test", "bg.png"),
            "http://api.test/public/bg.png"
        );
        assert_eq!(
            public_asset_url("http://api.test/", "bg.png"),
            "http://api.test/public/bg.png"
        );
    }

    #[tokio::test]
    async fn signup_requires_exact_enabled() {
        for (value, expected) in [
            ("enabled", true),
            ("disabled", false),
            ("Enabled", false),
            (" enabled", false),
            ("", false),
        ] {
            let provider = MapProvider::default().with(PublicSettingKey::UserCreation, value);
            assert_eq!(
                fetch_allow_signup(&provider, Some(CompanyId(1))).await,
                expected,
                "value {:?}",
                value
            );
        }
    }

    #[tokio::test]
    async fn signup_flag_is_independent_of_company() {
        for company in [None, Some(CompanyId(0)), Some(CompanyId(99))] {
            let provider = MapProvider::default().with(PublicSettingKey::UserCreation, "enabled");
            assert!(fetch_allow_signup(&provider, company).await);
            assert_eq!(*provider.seen_company.lock().unwrap(), vec![company]);
        }
    }

    async fn fetch_all(
        provider: &MapProvider,
        company_id: Option<CompanyId>,
        backend_url: &str,
    ) -> LoginSettings {
        LoginSettings {
            allow_signup: fetch_allow_signup(provider, company_id).await,
            enabled_languages: fetch_enabled_languages(provider, company_id).await,
            background_light: fetch_background(
                provider,
                PublicSettingKey::BackgroundLight,
                company_id,
                backend_url,
            )
            .await,
            background_dark: fetch_background(
                provider,
                PublicSettingKey::BackgroundDark,
                company_id,
                backend_url,
            )
            .await,
        }
    }

    #[tokio::test]
    async fn every_failure_falls_back_to_defaults() {
        let provider = MapProvider::default();
        let settings = fetch_all(&provider, None, "http://api.test").await;
        assert_eq!(settings, LoginSettings::default());
        assert!(!settings.allow_signup);
        assert_eq!(settings.enabled_languages, ["pt-BR", "en"]);
        assert!(settings.background_light.is_none());
        assert!(settings.background_dark.is_none());
    }

    #[tokio::test]
    async fn successful_lookups_populate_everything() {
        let provider = MapProvider::default()
            .with(PublicSettingKey::UserCreation, "enabled")
            .with(PublicSettingKey::EnabledLanguages, r#"["en","es","ar"]"#)
            .with(PublicSettingKey::BackgroundLight, "light.jpg")
            .with(PublicSettingKey::BackgroundDark, "dark.jpg");

        let settings = fetch_all(&provider, Some(CompanyId(3)), "http://api.test").await;

        assert!(settings.allow_signup);
        assert_eq!(settings.enabled_languages, ["en", "es", "ar"]);
        assert_eq!(
            settings.background_light.as_deref(),
            Some("http://api.test/public/light.jpg")
        );
        assert_eq!(
            settings.background_dark.as_deref(),
            Some("http://api.test/public/dark.jpg")
        );
        assert_eq!(provider.seen_company.lock().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn partial_failures_are_isolated() {
        let provider = MapProvider::default()
            .with(PublicSettingKey::EnabledLanguages, "not json")
            .with(PublicSettingKey::BackgroundDark, "");

        let settings = fetch_all(&provider, None, "http://api.test").await;

        assert!(!settings.allow_signup);
        assert_eq!(settings.enabled_languages, ["pt-BR", "en"]);
        assert!(settings.background_light.is_none());
        assert!(settings.background_dark.is_none());
    }

    #[test]
    fn fetchers_run_under_block_on() {
        let provider = MapProvider::default().with(PublicSettingKey::BackgroundLight, "sun.png");
        let url = tokio_test::block_on(fetch_background(
            &provider,
            PublicSettingKey::BackgroundLight,
            None,
            "http://x/",
        ));
        assert_eq!(url.as_deref(), Some("http://x/public/sun.png"));
    }
}
