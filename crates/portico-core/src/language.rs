//! Supported languages and the enabled-language filter.

use tracing::debug;

/// A selectable language in the switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageOption {
    /// Locale code, e.g. `pt-BR`.
    pub code: &'static str,
    /// Label shown in the dropdown.
    pub label: &'static str,
    /// Flag asset file name.
    pub icon: &'static str,
}

/// The full static list. The first entry is the fallback current language.
pub const LANGUAGE_OPTIONS: [LanguageOption; 4] = [
    LanguageOption {
        code: "pt-BR",
        label: "Português",
        icon: "brazil.png",
    },
    LanguageOption {
        code: "en",
        label: "English",
        icon: "unitedstates.png",
    },
    LanguageOption {
        code: "es",
        label: "Spanish",
        icon: "esspain.png",
    },
    LanguageOption {
        code: "ar",
        label: "عربي",
        icon: "arabe.png",
    },
];

/// Enabled languages when the remote list is missing or unreadable.
pub const DEFAULT_ENABLED_LANGUAGES: [&str; 2] = ["pt-BR", "en"];

/// Returns the default enabled-language list as owned codes.
pub fn default_enabled_languages() -> Vec<String> {
    DEFAULT_ENABLED_LANGUAGES
        .iter()
        .map(|code| code.to_string())
        .collect()
}

/// Looks up a supported language by code.
pub fn find(code: &str) -> Option<&'static LanguageOption> {
    LANGUAGE_OPTIONS.iter().find(|opt| opt.code == code)
}

/// Returns the option matching the active locale, or the first option.
pub fn current(active_code: &str) -> &'static LanguageOption {
    find(active_code).unwrap_or(&LANGUAGE_OPTIONS[0])
}

/// Returns the options whose code appears in `enabled`, in static order.
pub fn enabled_options(enabled: &[String]) -> Vec<&'static LanguageOption> {
    LANGUAGE_OPTIONS
        .iter()
        .filter(|opt| enabled.iter().any(|code| code == opt.code))
        .collect()
}

/// Parses the `enabledLanguages` setting value.
///
/// An empty value or anything that is not a JSON array of strings yields the
/// default list.
pub fn parse_enabled_languages(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return default_enabled_languages();
    }

    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(codes) => codes,
        Err(e) => {
            debug!("Ignoring unreadable enabledLanguages value: {}", e);
            default_enabled_languages()
        }
    }
}
