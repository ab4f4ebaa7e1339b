//! Translation catalog and active locale.

use tracing::debug;

use crate::error::{CoreError, Result};
use crate::language;

/// Locale used when nothing has been persisted.
pub const DEFAULT_LANGUAGE: &str = "pt-BR";

/// Locale consulted when a key is missing from the active one.
const FALLBACK_LANGUAGE: &str = "en";

/// `(key, pt-BR, en, es, ar)`
const CATALOG: &[(&str, &str, &str, &str, &str)] = &[
    ("login.form.email", "Email", "Email", "Correo electrónico", "البريد الإلكتروني"),
    ("login.form.password", "Senha", "Password", "Contraseña", "كلمة المرور"),
    ("login.buttons.submit", "Entrar", "Enter", "Ingresar", "دخول"),
    (
        "login.buttons.register",
        "Não tem uma conta? Cadastre-se!",
        "Don't have an account? Register!",
        "¿No tienes cuenta? ¡Regístrate!",
        "ليس لديك حساب؟ سجل الآن!",
    ),
    (
        "login.buttons.togglePassword",
        "Mostrar ou ocultar senha",
        "Toggle password visibility",
        "Mostrar u ocultar contraseña",
        "إظهار أو إخفاء كلمة المرور",
    ),
    ("login.buttons.toggleTheme", "Alternar tema", "Toggle theme", "Cambiar tema", "تبديل السمة"),
];

fn lookup(code: &str, key: &str) -> Option<&'static str> {
    let (_, pt, en, es, ar) = CATALOG.iter().find(|entry| entry.0 == key)?;
    match code {
        "pt-BR" => Some(*pt),
        "en" => Some(*en),
        "es" => Some(*es),
        "ar" => Some(*ar),
        _ => None,
    }
}

/// The i18n collaborator: an active locale plus lookups against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translator {
    language: String,
}

impl Default for Translator {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Translator {
    /// Creates a translator for a persisted code, ignoring unsupported ones.
    pub fn from_stored(stored: Option<&str>) -> Self {
        let mut translator = Self::default();
        if let Some(code) = stored {
            if let Err(e) = translator.change_language(code) {
                debug!("Ignoring stored language: {}", e);
            }
        }
        translator
    }

    /// Returns the active locale code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Switches the active locale.
    pub fn change_language(&mut self, code: &str) -> Result<()> {
        if language::find(code).is_none() {
            return Err(CoreError::UnsupportedLanguage(code.to_string()));
        }
        self.language = code.to_string();
        Ok(())
    }

    /// Translates `key`, falling back to English and then to the key itself.
    pub fn t(&self, key: &str) -> String {
        lookup(&self.language, key)
            .or_else(|| lookup(FALLBACK_LANGUAGE, key))
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }

    /// Whether the active locale is written right to left.
    pub fn is_rtl(&self) -> bool {
        self.language == "ar"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_portuguese() {
        let t = Translator::default();
        assert_eq!(t.language(), "pt-BR");
        assert_eq!(t.t("login.form.password"), "Senha");
    }

    #[test]
    fn change_language_switches_lookups() {
        let mut t = Translator::default();
        t.change_language("es").unwrap();
        assert_eq!(t.t("login.buttons.submit"), "Ingresar");
        assert!(!t.is_rtl());
        t.change_language("ar").unwrap();
        assert!(t.is_rtl());
    }

    #[test]
    fn unsupported_language_is_rejected_and_keeps_current() {
        let mut t = Translator::default();
        assert!(matches!(
            t.change_language("fr"),
            Err(CoreError::UnsupportedLanguage(code)) if code == "fr"
        ));
        assert_eq!(t.language(), "pt-BR");
    }

    #[test]
    fn unknown_key_returns_key() {
        let t = Translator::default();
        assert_eq!(t.t("login.missing"), "login.missing");
    }

    #[test]
    fn from_stored_uses_supported_codes_only() {
        assert_eq!(Translator::from_stored(Some("en")).language(), "en");
        assert_eq!(Translator::from_stored(Some("xx")).language(), "pt-BR");
        assert_eq!(Translator::from_stored(None).language(), "pt-BR");
    }

    #[test]
    fn every_supported_language_has_every_key() {
        for opt in language::LANGUAGE_OPTIONS {
            for (key, ..) in CATALOG {
                assert!(lookup(opt.code, key).is_some(), "{} missing {}", opt.code, key);
            }
        }
    }
}
