//! Color mode, branding, and background resolution.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Default application name shown as the window title.
pub const DEFAULT_APP_NAME: &str = "Multi100";

/// Default favicon reference.
pub const DEFAULT_FAVICON: &str = "/default-favicon.ico";

/// Light/dark presentation theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(CoreError::UnknownColorMode(other.to_string())),
        }
    }
}

/// Fallback background colors per mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub light: String,
    pub dark: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            light: "#f5f5f5".to_string(),
            dark: "#303030".to_string(),
        }
    }
}

/// What fills the screen behind the login card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    /// A remote image URL, drawn with a transparent background color.
    Image(String),
    /// A plain CSS color.
    Color(String),
}

impl Background {
    /// Picks the image for `mode` if one is configured, else the palette color.
    pub fn resolve(
        mode: ColorMode,
        light_image: Option<&str>,
        dark_image: Option<&str>,
        palette: &Palette,
    ) -> Self {
        let (image, color) = match mode {
            ColorMode::Light => (light_image, &palette.light),
            ColorMode::Dark => (dark_image, &palette.dark),
        };

        match image.filter(|url| !url.is_empty()) {
            Some(url) => Self::Image(url.to_string()),
            None => Self::Color(color.clone()),
        }
    }

    /// Renders inline CSS for the page root.
    pub fn to_css(&self) -> String {
        match self {
            Self::Image(url) => format!(
                "background-color: transparent; background-image: url({}); \
                 background-repeat: no-repeat; background-size: cover; \
                 background-position: center;",
                url
            ),
            Self::Color(color) => {
                format!("background-color: {}; background-image: none;", color)
            }
        }
    }
}

/// Theme collaborator state: mode plus branding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    pub mode: ColorMode,
    pub app_name: String,
    pub favicon: String,
    pub logo_light: String,
    pub logo_dark: String,
    pub palette: Palette,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            mode: ColorMode::Light,
            app_name: DEFAULT_APP_NAME.to_string(),
            favicon: DEFAULT_FAVICON.to_string(),
            logo_light: "logo.png".to_string(),
            logo_dark: "logo-dark.png".to_string(),
            palette: Palette::default(),
        }
    }
}

impl ThemeState {
    /// Flips between light and dark.
    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Returns the logo for the current mode.
    pub fn logo(&self) -> &str {
        match self.mode {
            ColorMode::Light => &self.logo_light,
            ColorMode::Dark => &self.logo_dark,
        }
    }

    /// Resolves the background for the current mode.
    pub fn background(&self, light_image: Option<&str>, dark_image: Option<&str>) -> Background {
        Background::resolve(self.mode, light_image, dark_image, &self.palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_mode() {
        let mut theme = ThemeState::default();
        assert_eq!(theme.mode, ColorMode::Light);
        theme.toggle();
        assert!(theme.mode.is_dark());
        theme.toggle();
        assert_eq!(theme.mode, ColorMode::Light);
    }

    #[test]
    fn logo_follows_mode() {
        let mut theme = ThemeState::default();
        assert_eq!(theme.logo(), "logo.png");
        theme.toggle();
        assert_eq!(theme.logo(), "logo-dark.png");
    }

    #[test]
    fn image_wins_when_present_for_mode() {
        let palette = Palette::default();
        assert_eq!(
            Background::resolve(ColorMode::Light, Some("l.png"), Some("d.png"), &palette),
            Background::Image("l.png".into())
        );
        assert_eq!(
            Background::resolve(ColorMode::Dark, Some("l.png"), Some("d.png"), &palette),
            Background::Image("d.png".into())
        );
    }

    #[test]
    fn palette_color_when_mode_has_no_image() {
        let palette = Palette::default();
        assert_eq!(
            Background::resolve(ColorMode::Light, None, Some("d.png"), &palette),
            Background::Color("#f5f5f5".into())
        );
        assert_eq!(
            Background::resolve(ColorMode::Dark, Some("l.png"), Some(""), &palette),
            Background::Color("#303030".into())
        );
    }

    #[test]
    fn css_for_image_and_color() {
        let image = Background::Image("http://x/public/a.png".into()).to_css();
        assert!(image.contains("url(http://x/public/a.png)"));
        assert!(image.contains("background-color: transparent"));

        let color = Background::Color("#303030".into()).to_css();
        assert!(color.contains("background-color: #303030"));
        assert!(color.contains("background-image: none"));
    }

    #[test]
    fn color_mode_parses() {
        assert_eq!("dark".parse::<ColorMode>().unwrap(), ColorMode::Dark);
        assert!("sepia".parse::<ColorMode>().is_err());
    }
}
