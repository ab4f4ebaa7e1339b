//! Reusable UI components.

pub mod icons;
pub mod language_selector;

pub use language_selector::LanguageSelector;
