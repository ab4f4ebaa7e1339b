//! Language dropdown component.

use dioxus::prelude::*;
use portico_core::{language, Translator};

use crate::state::LoginState;

/// Directory the flag images are served from.
const FLAG_DIR: &str = "flags";

/// Dropdown showing the current language and the enabled alternatives.
#[component]
pub fn LanguageSelector(
    mut state: Signal<LoginState>,
    translator: Signal<Translator>,
    on_select: EventHandler<&'static str>,
) -> Element {
    let current = language::current(translator.read().language());
    let open = state.read().language_menu_open;
    let options = state.read().language_options();

    rsx! {
        div { class: "language-selector",
            button {
                class: "language-dropdown",
                r#type: "button",
                onclick: move |_| state.write().toggle_language_menu(),
                img { class: "flag-icon", src: "{FLAG_DIR}/{current.icon}", alt: "{current.label}" }
                "{current.label}"
                span { "▾" }
            }

            if open {
                div { class: "language-options",
                    for opt in options {
                        button {
                            key: "{opt.code}",
                            class: "language-option",
                            r#type: "button",
                            onclick: move |_| {
                                state.write().language_menu_open = false;
                                on_select.call(opt.code);
                            },
                            img { class: "flag-icon", src: "{FLAG_DIR}/{opt.icon}", alt: "{opt.label}" }
                            "{opt.label}"
                        }
                    }
                }
            }
        }
    }
}
