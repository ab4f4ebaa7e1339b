//! Login view.

use dioxus::prelude::*;
use portico_core::{Background, LoginField, ThemeState, Translator};
use tracing::{debug, warn};

use crate::app::LoginActions;
use crate::components::icons::{EyeIcon, EyeOffIcon, MoonIcon, SunIcon};
use crate::components::LanguageSelector;
use crate::state::{AppContext, LoginState, MOUNT_SETTINGS};

/// The login screen.
///
/// Form state and actions come from the parent, which remounts this view on
/// a language change. Settings lookups are tied to the mount.
#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let actions = use_context::<LoginActions>();
    let mut theme = use_context::<Signal<ThemeState>>();
    let translator = use_context::<Signal<Translator>>();
    let mut state = use_context::<Signal<LoginState>>();

    // Four independent lookups on mount; each applies its own result.
    use_hook({
        let ctx = ctx.clone();
        move || {
            for key in MOUNT_SETTINGS {
                let ctx = ctx.clone();
                spawn(async move {
                    let update = ctx.fetch_setting(key).await;
                    debug!("Public setting {} resolved", key);
                    update.apply(&mut state.write().settings);
                });
            }
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        actions.submit.call(state.read().submission());
    };

    let signup_url = ctx.config.signup_url();
    let open_signup = move |_| {
        if let Err(e) = open::that(&signup_url) {
            warn!("Failed to open signup page: {}", e);
        }
    };

    let t = translator.read().clone();
    let theme_now = theme.read().clone();
    let form = state.read().clone();

    let background = form.background(&theme_now);
    let page_class = match (&background, theme_now.mode.is_dark()) {
        (Background::Image(_), true) => "login-page dark",
        (Background::Image(_), false) => "login-page",
        (Background::Color(_), true) => "login-page dark no-image",
        (Background::Color(_), false) => "login-page no-image",
    };
    let page_style = background.to_css();
    let dir = if t.is_rtl() { "rtl" } else { "ltr" };
    let logo = theme_now.logo().to_string();
    let email_label = t.t("login.form.email");
    let password_label = t.t("login.form.password");
    let submit_label = t.t("login.buttons.submit");
    let register_label = t.t("login.buttons.register");
    let toggle_password_label = t.t("login.buttons.togglePassword");
    let toggle_theme_label = t.t("login.buttons.toggleTheme");
    let email_value = form.value(LoginField::Email).to_string();
    let password_value = form.value(LoginField::Password).to_string();
    let password_type = form.password_input_type();

    rsx! {
        document::Title { "{theme_now.app_name}" }
        document::Link { rel: "icon", href: "{theme_now.favicon}" }

        div { class: "{page_class}", style: "{page_style}", dir: "{dir}",
            LanguageSelector { state, translator, on_select: actions.select_language }

            main { class: "login-container",
                div { class: "login-card",
                    button {
                        class: "theme-toggle",
                        r#type: "button",
                        title: "{toggle_theme_label}",
                        onclick: move |_| theme.write().toggle(),
                        if theme_now.mode.is_dark() {
                            SunIcon { class: Some("icon".to_string()) }
                        } else {
                            MoonIcon { class: Some("icon".to_string()) }
                        }
                    }

                    img { class: "login-logo", src: "{logo}", alt: "logo" }

                    form { class: "login-form", novalidate: true, onsubmit: on_submit,
                        div { class: "field",
                            label { r#for: "email", "{email_label}" }
                            div { class: "field-input",
                                input {
                                    id: "email",
                                    name: LoginField::Email.name(),
                                    r#type: "email",
                                    required: true,
                                    autocomplete: "email",
                                    autofocus: true,
                                    value: "{email_value}",
                                    oninput: move |evt| {
                                        state.write().on_input(LoginField::Email.name(), evt.value())
                                    },
                                }
                            }
                        }

                        div { class: "field",
                            label { r#for: "password", "{password_label}" }
                            div { class: "field-input",
                                input {
                                    id: "password",
                                    name: LoginField::Password.name(),
                                    r#type: "{password_type}",
                                    required: true,
                                    autocomplete: "current-password",
                                    value: "{password_value}",
                                    oninput: move |evt| {
                                        state.write().on_input(LoginField::Password.name(), evt.value())
                                    },
                                }
                                button {
                                    class: "password-toggle",
                                    r#type: "button",
                                    "aria-label": "{toggle_password_label}",
                                    onclick: move |_| state.write().toggle_password(),
                                    if form.show_password {
                                        EyeOffIcon { class: Some("icon".to_string()) }
                                    } else {
                                        EyeIcon { class: Some("icon".to_string()) }
                                    }
                                }
                            }
                        }

                        button { class: "submit", r#type: "submit", "{submit_label}" }

                        if form.settings.allow_signup {
                            div { class: "register-row",
                                a { class: "register-link", onclick: open_signup,
                                    "{register_label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
