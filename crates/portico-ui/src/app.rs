//! Root component.

use dioxus::prelude::*;
use portico_core::Credentials;
use tracing::{debug, warn};

use crate::state::{AppContext, LoginState};
use crate::views::LoginView;

/// Actions the login view delegates upward. They outlive any one mount of
/// the view.
#[derive(Clone, Copy)]
pub struct LoginActions {
    /// Hands credentials to the auth collaborator without awaiting it.
    pub submit: Callback<Credentials>,
    /// Persists a language and reloads the screen.
    pub select_language: Callback<&'static str>,
}

/// Provides the theme, translator and form signals and hosts the login view.
///
/// A reload bumps `generation`, which changes the view's key and forces a
/// fresh mount. The form is reset, the translator is rebuilt from storage and
/// the theme from launch config.
#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let mut theme = use_context_provider(|| Signal::new(ctx.config.theme.clone()));
    let mut translator = use_context_provider(|| Signal::new(ctx.stored_translator()));
    let mut form = use_context_provider(|| Signal::new(LoginState::default()));
    let mut generation = use_signal(|| 0u64);

    let submit = use_callback({
        let ctx = ctx.clone();
        move |credentials: Credentials| {
            let auth = ctx.auth.clone();
            // Not tied to the view: a reload must not cancel a login.
            spawn_forever(async move {
                auth.handle_login(credentials).await;
            });
        }
    });

    let select_language = use_callback(move |code: &'static str| {
        if let Err(e) = ctx.select_language(&mut translator.write(), code) {
            warn!("Language change failed: {}", e);
            return;
        }

        translator.set(ctx.stored_translator());
        theme.set(ctx.config.theme.clone());
        form.set(LoginState::default());
        generation += 1;
        debug!("Login view reloaded (generation {})", *generation.peek());
    });

    use_context_provider(|| LoginActions {
        submit,
        select_language,
    });

    rsx! {
        for current in std::iter::once(generation()) {
            LoginView { key: "{current}" }
        }
    }
}
