//! Fake collaborators for UI tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use portico_core::settings::PublicSettingKey;
use portico_core::{Authenticator, CompanyId, CoreError, Credentials, SettingsProvider};
use portico_storage::Database;
use tokio::sync::Notify;

use crate::config::LoginConfig;
use crate::state::AppContext;

/// Settings backed by a fixed map; missing keys fail as if offline.
#[derive(Default)]
pub(crate) struct FakeSettings {
    pub values: HashMap<&'static str, &'static str>,
}

#[async_trait]
impl SettingsProvider for FakeSettings {
    async fn get_public_setting(
        &self,
        key: PublicSettingKey,
        _company_id: Option<CompanyId>,
    ) -> portico_core::Result<String> {
        self.values
            .get(key.as_str())
            .map(|v| v.to_string())
            .ok_or_else(|| CoreError::SettingUnavailable {
                key: key.to_string(),
                reason: "offline".into(),
            })
    }
}

/// Records every login. A gated instance holds each login until released.
#[derive(Default)]
pub(crate) struct FakeAuth {
    pub seen: Mutex<Vec<Credentials>>,
    gate: Option<Notify>,
}

impl FakeAuth {
    pub fn gated() -> Self {
        Self {
            seen: Mutex::default(),
            gate: Some(Notify::new()),
        }
    }

    /// Lets one pending (or the next) login finish.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }
}

#[async_trait]
impl Authenticator for FakeAuth {
    async fn handle_login(&self, credentials: Credentials) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.seen.lock().unwrap().push(credentials);
    }
}

/// Context over fake collaborators and an in-memory database.
pub(crate) fn context(values: &[(&'static str, &'static str)]) -> AppContext {
    AppContext {
        settings: Arc::new(FakeSettings {
            values: values.iter().copied().collect(),
        }),
        auth: Arc::new(FakeAuth::default()),
        db: Database::in_memory().unwrap(),
        config: LoginConfig {
            backend_url: "http://api.test".into(),
            ..Default::default()
        },
    }
}
