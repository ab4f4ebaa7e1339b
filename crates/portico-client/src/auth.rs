//! Authentication collaborator backed by the HTTP client.
//!
//! `handle_login` posts the credentials and, on success, keeps the returned
//! session in memory. Failures are logged and remembered as the last error;
//! the login form never sees them.

use async_trait::async_trait;
use parking_lot::RwLock;
use portico_core::{Authenticator, Credentials};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::client::BackendClient;
use crate::error::Result;

/// User summary returned by the backend on login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company_id: Option<i64>,
}

/// An established session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

/// Auth collaborator owning session state.
#[derive(Debug)]
pub struct SessionAuthenticator {
    client: BackendClient,
    session: RwLock<Option<Session>>,
    last_error: RwLock<Option<String>>,
}

impl SessionAuthenticator {
    /// Creates an authenticator with no session.
    pub fn new(client: BackendClient) -> Self {
        Self {
            client,
            session: RwLock::new(None),
            last_error: RwLock::new(None),
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<Session> {
        let url = self.client.login_url();
        self.client.post_json(&url, credentials).await
    }
}

#[async_trait]
impl Authenticator for SessionAuthenticator {
    async fn handle_login(&self, credentials: Credentials) {
        match self.login(&credentials).await {
            Ok(session) => {
                info!("Logged in as user {}", session.user.id);
                *self.session.write() = Some(session);
                *self.last_error.write() = None;
            }
            Err(e) => {
                warn!("Login failed for {}: {}", credentials.email, e);
                *self.session.write() = None;
                *self.last_error.write() = Some(e.to_string());
            }
        }
    }
}
