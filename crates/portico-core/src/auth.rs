//! Authentication collaborator seam.
//!
//! The login screen hands credentials over and moves on. Whatever happens
//! next (session establishment, error presentation, navigation) belongs to
//! the implementor.

use async_trait::async_trait;

use crate::credentials::Credentials;

/// Performs the authentication handshake for submitted credentials.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Handles a login attempt.
    ///
    /// Implementations own failure handling; nothing is returned to the form.
    async fn handle_login(&self, credentials: Credentials);
}
