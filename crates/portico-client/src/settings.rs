//! Public settings collaborator backed by the HTTP client.

use async_trait::async_trait;
use portico_core::{CompanyId, CoreError, PublicSettingKey, SettingsProvider};

use crate::client::BackendClient;

#[async_trait]
impl SettingsProvider for BackendClient {
    async fn get_public_setting(
        &self,
        key: PublicSettingKey,
        company_id: Option<CompanyId>,
    ) -> portico_core::Result<String> {
        self.fetch_public_setting(key, company_id)
            .await
            .map_err(|e| CoreError::SettingUnavailable {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }
}
