//! Backend HTTP client.

use std::time::Duration;

use portico_core::{CompanyId, PublicSettingKey};
use tracing::debug;

use crate::error::{ClientError, Result};

/// Default backend URL.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Backend client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend API, without a trailing slash.
    pub backend_url: String,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Creates a config for the given backend URL.
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            ..Default::default()
        }
    }
}

/// Thin wrapper around `reqwest` that knows the backend routes.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    http: reqwest::Client,
}

impl BackendClient {
    /// Creates a new client.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(format!("Portico/{}", env!("CARGO_PKG_VERSION")))
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            base_url: config.backend_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Returns the backend base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the URL of a public setting.
    pub fn public_setting_url(&self, key: PublicSettingKey, company_id: Option<CompanyId>) -> String {
        let mut url = format!("{}/public-settings/{}", self.base_url, key.as_str());
        if let Some(id) = company_id {
            url.push_str(&format!("?{}={}", portico_core::settings::COMPANY_ID_PARAM, id));
        }
        url
    }

    /// Builds the login URL.
    pub fn login_url(&self) -> String {
        format!("{}/auth/login", self.base_url)
    }

    /// Fetches a public setting value.
    ///
    /// The body is normally a JSON string. `null` and an empty body become an
    /// empty value; a bare text body is taken verbatim.
    pub async fn fetch_public_setting(
        &self,
        key: PublicSettingKey,
        company_id: Option<CompanyId>,
    ) -> Result<String> {
        let url = self.public_setting_url(key, company_id);
        debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        Ok(decode_setting_body(&body))
    }

    /// Posts a JSON body and decodes a JSON response.
    pub(crate) async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: serde::Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        debug!("POST {}", url);

        let response = self.http.post(url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn decode_setting_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(s)) => s,
        Ok(serde_json::Value::Null) => String::new(),
        Ok(other) => other.to_string(),
        Err(_) => body.to_string(),
    }
}
