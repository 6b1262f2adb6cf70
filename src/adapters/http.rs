use crate::domain::ports::{ConfigProvider, Transport};
use crate::utils::error::{BadgerError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const BADGER_ID_HEADER: &str = "X-CS571-ID";

/// 以 reqwest 實作的 Transport，每個請求都帶上 X-CS571-ID
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    api_base: String,
    badger_id: String,
    timeout: Option<Duration>,
}

impl HttpTransport {
    pub fn new(api_base: impl Into<String>, badger_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.into(),
            badger_id: badger_id.into(),
            timeout: None,
        }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        let mut transport = Self::new(config.api_base(), config.badger_id());
        transport.timeout = config.timeout_seconds().map(Duration::from_secs);
        transport
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, endpoint: &str) -> Result<serde_json::Value> {
        let url = self.url_for(endpoint);

        let mut request = self
            .client
            .get(&url)
            .header(BADGER_ID_HEADER, &self.badger_id);

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("Making API request to: {}", url);
        let response = request.send().await?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(BadgerError::Status {
                endpoint: endpoint.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| BadgerError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}
