//! HTTP loader for the creature API.

use std::time::Duration;

use async_trait::async_trait;
use tracing::instrument;

use whosthat_core::error::SourceError;
use whosthat_core::model::Creature;
use whosthat_core::traits::CreatureSource;

pub const DEFAULT_URL: &str = "http://localhost:8088/api/pokemon";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Fetches the creature list with a single `GET`.
pub struct HttpSource {
    url: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: &str) -> anyhow::Result<Self> {
        Self::with_timeout(url, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(url: &str, timeout_secs: u64) -> anyhow::Result<Self> {
        let url = if url.is_empty() { DEFAULT_URL } else { url };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            url: url.to_string(),
            timeout_secs,
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CreatureSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Vec<Creature>, SourceError> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::Timeout(self.timeout_secs)
            } else if e.is_connect() {
                SourceError::Network(format!(
                    "creature API not reachable at {}. Is the server running?",
                    self.url
                ))
            } else {
                SourceError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::Timeout(self.timeout_secs)
            } else {
                SourceError::Network(e.to_string())
            }
        })?;

        Ok(serde_json::from_str(&body)?)
    }
}
