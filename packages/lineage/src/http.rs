//! HTTP-based page source.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{LineageError, Result};
use crate::traits::PageSource;

/// Page source that fetches over plain HTTP.
pub struct HttpPageSource {
    client: reqwest::Client,
    user_agent: String,
    delay_ms: u64,
}

impl Default for HttpPageSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpPageSource {
    /// Create a new HTTP page source with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            user_agent: "ModelsWatcher/0.1".to_string(),
            delay_ms: 100,
        }
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Set the politeness delay applied after each fetch (milliseconds).
    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        debug!(url = %url, "HTTP fetch starting");
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "HTTP request failed");
                LineageError::Fetch(Box::new(e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LineageError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| LineageError::Fetch(Box::new(e)))?;

        if self.delay_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.delay_ms)).await;
        }

        Ok(body)
    }

    fn name(&self) -> &str {
        "http"
    }
}
