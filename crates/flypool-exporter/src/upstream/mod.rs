//! Pool API client.
//!
//! One plain GET per account. No timeout override, no retry; redirects follow
//! the reqwest default policy.

use reqwest::StatusCode;

use flypool_core::error::{ExporterError, Result};

/// Build the `currentStats` URL by plain concatenation (no escaping).
pub fn stats_url(api_url: &str, account_id: &str) -> String {
    format!("{api_url}/miner/{account_id}/currentStats")
}

#[derive(Debug, Clone, Default)]
pub struct UpstreamClient {
    http: reqwest::Client,
}

impl UpstreamClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the raw `currentStats` body for one account.
    pub async fn fetch(&self, api_url: &str, account_id: &str) -> Result<String> {
        let url = stats_url(api_url, account_id);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ExporterError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ExporterError::UpstreamStatus(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| ExporterError::UpstreamBody(e.to_string()))
    }
}
