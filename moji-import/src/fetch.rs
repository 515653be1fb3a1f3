//! HTTP fetching of source pages

use moji_common::config::ImportConfig;
use moji_common::{Error, Result};
use std::time::Duration;
use tracing::debug;

/// Thin reqwest wrapper with the importer's user agent and timeout
#[derive(Debug, Clone)]
pub struct Fetcher {
    http_client: reqwest::Client,
}

impl Fetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Internal(format!("HTTP client setup failed: {}", e)))?;
        Ok(Self { http_client })
    }

    /// Build from the `[import]` config section
    pub fn from_config(config: &ImportConfig) -> Result<Self> {
        Self::new(
            &config.user_agent,
            Duration::from_secs(config.fetch_timeout_secs),
        )
    }

    /// Fetch a page as text
    ///
    /// Bodies that are not valid UTF-8 are decoded as Latin-1.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url = %url, "Fetching source");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("{}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!("{}: HTTP {}", url, status.as_u16())));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Fetch(format!("{}: {}", url, e)))?;

        debug!(url = %url, bytes = bytes.len(), "Fetched source");
        Ok(decode_body(&bytes))
    }
}

/// UTF-8 with a Latin-1 fallback
pub fn decode_body(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}
