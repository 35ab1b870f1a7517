//! MRT Jakarta station feed HTTP client.

use std::time::Duration;

use tracing::debug;

use super::error::UpstreamError;

/// Default URL of the station feed.
pub const DEFAULT_FEED_URL: &str = "https://www.jakartamrt.co.id/id/val/stasiuns";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the feed client.
#[derive(Debug, Clone)]
pub struct MrtClientConfig {
    /// Full URL of the station feed
    pub feed_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MrtClientConfig {
    /// Create a config pointing at the production feed.
    pub fn new() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom feed URL (for testing or a mirror).
    pub fn with_feed_url(mut self, url: impl Into<String>) -> Self {
        self.feed_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for MrtClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the station feed.
///
/// Holds one `reqwest::Client` (itself a cheap handle onto a shared
/// connection pool), so clones can be used from concurrent requests.
#[derive(Debug, Clone)]
pub struct MrtClient {
    http: reqwest::Client,
    feed_url: String,
}

impl MrtClient {
    /// Create a new feed client.
    pub fn new(config: MrtClientConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            feed_url: config.feed_url,
        })
    }

    /// The URL this client fetches from.
    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    /// Fetch the raw feed body.
    ///
    /// Every call issues a fresh request; nothing is cached.
    pub async fn fetch_body(&self) -> Result<String, UpstreamError> {
        debug!(url = %self.feed_url, "fetching station feed");

        let response = self.http.get(&self.feed_url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "station feed received");
        Ok(body)
    }
}
