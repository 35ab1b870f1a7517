//! Server configuration, read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::FixedOffset;

use crate::domain::Clock;
use crate::upstream::{
    DEFAULT_FEED_URL, DEFAULT_TIMEOUT_SECS, FixtureClient, MrtClient, MrtClientConfig,
    SnapshotSource, UpstreamError,
};

/// Default listen address.
const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

/// Error reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}: {reason}")]
pub struct ConfigError {
    var: &'static str,
    reason: String,
}

/// Configuration for the server process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Station feed URL (`MRT_UPSTREAM_URL`)
    pub feed_url: String,
    /// Feed request timeout in seconds (`MRT_TIMEOUT_SECS`)
    pub timeout_secs: u64,
    /// Listen address (`MRT_BIND_ADDR`)
    pub bind_addr: SocketAddr,
    /// Serve this snapshot file instead of the live feed (`MRT_FIXTURE`)
    pub fixture: Option<PathBuf>,
    /// Fixed UTC offset for schedule filtering (`MRT_UTC_OFFSET_HOURS`);
    /// host local time when unset
    pub utc_offset: Option<FixedOffset>,
}

impl ServerConfig {
    /// Default configuration: live feed, local clock, localhost:3000.
    pub fn new() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            bind_addr: SocketAddr::from(DEFAULT_BIND_ADDR),
            fixture: None,
            utc_offset: None,
        }
    }

    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration using `lookup` to resolve variable names.
    ///
    /// Unset and empty variables fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::new();

        if let Some(url) = get("MRT_UPSTREAM_URL") {
            config.feed_url = url;
        }

        if let Some(secs) = get("MRT_TIMEOUT_SECS") {
            config.timeout_secs = match secs.trim().parse::<u64>() {
                Ok(0) | Err(_) => {
                    return Err(ConfigError {
                        var: "MRT_TIMEOUT_SECS",
                        reason: format!("expected a positive number of seconds, got {secs:?}"),
                    });
                }
                Ok(n) => n,
            };
        }

        if let Some(addr) = get("MRT_BIND_ADDR") {
            config.bind_addr = addr.trim().parse().map_err(|e| ConfigError {
                var: "MRT_BIND_ADDR",
                reason: format!("{addr:?}: {e}"),
            })?;
        }

        config.fixture = get("MRT_FIXTURE").map(PathBuf::from);

        if let Some(hours) = get("MRT_UTC_OFFSET_HOURS") {
            let offset = hours
                .trim()
                .parse::<i32>()
                .ok()
                .and_then(|h| FixedOffset::east_opt(h.checked_mul(3600)?))
                .ok_or_else(|| ConfigError {
                    var: "MRT_UTC_OFFSET_HOURS",
                    reason: format!("expected whole hours between -23 and 23, got {hours:?}"),
                })?;
            config.utc_offset = Some(offset);
        }

        Ok(config)
    }

    /// Set a fixture file to serve instead of the live feed.
    pub fn with_fixture(mut self, path: impl Into<PathBuf>) -> Self {
        self.fixture = Some(path.into());
        self
    }

    /// Set a fixed UTC offset for schedule filtering.
    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = Some(offset);
        self
    }

    /// Feed client configuration.
    pub fn client_config(&self) -> MrtClientConfig {
        MrtClientConfig::new()
            .with_feed_url(&self.feed_url)
            .with_timeout(self.timeout_secs)
    }

    /// Clock used for schedule filtering.
    pub fn clock(&self) -> Clock {
        self.utc_offset.map_or(Clock::Local, Clock::Fixed)
    }

    /// Build the snapshot source: the fixture file if configured, else the
    /// live feed.
    pub fn snapshot_source(&self) -> Result<SnapshotSource, UpstreamError> {
        match &self.fixture {
            Some(path) => Ok(FixtureClient::new(path)?.into()),
            None => Ok(MrtClient::new(self.client_config())?.into()),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new()
    }
}
