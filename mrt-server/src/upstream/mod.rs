//! MRT Jakarta station feed.
//!
//! The feed is a single JSON document listing every station together with
//! its timetable, fare estimates and facilities. It is fetched fresh for
//! every query; there is no caching layer.

mod client;
mod error;
mod fixture;
mod types;

use serde::de::DeserializeOwned;

pub use client::{DEFAULT_FEED_URL, DEFAULT_TIMEOUT_SECS, MrtClient, MrtClientConfig};
pub use error::UpstreamError;
pub use fixture::FixtureClient;
pub use types::{EstimateRecord, FacilityRecord, ScheduleRecord, StationRecord};

/// Number of body characters kept in decode errors.
const ERROR_BODY_CHARS: usize = 500;

/// Where station snapshots come from.
#[derive(Debug, Clone)]
pub enum SnapshotSource {
    /// The live feed over HTTP.
    Live(MrtClient),
    /// A snapshot file on disk.
    Fixture(FixtureClient),
}

impl SnapshotSource {
    /// Fetch the raw snapshot body.
    pub async fn fetch_body(&self) -> Result<String, UpstreamError> {
        match self {
            SnapshotSource::Live(client) => client.fetch_body().await,
            SnapshotSource::Fixture(client) => client.fetch_body().await,
        }
    }

    /// Fetch the snapshot and decode it as a list of `T`.
    ///
    /// The same document decodes as [`StationRecord`]s or
    /// [`ScheduleRecord`]s depending on which view the caller needs.
    pub async fn fetch<T: DeserializeOwned>(&self) -> Result<Vec<T>, UpstreamError> {
        let body = self.fetch_body().await?;
        decode_snapshot(&body)
    }
}

impl From<MrtClient> for SnapshotSource {
    fn from(client: MrtClient) -> Self {
        SnapshotSource::Live(client)
    }
}

impl From<FixtureClient> for SnapshotSource {
    fn from(client: FixtureClient) -> Self {
        SnapshotSource::Fixture(client)
    }
}

/// Decode a snapshot body into records.
pub fn decode_snapshot<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, UpstreamError> {
    serde_json::from_str(body).map_err(|e| UpstreamError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(ERROR_BODY_CHARS).collect()),
    })
}
