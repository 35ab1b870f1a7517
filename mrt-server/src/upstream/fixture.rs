//! Fixture client for running without access to the live feed.
//!
//! Serves a station snapshot saved to disk as if it were the live feed.
//! The file is re-read on every fetch so edits show up immediately.

use std::path::{Path, PathBuf};

use super::error::UpstreamError;

/// Feed client that reads a JSON snapshot from a file.
#[derive(Debug, Clone)]
pub struct FixtureClient {
    path: PathBuf,
}

impl FixtureClient {
    /// Create a fixture client for the given snapshot file.
    ///
    /// Fails if the file does not exist, so misconfiguration shows up at
    /// startup rather than on the first request.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, UpstreamError> {
        let path = path.into();
        if !path.is_file() {
            return Err(UpstreamError::Fixture {
                message: format!("{} is not a file", path.display()),
            });
        }
        Ok(Self { path })
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the raw snapshot body.
    pub async fn fetch_body(&self) -> Result<String, UpstreamError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| UpstreamError::Fixture {
                message: format!("failed to read {}: {}", self.path.display(), e),
            })
    }
}
