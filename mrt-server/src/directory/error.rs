//! Station directory error types.

use crate::upstream::UpstreamError;

/// Errors returned by station directory queries.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// Fetching or decoding the station feed failed
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// A departure list entry is not a valid "HH:MM:SS" time
    #[error("invalid time format: {0}")]
    InvalidTimeFormat(String),

    /// No station satisfies the lookup
    #[error("station not found: {0}")]
    StationNotFound(String),
}
