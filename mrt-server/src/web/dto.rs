//! Data transfer objects for web responses.
//!
//! Query results are serialized directly from the directory's response
//! types; only the error body is specific to the web layer.

use serde::Serialize;

pub use crate::directory::{
    EstimateResponse, FacilityResponse, ScheduleResponse, StationEstimateResponse,
    StationFacilityResponse, StationResponse,
};

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
