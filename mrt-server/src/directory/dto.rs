//! Response shapes returned by directory queries.
//!
//! Field names on the wire match the JSON consumed by existing clients,
//! including the capitalised `Facilities` key.

use serde::Serialize;

/// A station in the station list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationResponse {
    pub id: String,
    pub name: String,
}

/// An upcoming departure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleResponse {
    /// Direction label, e.g. "Stasiun Lebak Bulus Grab"
    #[serde(rename = "station")]
    pub station_name: String,

    /// Departure time, "HH:MM:SS"
    pub time: String,
}

/// Fare estimates from one station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationEstimateResponse {
    #[serde(rename = "station")]
    pub station_name: String,

    pub estimates: Vec<EstimateResponse>,
}

/// Fare and travel time to a destination station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EstimateResponse {
    /// Destination station name (empty if the feed references an unknown ID)
    #[serde(rename = "station")]
    pub station_name: String,

    pub fare: String,

    pub time: String,
}

/// Facilities at one station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationFacilityResponse {
    #[serde(rename = "station")]
    pub station_name: String,

    #[serde(rename = "Facilities")]
    pub facilities: Vec<FacilityResponse>,
}

/// A single facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacilityResponse {
    pub title: String,

    #[serde(rename = "jenis_fasilitas")]
    pub kind: String,

    #[serde(rename = "cover")]
    pub image: String,
}
