//! Station directory: read-only queries over the MRT Jakarta station feed.
//!
//! Four queries are offered: the station list, upcoming departures for a
//! station, fare estimates and facilities. Each is a single pass of
//! fetch, decode, select and project.

mod convert;
mod dto;
mod error;
mod service;

pub use convert::{
    BUNDARAN_HI_TRIP, LEBAK_BULUS_TRIP, find_schedule, first_other_station, parse_departures,
    station_estimates, station_facilities, station_list, upcoming_departures,
};
pub use dto::{
    EstimateResponse, FacilityResponse, ScheduleResponse, StationEstimateResponse,
    StationFacilityResponse, StationResponse,
};
pub use error::DirectoryError;
pub use service::StationDirectory;
