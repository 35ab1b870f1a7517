//! Projection of feed records into response shapes.
//!
//! Everything here is pure: callers pass in a decoded snapshot (and, for
//! schedules, the current time) and get response values back.

use std::collections::HashMap;

use crate::domain::TimeOfDay;
use crate::upstream::{ScheduleRecord, StationRecord};

use super::dto::{
    EstimateResponse, FacilityResponse, ScheduleResponse, StationEstimateResponse,
    StationFacilityResponse, StationResponse,
};
use super::error::DirectoryError;

/// Label for departures heading to Lebak Bulus.
pub const LEBAK_BULUS_TRIP: &str = "Stasiun Lebak Bulus Grab";

/// Label for departures heading to Bundaran HI.
pub const BUNDARAN_HI_TRIP: &str = "Stasiun Bundaran HI Grab";

/// Project every station to its ID and name, in feed order.
pub fn station_list(stations: &[StationRecord]) -> Vec<StationResponse> {
    stations
        .iter()
        .map(|s| StationResponse {
            id: s.id.clone(),
            name: s.name.clone(),
        })
        .collect()
}

/// Find the schedule for a station ID.
///
/// The first exact match wins. A record with an empty ID never matches.
pub fn find_schedule<'a>(
    schedules: &'a [ScheduleRecord],
    id: &str,
) -> Result<&'a ScheduleRecord, DirectoryError> {
    schedules
        .iter()
        .find(|s| !s.station_id.is_empty() && s.station_id == id)
        .ok_or_else(|| DirectoryError::StationNotFound(id.to_string()))
}

/// Parse a comma-separated departure list.
///
/// Entries are trimmed; empty entries are skipped. The first entry that is
/// not a valid time fails the whole list.
pub fn parse_departures(list: &str) -> Result<Vec<TimeOfDay>, DirectoryError> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            TimeOfDay::parse_hhmmss(entry)
                .map_err(|_| DirectoryError::InvalidTimeFormat(entry.to_string()))
        })
        .collect()
}

/// Departures strictly after `now`, Lebak Bulus direction first.
///
/// Both lists are parsed before anything is filtered, so a malformed entry
/// fails the call even if it would have been in the past.
pub fn upcoming_departures(
    schedule: &ScheduleRecord,
    now: TimeOfDay,
) -> Result<Vec<ScheduleResponse>, DirectoryError> {
    let lebak_bulus = parse_departures(&schedule.lebak_bulus)?;
    let bundaran_hi = parse_departures(&schedule.bundaran_hi)?;

    let tagged = lebak_bulus
        .into_iter()
        .map(|t| (LEBAK_BULUS_TRIP, t))
        .chain(bundaran_hi.into_iter().map(|t| (BUNDARAN_HI_TRIP, t)));

    Ok(tagged
        .filter(|(_, t)| *t > now)
        .map(|(label, t)| ScheduleResponse {
            station_name: label.to_string(),
            time: t.to_string(),
        })
        .collect())
}

/// The first station whose ID differs from `id`.
///
/// Estimate and facility lookups have always returned the station after
/// the requested one (or the first station, when another ID is given).
/// Clients depend on this, so it is kept as-is.
pub fn first_other_station<'a>(
    stations: &'a [StationRecord],
    id: &str,
) -> Result<&'a StationRecord, DirectoryError> {
    stations
        .iter()
        .find(|s| s.id != id)
        .ok_or_else(|| DirectoryError::StationNotFound(id.to_string()))
}

/// Fare estimates for the lookup described in [`first_other_station`].
///
/// Destination names are resolved against the whole snapshot; unknown
/// destination IDs resolve to an empty name.
pub fn station_estimates(
    stations: &[StationRecord],
    id: &str,
) -> Result<StationEstimateResponse, DirectoryError> {
    let station = first_other_station(stations, id)?;

    let names: HashMap<&str, &str> = stations
        .iter()
        .map(|s| (s.id.as_str(), s.name.as_str()))
        .collect();

    let estimates = station
        .estimates
        .iter()
        .map(|e| EstimateResponse {
            station_name: names
                .get(e.station_id.as_str())
                .copied()
                .unwrap_or_default()
                .to_string(),
            fare: e.fare.clone(),
            time: e.time.clone(),
        })
        .collect();

    Ok(StationEstimateResponse {
        station_name: station.name.clone(),
        estimates,
    })
}

/// Facilities for the lookup described in [`first_other_station`].
pub fn station_facilities(
    stations: &[StationRecord],
    id: &str,
) -> Result<StationFacilityResponse, DirectoryError> {
    let station = first_other_station(stations, id)?;

    let facilities = station
        .facilities
        .iter()
        .map(|f| FacilityResponse {
            title: f.title.clone(),
            kind: f.kind.clone(),
            image: f.image.clone(),
        })
        .collect();

    Ok(StationFacilityResponse {
        station_name: station.name.clone(),
        facilities,
    })
}
