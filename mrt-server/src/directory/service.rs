//! The station directory service.

use tracing::{debug, info};

use crate::domain::{Clock, TimeOfDay};
use crate::upstream::{ScheduleRecord, SnapshotSource, StationRecord};

use super::convert;
use super::dto::{
    ScheduleResponse, StationEstimateResponse, StationFacilityResponse, StationResponse,
};
use super::error::DirectoryError;

/// Read-only queries over the station feed.
///
/// Each query fetches a fresh snapshot, so results always reflect the
/// feed at the time of the call. The service holds no mutable state and
/// can be shared across concurrent requests behind an `Arc`.
#[derive(Debug, Clone)]
pub struct StationDirectory {
    source: SnapshotSource,
    clock: Clock,
}

impl StationDirectory {
    /// Create a directory backed by the given snapshot source.
    pub fn new(source: impl Into<SnapshotSource>) -> Self {
        Self {
            source: source.into(),
            clock: Clock::default(),
        }
    }

    /// Use a different clock for schedule filtering.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// The clock used for schedule filtering.
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// List every station, in feed order.
    pub async fn list_stations(&self) -> Result<Vec<StationResponse>, DirectoryError> {
        let stations: Vec<StationRecord> = self.source.fetch().await?;
        debug!(count = stations.len(), "listing stations");
        Ok(convert::station_list(&stations))
    }

    /// Upcoming departures from a station, relative to the directory clock.
    pub async fn schedule_for_station(
        &self,
        id: &str,
    ) -> Result<Vec<ScheduleResponse>, DirectoryError> {
        self.schedule_for_station_at(id, self.clock.now()).await
    }

    /// Departures from a station strictly after `now`.
    pub async fn schedule_for_station_at(
        &self,
        id: &str,
        now: TimeOfDay,
    ) -> Result<Vec<ScheduleResponse>, DirectoryError> {
        let schedules: Vec<ScheduleRecord> = self.source.fetch().await?;
        let schedule = convert::find_schedule(&schedules, id)?;
        let departures = convert::upcoming_departures(schedule, now)?;
        info!(
            station = %schedule.station_name,
            %now,
            upcoming = departures.len(),
            "schedule lookup"
        );
        Ok(departures)
    }

    /// Fare estimates; see `first_other_station` for which station is
    /// selected.
    ///
    /// Clients read the result as a list, so the single station is
    /// returned as a one-element `Vec`.
    pub async fn estimates_for_station(
        &self,
        id: &str,
    ) -> Result<Vec<StationEstimateResponse>, DirectoryError> {
        let stations: Vec<StationRecord> = self.source.fetch().await?;
        Ok(vec![convert::station_estimates(&stations, id)?])
    }

    /// Facilities; selected and wrapped the same way as estimates.
    pub async fn facilities_for_station(
        &self,
        id: &str,
    ) -> Result<Vec<StationFacilityResponse>, DirectoryError> {
        let stations: Vec<StationRecord> = self.source.fetch().await?;
        Ok(vec![convert::station_facilities(&stations, id)?])
    }
}
