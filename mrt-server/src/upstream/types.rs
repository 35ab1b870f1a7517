//! MRT Jakarta station feed DTOs.
//!
//! The feed is a JSON array of station objects with Indonesian field names.
//! Only the fields we project are mapped; everything else in the feed is
//! ignored. The CMS behind the feed emits `null` for empty collections and
//! blank text fields, so those decode to their empty defaults.

use serde::{Deserialize, Deserializer};

/// A station with its fare estimates and facilities.
#[derive(Debug, Clone, Deserialize)]
pub struct StationRecord {
    /// Station node ID, e.g. `"30"`.
    #[serde(rename = "nid", default, deserialize_with = "null_as_default")]
    pub id: String,

    /// Display name, e.g. `"Stasiun Bundaran HI"`.
    #[serde(rename = "title", default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Fare and travel-time estimates to other stations.
    #[serde(rename = "estimasi", default, deserialize_with = "null_as_default")]
    pub estimates: Vec<EstimateRecord>,

    /// Amenities available at the station.
    #[serde(rename = "fasilitas", default, deserialize_with = "null_as_default")]
    pub facilities: Vec<FacilityRecord>,
}

/// Fare and travel time from the enclosing station to another one.
#[derive(Debug, Clone, Deserialize)]
pub struct EstimateRecord {
    /// Node ID of the destination station.
    #[serde(rename = "stasiun_nid", default, deserialize_with = "null_as_default")]
    pub station_id: String,

    /// Fare as currency-formatted text, e.g. `"Rp. 3.000"`.
    #[serde(rename = "tarif", default, deserialize_with = "null_as_default")]
    pub fare: String,

    /// Travel time text as published.
    #[serde(rename = "waktu", default, deserialize_with = "null_as_default")]
    pub time: String,
}

/// A named amenity at a station.
#[derive(Debug, Clone, Deserialize)]
pub struct FacilityRecord {
    #[serde(rename = "nid", default, deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Facility category, e.g. `"Lift"`.
    #[serde(rename = "jenis_fasilitas", default, deserialize_with = "null_as_default")]
    pub kind: String,

    /// Image URL or path.
    #[serde(rename = "cover", default, deserialize_with = "null_as_default")]
    pub image: String,
}

/// The timetable view of a station record.
///
/// Decoded from the same feed as [`StationRecord`]; each list is a
/// comma-separated sequence of "HH:MM:SS" departures.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleRecord {
    #[serde(rename = "nid", default, deserialize_with = "null_as_default")]
    pub station_id: String,

    #[serde(rename = "title", default, deserialize_with = "null_as_default")]
    pub station_name: String,

    /// Departures towards Bundaran HI on regular days.
    #[serde(rename = "jadwal_hi_biasa", default, deserialize_with = "null_as_default")]
    pub bundaran_hi: String,

    /// Departures towards Lebak Bulus on regular days.
    #[serde(rename = "jadwal_lb_biasa", default, deserialize_with = "null_as_default")]
    pub lebak_bulus: String,
}

/// Decode `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
