//! Wall-clock source for schedule filtering.

use chrono::{FixedOffset, Local, Utc};

use super::TimeOfDay;

/// Where "now" comes from when deciding which departures are upcoming.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// The host's local time zone.
    #[default]
    Local,
    /// A fixed UTC offset, e.g. +07:00 for Jakarta.
    Fixed(FixedOffset),
}

impl Clock {
    /// Current time of day, truncated to whole seconds.
    pub fn now(&self) -> TimeOfDay {
        match self {
            Clock::Local => TimeOfDay::from_time(Local::now().time()),
            Clock::Fixed(offset) => TimeOfDay::from_time(Utc::now().with_timezone(offset).time()),
        }
    }
}
