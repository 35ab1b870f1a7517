//! Domain types for the station directory.
//!
//! Departure times are date-less values compared at whole-second
//! precision against a configurable wall clock.

mod clock;
mod time_of_day;

pub use clock::Clock;
pub use time_of_day::{TimeError, TimeOfDay};
