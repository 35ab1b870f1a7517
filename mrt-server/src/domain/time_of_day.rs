//! Time-of-day handling for MRT departure schedules.
//!
//! The station feed lists departures as "HH:MM:SS" strings with no date.
//! Departures are compared against the current wall-clock time at whole
//! second precision, so this type deliberately carries no date and no
//! sub-second component: its ordering is identical to the lexicographic
//! ordering of the zero-padded string form.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A departure time of day, e.g. `05:30:00`.
///
/// # Examples
///
/// ```
/// use mrt_server::domain::TimeOfDay;
///
/// let time = TimeOfDay::parse_hhmmss("05:30:00").unwrap();
/// assert_eq!(time.to_string(), "05:30:00");
///
/// let later = TimeOfDay::parse_hhmmss("23:59:59").unwrap();
/// assert!(later > time);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Create a time from hour, minute and second components.
    ///
    /// Returns `None` if any component is out of range.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(Self)
    }

    /// Create a time from a chrono time, dropping any fractional seconds.
    pub fn from_time(time: NaiveTime) -> Self {
        Self(time.with_nanosecond(0).unwrap_or(time))
    }

    /// Parse a time in "HH:MM:SS" format.
    ///
    /// The hour may be written with one or two digits (`5:30:00` is
    /// accepted, as the feed occasionally drops the leading zero); minutes
    /// and seconds must be exactly two digits. A fractional-second suffix
    /// (`08:00:00.5`) is accepted and discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use mrt_server::domain::TimeOfDay;
    ///
    /// assert!(TimeOfDay::parse_hhmmss("00:00:00").is_ok());
    /// assert!(TimeOfDay::parse_hhmmss("9:05:00").is_ok());
    /// assert_eq!(TimeOfDay::parse_hhmmss("9:05:00.75").unwrap().to_string(), "09:05:00");
    ///
    /// assert!(TimeOfDay::parse_hhmmss("09:05").is_err());
    /// assert!(TimeOfDay::parse_hhmmss("24:00:00").is_err());
    /// assert!(TimeOfDay::parse_hhmmss("bad").is_err());
    /// ```
    pub fn parse_hhmmss(s: &str) -> Result<Self, TimeError> {
        let mut parts = s.split(':');
        let (Some(hour), Some(minute), Some(second), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(TimeError::new("expected HH:MM:SS format"));
        };

        let hour = parse_digits(hour, 1).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute =
            parse_digits(minute, 2).ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let second = match second.split_once('.') {
            Some((whole, fraction))
                if !fraction.is_empty() && fraction.bytes().all(|b| b.is_ascii_digit()) =>
            {
                whole
            }
            Some(_) => return Err(TimeError::new("invalid fractional seconds")),
            None => second,
        };
        let second =
            parse_digits(second, 2).ok_or_else(|| TimeError::new("invalid second digits"))?;
        if second > 59 {
            return Err(TimeError::new("second must be 0-59"));
        }

        Self::from_hms(hour, minute, second).ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the second (0-59).
    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// Returns the underlying chrono time.
    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

/// Parse one or two ASCII digits, requiring at least `min_len` of them.
fn parse_digits(s: &str, min_len: usize) -> Option<u32> {
    if s.len() < min_len || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({self})")
    }
}
