//! Wall-clock time handling for timetables.
//!
//! Timetables provide times as "HH:MM" strings, interpreted on the current
//! day. The board never wraps to the next day, so a bare time of day at
//! minute precision is enough.

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

/// A scheduled wall-clock time of day, at minute precision.
///
/// # Examples
///
/// ```
/// use board_server::domain::BoardTime;
///
/// let time = BoardTime::parse_hhmm("14:30").unwrap();
/// assert_eq!(time.to_string(), "14:30");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardTime {
    time: NaiveTime,
}

impl BoardTime {
    /// Create a BoardTime from hour and minute components.
    ///
    /// Returns `None` when either component is out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(|time| Self { time })
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use board_server::domain::BoardTime;
    ///
    /// // Valid times
    /// assert!(BoardTime::parse_hhmm("00:00").is_ok());
    /// assert!(BoardTime::parse_hhmm("23:59").is_ok());
    /// assert!(BoardTime::parse_hhmm("14:30").is_ok());
    ///
    /// // Invalid formats
    /// assert!(BoardTime::parse_hhmm("1430").is_err());
    /// assert!(BoardTime::parse_hhmm("14:3").is_err());
    /// assert!(BoardTime::parse_hhmm("25:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self { time })
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    /// Returns the underlying time of day, with seconds at zero.
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Whether this time has not yet passed at `now`.
    ///
    /// Scheduled times carry no seconds, so a departure at 08:05 is still
    /// upcoming at 08:05:00 exactly and has passed at 08:05:01.
    pub fn is_upcoming_at(&self, now: NaiveTime) -> bool {
        self.time >= now
    }
}

impl fmt::Debug for BoardTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for BoardTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
