//! Wall-clock time of day at minute resolution.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minutes in a full day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock time of day (hour and minute, no date, no timezone).
///
/// Booking feeds deliver times as `"HH:MM"` strings; [`TimeOfDay::parse`]
/// accepts that format. Construction is validated, so a held value is
/// always a real time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Midnight (00:00).
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Create a time of day.
    ///
    /// Returns an error if `hour >= 24` or `minute >= 60`.
    pub const fn new(hour: u8, minute: u8) -> Result<Self, TimeParseError> {
        if hour >= 24 {
            return Err(TimeParseError::HourOutOfRange(hour));
        }
        if minute >= 60 {
            return Err(TimeParseError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    /// Create a time from minutes since midnight, wrapping past 24:00.
    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Self {
        let m = minutes % MINUTES_PER_DAY;
        Self {
            hour: (m / 60) as u8,
            minute: (m % 60) as u8,
        }
    }

    /// Parse an `"HH:MM"` string (leading zeros optional).
    pub fn parse(text: &str) -> Result<Self, TimeParseError> {
        let (hour, minute) = text
            .split_once(':')
            .ok_or(TimeParseError::MissingSeparator)?;
        let hour: u8 = hour.trim().parse().map_err(|_| TimeParseError::BadNumber)?;
        let minute: u8 = minute
            .trim()
            .parse()
            .map_err(|_| TimeParseError::BadNumber)?;
        Self::new(hour, minute)
    }

    /// Hour component (0-23).
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute component (0-59).
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight.
    #[must_use]
    pub const fn minutes_since_midnight(&self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Errors from time-of-day construction and parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeParseError {
    /// Input did not contain a `:` separator.
    MissingSeparator,
    /// Hour or minute was not a number.
    BadNumber,
    /// Hour component was 24 or greater.
    HourOutOfRange(u8),
    /// Minute component was 60 or greater.
    MinuteOutOfRange(u8),
}

impl fmt::Display for TimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator => write!(f, "expected HH:MM"),
            Self::BadNumber => write!(f, "hour and minute must be numbers"),
            Self::HourOutOfRange(h) => write!(f, "hour {h} out of range (0-23)"),
            Self::MinuteOutOfRange(m) => write!(f, "minute {m} out of range (0-59)"),
        }
    }
}

impl std::error::Error for TimeParseError {}
