//! Layout configuration and parameter validation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default minimum temporal gap between two bars sharing a row.
pub const DEFAULT_BUFFER_MINUTES: u32 = 5;

/// Default party-size cap used when deriving a bar's row span.
pub const DEFAULT_MAX_PARTY_SIZE: u32 = 20;

/// Configuration for one [`layout_day`](crate::layout_day) call.
///
/// Times are minutes since midnight. A typical dinner service is
/// `LayoutParams::new(1080, 1320, 120)` (18:00 to 22:00, two-hour
/// sittings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Start of the visible range, minutes since midnight (inclusive).
    pub range_start_minutes: u32,
    /// End of the visible range, minutes since midnight (exclusive).
    pub range_end_minutes: u32,
    /// Assumed sitting length for every booking.
    pub default_duration_minutes: u32,
    /// Minimum gap between two bookings sharing a row.
    pub buffer_minutes: u32,
    /// Party sizes above this are treated as this value when deriving
    /// the row span. Display values are untouched.
    pub max_party_size: u32,
}

impl LayoutParams {
    /// Create parameters with the default buffer and party-size cap.
    #[must_use]
    pub const fn new(
        range_start_minutes: u32,
        range_end_minutes: u32,
        default_duration_minutes: u32,
    ) -> Self {
        Self {
            range_start_minutes,
            range_end_minutes,
            default_duration_minutes,
            buffer_minutes: DEFAULT_BUFFER_MINUTES,
            max_party_size: DEFAULT_MAX_PARTY_SIZE,
        }
    }

    /// Set the row-sharing buffer.
    #[must_use]
    pub const fn with_buffer_minutes(mut self, minutes: u32) -> Self {
        self.buffer_minutes = minutes;
        self
    }

    /// Set the party-size cap.
    #[must_use]
    pub const fn with_max_party_size(mut self, size: u32) -> Self {
        self.max_party_size = size;
        self
    }

    /// Length of the visible range in minutes.
    #[must_use]
    pub const fn range_length(&self) -> u32 {
        self.range_end_minutes.saturating_sub(self.range_start_minutes)
    }

    /// Check the parameters, failing fast on a malformed range,
    /// duration, or party-size cap.
    pub const fn validate(&self) -> Result<(), LayoutError> {
        if self.range_start_minutes >= self.range_end_minutes {
            return Err(LayoutError::InvalidRange {
                start: self.range_start_minutes,
                end: self.range_end_minutes,
            });
        }
        if self.default_duration_minutes == 0 {
            return Err(LayoutError::InvalidDuration);
        }
        if self.max_party_size == 0 {
            return Err(LayoutError::InvalidMaxPartySize);
        }
        Ok(())
    }
}

/// Errors from malformed layout parameters.
///
/// These are the only failures the engine produces; malformed individual
/// bookings are skipped and reported, never raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Range start is not before range end.
    InvalidRange { start: u32, end: u32 },
    /// Default sitting duration is zero.
    InvalidDuration,
    /// Party-size cap is zero.
    InvalidMaxPartySize,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { start, end } => {
                write!(f, "range start {start} must be before range end {end}")
            }
            Self::InvalidDuration => write!(f, "default duration must be positive"),
            Self::InvalidMaxPartySize => write!(f, "max party size must be positive"),
        }
    }
}

impl std::error::Error for LayoutError {}
