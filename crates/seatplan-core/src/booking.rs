//! The booking record placed on a day's timeline.

use crate::time::TimeOfDay;
use serde::{Deserialize, Serialize};

/// One time-boxed restaurant booking.
///
/// Only `start` and `party_size` matter to the layout engine; `name`,
/// `room`, and `resident` are display payload carried through untouched
/// for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Scheduled arrival time.
    pub start: TimeOfDay,
    /// Number of covers. Drives the bar's vertical size.
    pub party_size: u32,
    /// Guest name shown on the bar.
    pub name: String,
    /// Hotel room the booking is matched to, if any.
    #[serde(default)]
    pub room: Option<String>,
    /// Whether the guest is staying at the hotel.
    #[serde(default)]
    pub resident: bool,
}

impl Booking {
    /// Create a booking with no room match and `resident = false`.
    #[must_use]
    pub fn new(start: TimeOfDay, party_size: u32, name: impl Into<String>) -> Self {
        Self {
            start,
            party_size,
            name: name.into(),
            room: None,
            resident: false,
        }
    }

    /// Attach a matched hotel room.
    #[must_use]
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Mark the guest as a hotel resident.
    #[must_use]
    pub fn with_resident(mut self, resident: bool) -> Self {
        self.resident = resident;
        self
    }
}
