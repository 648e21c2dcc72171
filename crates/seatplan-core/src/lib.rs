//! Core types for the Seatplan booking timeline.
//!
//! This crate provides the foundational types shared by the layout engine
//! and its consumers:
//! - Time handling: [`TimeOfDay`] at minute resolution
//! - The input record: [`Booking`]
//! - Renderer geometry: [`Rect`]

mod booking;
mod geometry;
mod time;

pub use booking::Booking;
pub use geometry::Rect;
pub use time::{TimeOfDay, TimeParseError, MINUTES_PER_DAY};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_from_minutes_always_valid(minutes in 0u32..10_000) {
            let t = TimeOfDay::from_minutes(minutes);
            prop_assert!(t.hour() < 24);
            prop_assert!(t.minute() < 60);
            prop_assert_eq!(t.minutes_since_midnight(), minutes % MINUTES_PER_DAY);
        }

        #[test]
        fn prop_display_parse_round_trip(hour in 0u8..24, minute in 0u8..60) {
            let t = TimeOfDay::new(hour, minute).unwrap();
            prop_assert_eq!(TimeOfDay::parse(&t.to_string()), Ok(t));
        }
    }
}
