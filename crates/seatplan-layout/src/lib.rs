//! Timeline grid packing for the Seatplan booking board.
//!
//! Packs one day's time-boxed restaurant bookings into non-overlapping
//! visual rows, first-fit greedy:
//!
//! - [`layout_day`] takes the bookings and [`LayoutParams`] and returns
//!   a [`DayLayout`] of per-booking row assignments in input order.
//! - [`BarMetrics`] turns a [`Placement`] into the pixel rectangle a
//!   renderer draws.
//!
//! Each call is a pure computation over its inputs; nothing persists
//! between calls.

mod bars;
mod engine;
mod params;

pub use bars::BarMetrics;
pub use engine::{layout_day, row_span_for_party, DayLayout, Placement, SkipReason, Skipped};
pub use params::{
    LayoutError, LayoutParams, DEFAULT_BUFFER_MINUTES, DEFAULT_MAX_PARTY_SIZE,
};
