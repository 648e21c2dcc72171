//! First-fit greedy packing of bookings into timeline rows.
//!
//! Each booking becomes a time interval `[start, end)` in minutes from
//! the range start and a vertical span of grid rows derived from its
//! party size. Bookings whose buffered intervals overlap must not share
//! a row, so overlapping bookings stack downward into new rows.
//!
//! Packing is first-fit greedy: the first candidate starting row whose
//! spanned rows are all free wins. The row count is therefore not the
//! theoretical minimum, and downstream rendering depends on the
//! first-fit stacking order, so the strategy must not be swapped for an
//! optimal interval coloring.

use crate::params::{LayoutError, LayoutParams};
use seatplan_core::Booking;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Minimum vertical size of a bar, in rows.
const MIN_ROW_SPAN: usize = 2;

/// Vertical placement computed for one booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// First grid row occupied (0-based).
    pub grid_row: usize,
    /// Number of contiguous rows occupied.
    pub row_span: usize,
    /// Minutes from range start to the booking's start.
    pub start_offset: u32,
    /// Minutes from range start to the booking's end, clamped to the
    /// range length.
    pub end_offset: u32,
    /// Whether `end_offset` was clamped at the range end.
    pub capped: bool,
}

/// Why a booking was left out of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Start time falls outside the visible range.
    OutsideRange,
    /// Party size is zero.
    EmptyParty,
}

/// A booking excluded from placement, by input index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skipped {
    /// Index into the input slice.
    pub index: usize,
    /// Why the booking was excluded.
    pub reason: SkipReason,
}

/// Result of laying out one day's bookings.
///
/// Placements are index-aligned with the input slice; skipped bookings
/// hold `None` and appear in [`skipped`](Self::skipped) with a reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLayout {
    placements: Vec<Option<Placement>>,
    total_rows: usize,
    skipped: Vec<Skipped>,
}

impl DayLayout {
    /// Per-booking placements in input order.
    #[must_use]
    pub fn placements(&self) -> &[Option<Placement>] {
        &self.placements
    }

    /// Placement for the booking at `index`, if it was placed.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Placement> {
        self.placements.get(index).and_then(Option::as_ref)
    }

    /// Total rows used across the whole grid.
    #[must_use]
    pub const fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Bookings excluded from placement.
    #[must_use]
    pub fn skipped(&self) -> &[Skipped] {
        &self.skipped
    }

    /// Whether nothing was placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_rows == 0
    }
}

/// Derive the number of rows a bar spans from its party size.
///
/// Larger parties render taller; sizes above `max_party_size` count as
/// `max_party_size`. With the default cap of 20 this yields spans in
/// `2..=11`.
#[must_use]
pub const fn row_span_for_party(party_size: u32, max_party_size: u32) -> usize {
    let clamped = if party_size > max_party_size {
        max_party_size
    } else {
        party_size
    };
    let span = (clamped / 2 + 1) as usize;
    if span < MIN_ROW_SPAN {
        MIN_ROW_SPAN
    } else {
        span
    }
}

/// Lay out one day's bookings into non-overlapping timeline rows.
///
/// Bookings are sorted by start offset, larger parties first among equal
/// starts (stable, so identical bookings keep their input order), then
/// placed one by one into the first starting row where every spanned row
/// is free of buffered conflicts. Results are returned in input order.
///
/// Bookings starting outside the range or with a zero party size are
/// skipped and reported, not errors; only malformed parameters fail.
pub fn layout_day(bookings: &[Booking], params: &LayoutParams) -> Result<DayLayout, LayoutError> {
    params.validate()?;
    let range_length = params.range_length();

    // Derive offsets, dropping bookings the grid cannot represent.
    let mut pending = Vec::with_capacity(bookings.len());
    let mut skipped = Vec::new();
    for (index, booking) in bookings.iter().enumerate() {
        if booking.party_size == 0 {
            skipped.push(Skipped {
                index,
                reason: SkipReason::EmptyParty,
            });
            continue;
        }
        let absolute = booking.start.minutes_since_midnight();
        if absolute < params.range_start_minutes || absolute >= params.range_end_minutes {
            skipped.push(Skipped {
                index,
                reason: SkipReason::OutsideRange,
            });
            continue;
        }
        let start_offset = absolute - params.range_start_minutes;
        // Saturating: an oversized duration clamps at the range end
        // rather than overflowing.
        let raw_end = start_offset.saturating_add(params.default_duration_minutes);
        pending.push(Pending {
            index,
            party_size: booking.party_size,
            placement: Placement {
                grid_row: 0,
                row_span: row_span_for_party(booking.party_size, params.max_party_size),
                start_offset,
                end_offset: raw_end.min(range_length),
                capped: raw_end > range_length,
            },
        });
    }

    // Start order is part of the contract: earliest first, larger
    // parties first among simultaneous starts, ties stable.
    pending.sort_by_key(|p| (p.placement.start_offset, Reverse(p.party_size)));

    let mut grid = RowGrid::new(params.buffer_minutes);
    let mut placements = vec![None; bookings.len()];
    for p in &mut pending {
        p.placement.grid_row = grid.place(
            Interval {
                start: p.placement.start_offset,
                end: p.placement.end_offset,
            },
            p.placement.row_span,
        );
        placements[p.index] = Some(p.placement);
    }

    Ok(DayLayout {
        placements,
        total_rows: grid.row_count(),
        skipped,
    })
}

/// A booking that survived filtering, awaiting a row.
struct Pending {
    index: usize,
    party_size: u32,
    placement: Placement,
}

/// An occupied `[start, end)` slice of a row, in minutes from range start.
#[derive(Debug, Clone, Copy)]
struct Interval {
    start: u32,
    end: u32,
}

impl Interval {
    /// Buffered-overlap check. Equality at the buffer boundary counts
    /// as no conflict. Saturating: a buffer wider than the clock makes
    /// everything conflict instead of overflowing.
    const fn conflicts(&self, other: &Self, buffer: u32) -> bool {
        !(self.end.saturating_add(buffer) <= other.start
            || other.end.saturating_add(buffer) <= self.start)
    }
}

/// Working grid state for one layout call: lazily grown rows, each
/// holding the intervals already placed in it.
struct RowGrid {
    rows: Vec<Vec<Interval>>,
    buffer: u32,
}

impl RowGrid {
    const fn new(buffer: u32) -> Self {
        Self {
            rows: Vec::new(),
            buffer,
        }
    }

    /// First-fit search: returns the first starting row from which
    /// `row_span` consecutive rows are all conflict-free, occupying
    /// them. Always terminates because rows are unbounded.
    fn place(&mut self, interval: Interval, row_span: usize) -> usize {
        let mut row = 0;
        loop {
            self.ensure_rows(row + row_span);
            if self.can_place(row, row_span, interval) {
                for r in row..(row + row_span) {
                    self.rows[r].push(interval);
                }
                return row;
            }
            row += 1;
        }
    }

    fn ensure_rows(&mut self, min_rows: usize) {
        while self.rows.len() < min_rows {
            self.rows.push(Vec::new());
        }
    }

    fn can_place(&self, row: usize, row_span: usize, interval: Interval) -> bool {
        self.rows[row..(row + row_span)]
            .iter()
            .all(|occupied| !occupied.iter().any(|o| o.conflicts(&interval, self.buffer)))
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }
}
