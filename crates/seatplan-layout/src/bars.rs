//! Pixel geometry for rendering placed bookings as timeline bars.

use crate::engine::Placement;
use seatplan_core::Rect;
use serde::{Deserialize, Serialize};

/// Scale factors turning a [`Placement`] into an on-screen bar.
///
/// Vertical position comes from the grid rows, horizontal position from
/// the minute offsets: `top = grid_row * row_height`, `height =
/// row_span * row_height - vertical_gap`, `left = start_offset *
/// px_per_minute`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarMetrics {
    /// Height of one grid row in pixels.
    pub row_height: f32,
    /// Gap trimmed off the bottom of every bar so stacked bars do not
    /// touch.
    pub vertical_gap: f32,
    /// Horizontal scale, pixels per minute.
    pub px_per_minute: f32,
}

impl BarMetrics {
    /// Create bar metrics.
    #[must_use]
    pub const fn new(row_height: f32, vertical_gap: f32, px_per_minute: f32) -> Self {
        Self {
            row_height,
            vertical_gap,
            px_per_minute,
        }
    }

    /// Pixel rectangle for one placed booking.
    #[must_use]
    pub fn bar_rect(&self, placement: &Placement) -> Rect {
        let minutes = placement.end_offset.saturating_sub(placement.start_offset);
        Rect::new(
            placement.start_offset as f32 * self.px_per_minute,
            placement.grid_row as f32 * self.row_height,
            minutes as f32 * self.px_per_minute,
            (placement.row_span as f32 * self.row_height - self.vertical_gap).max(0.0),
        )
    }

    /// Total pixel height of a grid with `total_rows` rows.
    #[must_use]
    pub fn grid_height(&self, total_rows: usize) -> f32 {
        total_rows as f32 * self.row_height
    }

    /// Total pixel width of a grid covering `range_length` minutes.
    #[must_use]
    pub fn grid_width(&self, range_length: u32) -> f32 {
        range_length as f32 * self.px_per_minute
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRICS: BarMetrics = BarMetrics::new(10.0, 2.0, 1.5);

    fn placement(grid_row: usize, row_span: usize, start: u32, end: u32) -> Placement {
        Placement {
            grid_row,
            row_span,
            start_offset: start,
            end_offset: end,
            capped: false,
        }
    }

    #[test]
    fn test_bar_rect_maps_rows_and_minutes() {
        let rect = METRICS.bar_rect(&placement(4, 3, 60, 180));
        assert_eq!(rect.x, 90.0);
        assert_eq!(rect.y, 40.0);
        assert_eq!(rect.width, 180.0);
        assert_eq!(rect.height, 28.0);
    }

    #[test]
    fn test_bar_height_never_negative() {
        let tight = BarMetrics::new(1.0, 5.0, 1.0);
        let rect = tight.bar_rect(&placement(0, 2, 0, 30));
        assert_eq!(rect.height, 0.0);
    }

    #[test]
    fn test_grid_dimensions() {
        assert_eq!(METRICS.grid_height(10), 100.0);
        assert_eq!(METRICS.grid_width(240), 360.0);
    }

    #[test]
    fn test_stacked_bars_do_not_touch() {
        let top = METRICS.bar_rect(&placement(0, 2, 0, 120));
        let below = METRICS.bar_rect(&placement(2, 2, 0, 120));
        assert!(top.bottom() < below.y);
        assert!(!top.intersects(&below));
    }
}
