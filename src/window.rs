//! Viewport windowing for virtualized rendering.
//!
//! Given the filtered+sorted row count and a pixel viewport, compute the
//! index range to materialize plus the leading/trailing filler extents, so
//! rendering cost scales with the viewport rather than the dataset. The
//! computation is a pure function of its inputs; whenever the underlying
//! sequence changes, the caller recomputes from scratch instead of patching
//! stale offsets.

use serde::{Deserialize, Serialize};

/// Extra rows materialized beyond each visible boundary to mask scroll
/// pop-in.
pub const DEFAULT_OVERSCAN: usize = 100;

/// The visible slice of the scroll container, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Scroll offset from the top of the content, in pixels.
    pub scroll_offset: f64,
    /// Visible height, in pixels.
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_offset: f64, height: f64) -> Self {
        Viewport { scroll_offset, height }
    }
}

/// Row-geometry parameters for the window computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSpec {
    /// Per-row pixel height estimate.
    pub row_height: f64,
    /// Rows materialized beyond each visible boundary.
    pub overscan: usize,
}

impl WindowSpec {
    pub fn new(row_height: f64) -> Self {
        WindowSpec {
            row_height,
            overscan: DEFAULT_OVERSCAN,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }
}

/// The materialized slice: rows `[start, end)` plus two filler spacers whose
/// heights reproduce the total scrollable extent of all `N` rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub start: usize,
    pub end: usize,
    pub leading_height: f64,
    pub trailing_height: f64,
}

impl Window {
    /// The window over nothing: no rows, zero fillers.
    pub fn empty() -> Self {
        Window {
            start: 0,
            end: 0,
            leading_height: 0.0,
            trailing_height: 0.0,
        }
    }

    /// Number of rows to materialize.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Compute the window over `row_count` rows for the given viewport.
///
/// Guarantees `0 <= start <= end <= row_count` and the extent identity
/// `leading + (end - start) * row_height + trailing == row_count * row_height`
/// (the fillers are computed from the index range, so the identity is exact
/// up to float rounding). A zero row count or non-positive row height yields
/// the empty window.
pub fn compute(row_count: usize, viewport: &Viewport, spec: &WindowSpec) -> Window {
    if row_count == 0 || spec.row_height <= 0.0 {
        return Window::empty();
    }

    let content_height = row_count as f64 * spec.row_height;
    let offset = viewport.scroll_offset.clamp(0.0, content_height);
    let height = viewport.height.max(0.0);

    // Both edges may cut through a row; such rows count as visible and must
    // land inside the pre-overscan range.
    let first_visible = ((offset / spec.row_height).floor() as usize).min(row_count);
    let last_visible = (((offset + height) / spec.row_height).ceil() as usize).min(row_count);

    let start = first_visible.saturating_sub(spec.overscan);
    let end = (last_visible + spec.overscan).min(row_count);

    Window {
        start,
        end,
        leading_height: start as f64 * spec.row_height,
        trailing_height: (row_count - end) as f64 * spec.row_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers(window: &Window, row_count: usize, row_height: f64) {
        assert!(window.start <= window.end);
        assert!(window.end <= row_count);
        let total = window.leading_height
            + window.len() as f64 * row_height
            + window.trailing_height;
        assert!((total - row_count as f64 * row_height).abs() < 1e-9);
    }

    #[test]
    fn test_empty_dataset() {
        let window = compute(0, &Viewport::new(0.0, 600.0), &WindowSpec::new(40.0));
        assert_eq!(window, Window::empty());
    }

    #[test]
    fn test_top_of_list_no_overscan() {
        let spec = WindowSpec::new(40.0).with_overscan(0);
        let window = compute(1000, &Viewport::new(0.0, 600.0), &spec);

        assert_eq!(window.start, 0);
        assert_eq!(window.end, 15); // 600 / 40 visible rows
        assert_eq!(window.leading_height, 0.0);
        assert_covers(&window, 1000, 40.0);
    }

    #[test]
    fn test_mid_scroll_with_overscan() {
        let spec = WindowSpec::new(40.0).with_overscan(5);
        // Offset 4000px -> first visible row 100.
        let window = compute(1000, &Viewport::new(4000.0, 600.0), &spec);

        assert_eq!(window.start, 95);
        assert_eq!(window.end, 120); // 100 + 15 visible + 5 overscan
        assert_eq!(window.leading_height, 95.0 * 40.0);
        assert_covers(&window, 1000, 40.0);
    }

    #[test]
    fn test_overscan_clamps_at_both_ends() {
        let spec = WindowSpec::new(40.0).with_overscan(1000);
        let window = compute(50, &Viewport::new(0.0, 600.0), &spec);

        assert_eq!(window.start, 0);
        assert_eq!(window.end, 50);
        assert_eq!(window.leading_height, 0.0);
        assert_eq!(window.trailing_height, 0.0);
        assert_covers(&window, 50, 40.0);
    }

    #[test]
    fn test_scroll_past_content_end() {
        let spec = WindowSpec::new(40.0).with_overscan(0);
        // Offset exactly at the content end.
        let window = compute(50, &Viewport::new(2000.0, 600.0), &spec);
        assert_eq!(window.start, 50);
        assert_eq!(window.end, 50);
        assert_eq!(window.leading_height, 50.0 * 40.0);
        assert_covers(&window, 50, 40.0);

        // Offsets beyond the extent are clamped, not faulted.
        let past = compute(50, &Viewport::new(1.0e9, 600.0), &spec);
        assert_eq!(past, window);
    }

    #[test]
    fn test_negative_offset_is_clamped() {
        let spec = WindowSpec::new(40.0).with_overscan(0);
        let window = compute(100, &Viewport::new(-500.0, 600.0), &spec);
        assert_eq!(window.start, 0);
        assert_covers(&window, 100, 40.0);
    }

    #[test]
    fn test_fractional_offset_rounds_down() {
        let spec = WindowSpec::new(40.0).with_overscan(0);
        // The viewport spans pixels [99.5, 179.5): row 2 is cut by the top
        // edge and row 4 by the bottom edge; both must be included.
        let window = compute(100, &Viewport::new(99.5, 80.0), &spec);
        assert_eq!(window.start, 2);
        assert_eq!(window.end, 5);
        assert_covers(&window, 100, 40.0);
    }

    #[test]
    fn test_partially_visible_bottom_row_included() {
        let spec = WindowSpec::new(40.0).with_overscan(0);
        // The viewport spans pixels [20, 60): rows 0 and 1 are each half
        // visible, so both must be materialized even without overscan.
        let window = compute(100, &Viewport::new(20.0, 40.0), &spec);
        assert_eq!(window.start, 0);
        assert_eq!(window.end, 2);
        assert_covers(&window, 100, 40.0);
    }

    #[test]
    fn test_zero_row_height_yields_empty_window() {
        let window = compute(100, &Viewport::new(0.0, 600.0), &WindowSpec::new(0.0));
        assert_eq!(window, Window::empty());
    }

    #[test]
    fn test_default_overscan() {
        assert_eq!(WindowSpec::new(40.0).overscan, DEFAULT_OVERSCAN);
    }

    #[test]
    fn test_coverage_identity_over_many_viewports() {
        let spec = WindowSpec::new(37.0).with_overscan(8);
        for row_count in [0usize, 1, 13, 500] {
            for offset in [0.0, 10.0, 370.0, 5000.0, 1.0e6] {
                for height in [0.0, 120.0, 900.0] {
                    let window = compute(row_count, &Viewport::new(offset, height), &spec);
                    assert_covers(&window, row_count, 37.0);
                }
            }
        }
    }
}
