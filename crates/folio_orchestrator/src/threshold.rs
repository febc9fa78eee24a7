//! Scroll threshold evaluation
//!
//! A [`ScrollThreshold`] is the authored condition "when this edge of the
//! element crosses this line of the viewport". Evaluation is a pure
//! comparison of document-space positions, re-run on every scroll and
//! resize, so triggers behave identically whether the user scrolled there
//! or the page loaded there.

use folio_core::{Rect, Viewport};

/// A trigger line: an element edge measured against a viewport line
///
/// `element_fraction` picks the edge on the element (0 = top, 1 = bottom),
/// `viewport_fraction` the line across the viewport (0 = top, 1 = bottom).
/// The threshold is crossed while the element edge sits at or above the
/// viewport line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThreshold {
    element_fraction: f32,
    element_offset_px: f32,
    viewport_fraction: f32,
}

impl ScrollThreshold {
    pub fn new(element_fraction: f32, viewport_fraction: f32) -> Self {
        Self {
            element_fraction,
            element_offset_px: 0.0,
            viewport_fraction,
        }
    }

    /// Element top against a viewport line ("top 80%" style)
    pub fn top(viewport_fraction: f32) -> Self {
        Self::new(0.0, viewport_fraction)
    }

    /// Element bottom against a viewport line
    pub fn bottom(viewport_fraction: f32) -> Self {
        Self::new(1.0, viewport_fraction)
    }

    /// Shift the element edge by a pixel offset (negative moves it up)
    pub fn offset_px(mut self, px: f32) -> Self {
        self.element_offset_px = px;
        self
    }

    pub fn is_finite(&self) -> bool {
        self.element_fraction.is_finite()
            && self.element_offset_px.is_finite()
            && self.viewport_fraction.is_finite()
    }

    /// Document-space y of the element edge this threshold watches
    fn edge_y(&self, bounds: Rect) -> f32 {
        bounds.top() + bounds.height * self.element_fraction + self.element_offset_px
    }

    /// Document-space y of the viewport line at the current scroll
    fn line_y(&self, viewport: Viewport) -> f32 {
        viewport.scroll_y + viewport.height * self.viewport_fraction
    }

    /// Whether the element edge is at or above the viewport line
    pub fn crossed(&self, viewport: Viewport, bounds: Rect) -> bool {
        self.edge_y(bounds) <= self.line_y(viewport)
    }
}

/// A scrubbed span between two thresholds on the same element
///
/// Progress is 0 until `start` is crossed, 1 once `end` is crossed, and
/// linear in scroll position between them. The evaluator feeds this
/// straight into a playback seek; the scheduler clock is not involved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrubRange {
    pub start: ScrollThreshold,
    pub end: ScrollThreshold,
}

impl ScrubRange {
    pub fn new(start: ScrollThreshold, end: ScrollThreshold) -> Self {
        Self { start, end }
    }

    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    /// Scrub progress in `[0, 1]` for the current scroll position
    pub fn progress(&self, viewport: Viewport, bounds: Rect) -> f32 {
        // Distance the viewport line has travelled past each edge.
        let start_span = self.start.line_y(viewport) - self.start.edge_y(bounds);
        let end_span = self.end.edge_y(bounds) - self.end.line_y(viewport);
        let total = start_span + end_span;
        if total <= 0.0 {
            // Degenerate range: treat as a plain threshold on `start`.
            return if start_span >= 0.0 { 1.0 } else { 0.0 };
        }
        (start_span / total).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(scroll_y: f32) -> Viewport {
        Viewport {
            width: 1440.0,
            height: 900.0,
            scroll_y,
            content_height: 10_000.0,
        }
    }

    #[test]
    fn test_top_threshold_crossing() {
        // Element top at y=2000, threshold "top 80%": crosses when
        // scroll_y + 0.8 * 900 >= 2000, i.e. scroll_y >= 1280.
        let bounds = Rect::new(0.0, 2000.0, 1440.0, 600.0);
        let threshold = ScrollThreshold::top(0.8);

        assert!(!threshold.crossed(viewport(1279.0), bounds));
        assert!(threshold.crossed(viewport(1280.0), bounds));
        assert!(threshold.crossed(viewport(5000.0), bounds));
    }

    #[test]
    fn test_pixel_offset_shifts_edge() {
        // "top bottom-=100px": edge is element top minus 100, against the
        // viewport bottom line.
        let bounds = Rect::new(0.0, 2000.0, 1440.0, 600.0);
        let plain = ScrollThreshold::top(1.0);
        let shifted = ScrollThreshold::top(1.0).offset_px(-100.0);

        // Plain crosses at scroll_y = 1100; shifted edge sits higher so it
        // crosses 100px sooner, at scroll_y = 1000.
        assert!(plain.crossed(viewport(1100.0), bounds));
        assert!(!shifted.crossed(viewport(999.0), bounds));
        assert!(shifted.crossed(viewport(1000.0), bounds));
    }

    #[test]
    fn test_already_past_on_first_evaluation() {
        // No scroll history needed; position alone decides.
        let bounds = Rect::new(0.0, 100.0, 1440.0, 200.0);
        assert!(ScrollThreshold::top(0.8).crossed(viewport(0.0), bounds));
    }

    #[test]
    fn test_scrub_progress_endpoints_and_midpoint() {
        // Line at 70% viewport, from element top to element bottom.
        let bounds = Rect::new(0.0, 3000.0, 1440.0, 1000.0);
        let range = ScrubRange::new(ScrollThreshold::top(0.7), ScrollThreshold::bottom(0.7));

        // Start: line_y = top -> scroll_y = 3000 - 630 = 2370.
        assert_eq!(range.progress(viewport(2370.0), bounds), 0.0);
        // End: line_y = bottom -> scroll_y = 3370.
        assert_eq!(range.progress(viewport(3370.0), bounds), 1.0);
        // Midpoint.
        let mid = range.progress(viewport(2870.0), bounds);
        assert!((mid - 0.5).abs() < 1e-4);
        // Clamped outside.
        assert_eq!(range.progress(viewport(0.0), bounds), 0.0);
        assert_eq!(range.progress(viewport(9000.0), bounds), 1.0);
    }

    #[test]
    fn test_scrub_progress_monotone_in_scroll() {
        let bounds = Rect::new(0.0, 3000.0, 1440.0, 800.0);
        let range = ScrubRange::new(ScrollThreshold::top(0.7), ScrollThreshold::bottom(0.7));
        let mut prev = -1.0;
        for scroll in (2000..4200).step_by(50) {
            let p = range.progress(viewport(scroll as f32), bounds);
            assert!(p >= prev);
            prev = p;
        }
    }
}
