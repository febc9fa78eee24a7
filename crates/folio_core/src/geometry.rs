//! Geometry primitives shared across the workspace

/// An axis-aligned rectangle in page coordinates
///
/// `y` is measured from the top of the document, not the viewport, so an
/// element's rect is stable across scrolling. Viewport-relative positions
/// are derived by subtracting [`Viewport::scroll_y`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Document-space y of the top edge
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Document-space y of the bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Document-space y of the vertical center
    pub fn center_y(&self) -> f32 {
        self.y + self.height * 0.5
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// A snapshot of the scrollable viewport
///
/// The surface reports this on demand; the orchestrator never caches it
/// across events since resize and content growth shift every derived
/// position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Viewport width in pixels
    pub width: f32,
    /// Viewport height in pixels
    pub height: f32,
    /// Current scroll offset from the document top
    pub scroll_y: f32,
    /// Total scrollable document height
    pub content_height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            scroll_y: 0.0,
            content_height: height,
        }
    }

    /// Document-space y currently aligned with the top of the viewport
    pub fn top(&self) -> f32 {
        self.scroll_y
    }

    /// Document-space y currently aligned with the bottom of the viewport
    pub fn bottom(&self) -> f32 {
        self.scroll_y + self.height
    }

    /// Maximum scroll offset for the current content height
    pub fn max_scroll(&self) -> f32 {
        (self.content_height - self.height).max(0.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1440.0, 900.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(0.0, 100.0, 50.0, 40.0);
        assert_eq!(r.top(), 100.0);
        assert_eq!(r.bottom(), 140.0);
        assert_eq!(r.center_y(), 120.0);
    }

    #[test]
    fn test_viewport_bottom_tracks_scroll() {
        let mut vp = Viewport::new(1440.0, 900.0);
        vp.content_height = 5000.0;
        vp.scroll_y = 300.0;
        assert_eq!(vp.top(), 300.0);
        assert_eq!(vp.bottom(), 1200.0);
        assert_eq!(vp.max_scroll(), 4100.0);
    }
}
