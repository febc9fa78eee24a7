//! Render surface contract
//!
//! The page's layout and styling live outside this workspace. What the
//! orchestration layer needs from the surface is narrow: resolve marker
//! selectors to targets, read positions, and write visual property values.
//! [`RenderSurface`] pins that contract down so the engine can be driven
//! headlessly in tests and demos.

use std::sync::Arc;

use crate::color::Color;
use crate::geometry::{Rect, Viewport};
use crate::target::{ColorProperty, Property, TargetId};

/// A surface shared across components and animation callbacks
pub type SharedSurface = Arc<dyn RenderSurface + Send + Sync>;

/// Platform pointer style override
///
/// The custom cursor hides the platform pointer while it is active and must
/// restore it on teardown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerStyle {
    /// Platform default pointer
    #[default]
    Default,
    /// Pointer hidden (a custom cursor element is drawn instead)
    None,
}

/// Media conditions the surface can answer
///
/// Only the queries the page actually gates on; this is not a CSS media
/// query engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaQuery {
    /// A precise pointing device (mouse/trackpad) is present
    FinePointer,
    /// Viewport at least `min_width` pixels wide
    MinWidth(u32),
}

/// The rendering host as seen by the animation orchestrator
///
/// # Contract
///
/// Marker elements for a section exist on the surface before that section's
/// registry is activated. Selector resolution is scoped: `resolve` only
/// returns targets inside the subtree named by `root`. Resolution order is
/// document order, which stagger expansion depends on.
///
/// All methods are cheap and synchronous; the orchestrator calls them from
/// scroll and frame handlers.
pub trait RenderSurface {
    /// Resolve a marker selector inside a section root to target handles
    ///
    /// An unknown root or selector resolves to an empty list; the caller
    /// decides whether that is tolerable (trigger registration) or an
    /// authoring error.
    fn resolve(&self, root: &str, selector: &str) -> Vec<TargetId>;

    /// Document-space bounds of a target, if it is still mounted
    fn bounds(&self, target: TargetId) -> Option<Rect>;

    /// Current viewport and scroll metrics
    fn viewport(&self) -> Viewport;

    /// Write a numeric visual property on a target
    ///
    /// Unknown targets are ignored; a timeline may legitimately outlive an
    /// element that was unmounted mid-flight.
    fn apply(&self, target: TargetId, property: Property, value: f32);

    /// Write a color-valued property on a target
    fn apply_color(&self, target: TargetId, property: ColorProperty, color: Color);

    /// Override or restore the platform pointer style
    fn set_pointer_style(&self, style: PointerStyle);

    /// Jump the scroll position so the element with the given anchor id is
    /// at the top of the viewport
    fn scroll_to_anchor(&self, anchor: &str);

    /// Answer a media condition
    fn matches_media(&self, query: MediaQuery) -> bool;
}
