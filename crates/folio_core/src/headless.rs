//! Headless render surface
//!
//! A [`RenderSurface`] backed by plain data: elements are registered with a
//! root scope, a marker selector, and document-space bounds, and every
//! property write is recorded. Tests and the walkthrough demo drive the
//! whole orchestration stack against this surface without any rendering.

use std::sync::Mutex;

use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use smallvec::SmallVec;

use crate::color::Color;
use crate::geometry::{Rect, Viewport};
use crate::surface::{MediaQuery, PointerStyle, RenderSurface};
use crate::target::{ColorProperty, Property, TargetId};

/// One recorded numeric property write
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppliedValue {
    pub target: TargetId,
    pub property: Property,
    pub value: f32,
}

struct Element {
    root: String,
    selector: String,
    bounds: Rect,
    anchor: Option<String>,
}

struct SurfaceState {
    elements: SlotMap<TargetId, Element>,
    /// Resolution order per (root, selector), document order
    order: Vec<TargetId>,
    viewport: Viewport,
    values: FxHashMap<(TargetId, Property), f32>,
    colors: FxHashMap<(TargetId, ColorProperty), Color>,
    log: Vec<AppliedValue>,
    pointer_style: PointerStyle,
    fine_pointer: bool,
    anchor_jumps: Vec<String>,
}

/// In-memory surface for tests and demos
pub struct HeadlessSurface {
    state: Mutex<SurfaceState>,
}

impl HeadlessSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            state: Mutex::new(SurfaceState {
                elements: SlotMap::with_key(),
                order: Vec::new(),
                viewport,
                values: FxHashMap::default(),
                colors: FxHashMap::default(),
                log: Vec::new(),
                pointer_style: PointerStyle::Default,
                fine_pointer: true,
                anchor_jumps: Vec::new(),
            }),
        }
    }

    /// Register an element under a section root with a marker selector
    pub fn add_element(&self, root: &str, selector: &str, bounds: Rect) -> TargetId {
        let mut state = self.state.lock().unwrap();
        let id = state.elements.insert(Element {
            root: root.to_string(),
            selector: selector.to_string(),
            bounds,
            anchor: None,
        });
        state.order.push(id);
        id
    }

    /// Register an element that is also an anchor-addressable section root
    pub fn add_anchor_element(&self, root: &str, selector: &str, bounds: Rect, anchor: &str) -> TargetId {
        let id = self.add_element(root, selector, bounds);
        let mut state = self.state.lock().unwrap();
        if let Some(element) = state.elements.get_mut(id) {
            element.anchor = Some(anchor.to_string());
        }
        id
    }

    /// Remove an element (simulates unmounting part of the tree)
    pub fn remove_element(&self, id: TargetId) {
        let mut state = self.state.lock().unwrap();
        state.elements.remove(id);
        state.order.retain(|t| *t != id);
    }

    /// Move an element (simulates layout shift from dynamic content)
    pub fn set_bounds(&self, id: TargetId, bounds: Rect) {
        let mut state = self.state.lock().unwrap();
        if let Some(element) = state.elements.get_mut(id) {
            element.bounds = bounds;
        }
    }

    pub fn set_scroll(&self, scroll_y: f32) {
        let mut state = self.state.lock().unwrap();
        let max = state.viewport.max_scroll();
        state.viewport.scroll_y = scroll_y.clamp(0.0, max);
    }

    pub fn set_viewport_size(&self, width: f32, height: f32) {
        let mut state = self.state.lock().unwrap();
        state.viewport.width = width;
        state.viewport.height = height;
    }

    pub fn set_content_height(&self, content_height: f32) {
        self.state.lock().unwrap().viewport.content_height = content_height;
    }

    pub fn set_fine_pointer(&self, fine: bool) {
        self.state.lock().unwrap().fine_pointer = fine;
    }

    /// Last applied value for a property, if any write ever happened
    pub fn value_of(&self, target: TargetId, property: Property) -> Option<f32> {
        self.state
            .lock()
            .unwrap()
            .values
            .get(&(target, property))
            .copied()
    }

    /// Effective rendered value: last write, or the resting default
    pub fn rendered_value(&self, target: TargetId, property: Property) -> f32 {
        self.value_of(target, property)
            .unwrap_or_else(|| property.resting_default())
    }

    pub fn color_of(&self, target: TargetId, property: ColorProperty) -> Option<Color> {
        self.state
            .lock()
            .unwrap()
            .colors
            .get(&(target, property))
            .copied()
    }

    pub fn pointer_style(&self) -> PointerStyle {
        self.state.lock().unwrap().pointer_style
    }

    /// Full write log since construction or the last [`Self::clear_log`]
    pub fn log(&self) -> Vec<AppliedValue> {
        self.state.lock().unwrap().log.clone()
    }

    pub fn clear_log(&self) {
        self.state.lock().unwrap().log.clear();
    }

    /// Anchor ids jumped to via [`RenderSurface::scroll_to_anchor`]
    pub fn anchor_jumps(&self) -> Vec<String> {
        self.state.lock().unwrap().anchor_jumps.clone()
    }
}

impl RenderSurface for HeadlessSurface {
    fn resolve(&self, root: &str, selector: &str) -> Vec<TargetId> {
        let state = self.state.lock().unwrap();
        let matches: SmallVec<[TargetId; 8]> = state
            .order
            .iter()
            .copied()
            .filter(|id| {
                state
                    .elements
                    .get(*id)
                    .is_some_and(|e| e.root == root && e.selector == selector)
            })
            .collect();
        matches.into_vec()
    }

    fn bounds(&self, target: TargetId) -> Option<Rect> {
        self.state
            .lock()
            .unwrap()
            .elements
            .get(target)
            .map(|e| e.bounds)
    }

    fn viewport(&self) -> Viewport {
        self.state.lock().unwrap().viewport
    }

    fn apply(&self, target: TargetId, property: Property, value: f32) {
        let mut state = self.state.lock().unwrap();
        if !state.elements.contains_key(target) {
            // Timelines may outlive unmounted elements; ignore.
            return;
        }
        state.values.insert((target, property), value);
        state.log.push(AppliedValue {
            target,
            property,
            value,
        });
    }

    fn apply_color(&self, target: TargetId, property: ColorProperty, color: Color) {
        let mut state = self.state.lock().unwrap();
        if !state.elements.contains_key(target) {
            return;
        }
        state.colors.insert((target, property), color);
    }

    fn set_pointer_style(&self, style: PointerStyle) {
        self.state.lock().unwrap().pointer_style = style;
    }

    fn scroll_to_anchor(&self, anchor: &str) {
        let mut state = self.state.lock().unwrap();
        let target_y = state.elements.values().find_map(|e| {
            (e.anchor.as_deref() == Some(anchor)).then_some(e.bounds.y)
        });
        match target_y {
            Some(y) => {
                let max = state.viewport.max_scroll();
                state.viewport.scroll_y = y.clamp(0.0, max);
                state.anchor_jumps.push(anchor.to_string());
            }
            None => tracing::warn!(anchor, "scroll_to_anchor: unknown anchor"),
        }
    }

    fn matches_media(&self, query: MediaQuery) -> bool {
        let state = self.state.lock().unwrap();
        match query {
            MediaQuery::FinePointer => state.fine_pointer,
            MediaQuery::MinWidth(px) => state.viewport.width >= px as f32,
        }
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}
