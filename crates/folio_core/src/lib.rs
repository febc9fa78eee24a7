//! Folio core
//!
//! Shared foundation for the folio page: the [`RenderSurface`] contract that
//! the animation orchestration layer drives, geometry and color primitives,
//! the target/property vocabulary, and the [`NavChannel`] interaction-state
//! channel.
//!
//! The render surface itself (layout, styling, painting) is an external
//! collaborator. This crate only pins down the operations the orchestrator
//! needs from it: resolving marker selectors to targets, reading element
//! bounds and viewport metrics, and writing transform/opacity/color values.

pub mod channel;
pub mod color;
pub mod geometry;
pub mod headless;
pub mod surface;
pub mod target;

pub use channel::{NavChannel, NavState, NavSubscription, NavWriter};
pub use color::Color;
pub use geometry::{Rect, Viewport};
pub use headless::{AppliedValue, HeadlessSurface};
pub use surface::{MediaQuery, PointerStyle, RenderSurface, SharedSurface};
pub use target::{ColorProperty, Property, TargetId};
