//! Animation target vocabulary
//!
//! A [`TargetId`] is an opaque handle to one animatable element on the
//! render surface. The orchestrator never touches elements directly; it
//! resolves marker selectors to target ids once, at trigger registration,
//! and writes property values through the surface for the rest of the
//! section's lifetime.

use slotmap::new_key_type;

new_key_type! {
    /// Handle to an animatable element resolved on the render surface
    pub struct TargetId;
}

/// Numeric visual properties the orchestrator can animate
///
/// Each property has a resting default: the value the element renders with
/// when no animation has ever touched it. Entrance timelines animate from
/// an authored offset *toward* the resting default, so a trigger that never
/// fires leaves content in its final readable state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    /// Opacity in [0, 1], resting at 1
    Opacity,
    /// Horizontal translation in pixels, resting at 0
    TranslateX,
    /// Vertical translation in pixels, resting at 0
    TranslateY,
    /// Vertical translation as a percentage of the element's own height,
    /// resting at 0 (used for masked line-reveal effects)
    TranslateYPercent,
    /// Uniform scale, resting at 1
    Scale,
    /// Horizontal scale, resting at 1
    ScaleX,
    /// Vertical scale, resting at 1
    ScaleY,
    /// Y-axis skew in degrees, resting at 0
    SkewY,
    /// Rotation in degrees, resting at 0
    Rotation,
    /// Render visibility as 0/1, resting at 1 (zero-duration set steps)
    Visibility,
}

impl Property {
    /// The value an untouched element renders with
    pub fn resting_default(self) -> f32 {
        match self {
            Property::Opacity | Property::Visibility => 1.0,
            Property::Scale | Property::ScaleX | Property::ScaleY => 1.0,
            Property::TranslateX
            | Property::TranslateY
            | Property::TranslateYPercent
            | Property::SkewY
            | Property::Rotation => 0.0,
        }
    }
}

/// Color-valued properties, animated through typed color tweens
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorProperty {
    Background,
    Border,
}
