//! Animatable value types
//!
//! Linear interpolation for the value types the orchestrator animates, and
//! a simple timed color tween used for hover restyles.

use folio_core::{Color, ColorProperty, RenderSurface, TargetId};

use crate::easing::Easing;

/// Values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Approximate equality, for settling detection
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

impl Interpolate for Color {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Color::lerp(*self, *other, t)
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
    }
}

/// A timed tween of one color-valued property on one target
///
/// Used for cursor hover restyles. Retargeting mid-flight starts the new
/// tween from the currently rendered color, so rapid enter/leave never
/// snaps.
#[derive(Clone, Debug)]
pub struct ColorTween {
    target: TargetId,
    property: ColorProperty,
    from: Color,
    to: Color,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl ColorTween {
    pub fn new(
        target: TargetId,
        property: ColorProperty,
        from: Color,
        to: Color,
        duration: f32,
        easing: Easing,
    ) -> Self {
        Self {
            target,
            property,
            from,
            to,
            duration,
            elapsed: 0.0,
            easing,
        }
    }

    /// Current interpolated color
    pub fn value(&self) -> Color {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = self.easing.apply(self.elapsed / self.duration);
        Interpolate::lerp(&self.from, &self.to, t)
    }

    /// Redirect the tween toward a new color, starting from wherever it is
    pub fn retarget(&mut self, to: Color, duration: f32) {
        self.from = self.value();
        self.to = to;
        self.duration = duration;
        self.elapsed = 0.0;
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance and write the current color to the surface
    pub fn step(&mut self, dt: f32, surface: &dyn RenderSurface) {
        if self.is_complete() {
            return;
        }
        self.elapsed = (self.elapsed + dt).min(self.duration);
        surface.apply_color(self.target, self.property, self.value());
    }
}
