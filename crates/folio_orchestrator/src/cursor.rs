//! Custom cursor controller
//!
//! Two elements replace the platform pointer: a dot pinned to the pointer
//! position and a follower ring that trails it on springs. Hovering an
//! interactive element swells the ring, shrinks the dot, and shifts both
//! toward the accent color; opening the navigation overlay restyles the
//! cursor the same way so it stays visible over the overlay.
//!
//! The whole controller is gated on a fine pointer. On touch devices it
//! constructs in a disabled state and every method is a no-op.

use folio_animation::{ColorTween, ColorTweenId, Easing, SchedulerHandle, SpringConfig, SpringId};
use folio_core::{
    Color, ColorProperty, MediaQuery, NavChannel, NavSubscription, PointerStyle, Property,
    RenderSurface, TargetId,
};

const HOVER_RING_SCALE: f32 = 2.0;
const HOVER_DOT_SCALE: f32 = 0.5;
const RESTYLE_DURATION: f32 = 0.25;

/// Cursor color pair
#[derive(Clone, Copy, Debug)]
pub struct CursorTheme {
    /// Resting dot/ring color
    pub base: Color,
    /// Hover and nav-open color
    pub accent: Color,
}

impl Default for CursorTheme {
    fn default() -> Self {
        Self {
            base: Color::from_rgb8(0xd1, 0xd1, 0xc7),
            accent: Color::from_rgb8(0x34, 0xd3, 0x99),
        }
    }
}

struct ActiveCursor {
    follower_x: SpringId,
    follower_y: SpringId,
    ring_scale: SpringId,
    dot_scale: SpringId,
    dot_color: ColorTweenId,
    ring_color: ColorTweenId,
    _nav_sub: NavSubscription,
    seen_pointer: bool,
    hovering: bool,
}

/// Drives the custom cursor elements
pub struct CursorController {
    scheduler: SchedulerHandle,
    dot: TargetId,
    follower: TargetId,
    theme: CursorTheme,
    active: Option<ActiveCursor>,
}

impl CursorController {
    /// Build the controller, arming it only when a fine pointer is present
    pub fn new(
        scheduler: SchedulerHandle,
        surface: &dyn RenderSurface,
        dot: TargetId,
        follower: TargetId,
        channel: &NavChannel,
        theme: CursorTheme,
    ) -> Self {
        let mut controller = Self {
            scheduler,
            dot,
            follower,
            theme,
            active: None,
        };

        if !surface.matches_media(MediaQuery::FinePointer) {
            tracing::debug!("no fine pointer; custom cursor disabled");
            return controller;
        }

        surface.set_pointer_style(PointerStyle::None);

        let s = &controller.scheduler;
        let trailing = SpringConfig::trailing();
        let snappy = SpringConfig::snappy();
        let springs = (
            s.add_spring(follower, Property::TranslateX, trailing, 0.0),
            s.add_spring(follower, Property::TranslateY, trailing, 0.0),
            s.add_spring(follower, Property::Scale, snappy, 1.0),
            s.add_spring(dot, Property::Scale, snappy, 1.0),
        );
        let tweens = (
            s.add_color_tween(ColorTween::new(
                dot,
                ColorProperty::Background,
                theme.base,
                theme.base,
                0.0,
                Easing::CubicOut,
            )),
            s.add_color_tween(ColorTween::new(
                follower,
                ColorProperty::Border,
                theme.base,
                theme.base,
                0.0,
                Easing::CubicOut,
            )),
        );

        let (
            (Some(follower_x), Some(follower_y), Some(ring_scale), Some(dot_scale)),
            (Some(dot_color), Some(ring_color)),
        ) = (springs, tweens)
        else {
            tracing::warn!("scheduler gone; custom cursor disabled");
            surface.set_pointer_style(PointerStyle::Default);
            return controller;
        };

        // Recolor when the navigation overlay opens or closes.
        let restyle = controller.scheduler.clone();
        let nav_sub = channel.subscribe(move |state| {
            let color = if state.is_open() { theme.accent } else { theme.base };
            restyle.retarget_color(dot_color, color, RESTYLE_DURATION);
            restyle.retarget_color(ring_color, color, RESTYLE_DURATION);
        });

        controller.active = Some(ActiveCursor {
            follower_x,
            follower_y,
            ring_scale,
            dot_scale,
            dot_color,
            ring_color,
            _nav_sub: nav_sub,
            seen_pointer: false,
            hovering: false,
        });
        controller
    }

    pub fn is_enabled(&self) -> bool {
        self.active.is_some()
    }

    /// Track a pointer move: the dot snaps, the follower chases
    pub fn on_pointer_move(&mut self, x: f32, y: f32, surface: &dyn RenderSurface) {
        let Some(active) = &mut self.active else {
            return;
        };

        surface.apply(self.dot, Property::TranslateX, x);
        surface.apply(self.dot, Property::TranslateY, y);

        if active.seen_pointer {
            self.scheduler.set_spring_target(active.follower_x, x);
            self.scheduler.set_spring_target(active.follower_y, y);
        } else {
            // First event after mount: no chase from (0, 0).
            active.seen_pointer = true;
            self.scheduler.set_spring_immediate(active.follower_x, x);
            self.scheduler.set_spring_immediate(active.follower_y, y);
            surface.apply(self.follower, Property::TranslateX, x);
            surface.apply(self.follower, Property::TranslateY, y);
        }
    }

    /// Pointer entered an interactive element
    pub fn on_hover_start(&mut self) {
        let Some(active) = &mut self.active else {
            return;
        };
        if active.hovering {
            return;
        }
        active.hovering = true;
        self.scheduler
            .set_spring_target(active.ring_scale, HOVER_RING_SCALE);
        self.scheduler
            .set_spring_target(active.dot_scale, HOVER_DOT_SCALE);
        self.scheduler
            .retarget_color(active.dot_color, self.theme.accent, RESTYLE_DURATION);
        self.scheduler
            .retarget_color(active.ring_color, self.theme.accent, RESTYLE_DURATION);
    }

    /// Pointer left an interactive element
    pub fn on_hover_end(&mut self) {
        let Some(active) = &mut self.active else {
            return;
        };
        if !active.hovering {
            return;
        }
        active.hovering = false;
        self.scheduler.set_spring_target(active.ring_scale, 1.0);
        self.scheduler.set_spring_target(active.dot_scale, 1.0);
        self.scheduler
            .retarget_color(active.dot_color, self.theme.base, RESTYLE_DURATION);
        self.scheduler
            .retarget_color(active.ring_color, self.theme.base, RESTYLE_DURATION);
    }

    /// Release springs, drop the nav subscription, and restore the
    /// platform pointer. Idempotent.
    pub fn teardown(&mut self, surface: &dyn RenderSurface) {
        let Some(active) = self.active.take() else {
            return;
        };
        self.scheduler.remove_spring(active.follower_x);
        self.scheduler.remove_spring(active.follower_y);
        self.scheduler.remove_spring(active.ring_scale);
        self.scheduler.remove_spring(active.dot_scale);
        self.scheduler.remove_color_tween(active.dot_color);
        self.scheduler.remove_color_tween(active.ring_color);
        surface.set_pointer_style(PointerStyle::Default);
        tracing::debug!("custom cursor torn down");
    }
}
