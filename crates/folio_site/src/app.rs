//! App shell
//!
//! [`PortfolioApp`] wires the whole page together: it registers every
//! section's triggers, owns the scheduler, the nav channel writer, the
//! wipe transition, and the custom cursor, and routes host events (scroll,
//! resize, pointer, clicks, frames) to the right component.
//!
//! The host is expected to:
//! 1. mount the page's marker elements on the surface
//! 2. construct the app and call [`PortfolioApp::activate`]
//! 3. forward input events and call [`PortfolioApp::tick`] every frame

use folio_animation::{AnimationScheduler, PlaybackId, SpringConfig, SpringId};
use folio_core::{NavChannel, NavState, NavWriter, Property, SharedSurface};
use folio_orchestrator::{
    AuthoringError, CursorController, CursorTheme, TriggerRegistry, WipePhase, WipeTransition,
};
use thiserror::Error;

use crate::sections;

/// Scroll depth below which the navbar never hides
const NAV_HIDE_SCROLL: f32 = 80.0;
/// Navbar translate when hidden (its own height, off the top edge)
const NAV_HIDDEN_Y: f32 = -100.0;
/// Hero glyph pointer-parallax amplitude, px each way
const GLYPH_PARALLAX: f32 = 20.0;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error(transparent)]
    Authoring(#[from] AuthoringError),
    #[error("navigation channel writer already claimed")]
    NavWriterClaimed,
}

struct Navbar {
    offset: SpringId,
    hidden: bool,
}

struct Parallax {
    x: SpringId,
    y: SpringId,
}

/// The assembled portfolio page
pub struct PortfolioApp {
    surface: SharedSurface,
    scheduler: AnimationScheduler,
    registry: TriggerRegistry,
    nav: NavChannel,
    nav_writer: NavWriter,
    nav_links: Option<PlaybackId>,
    navbar: Option<Navbar>,
    glyph_parallax: Option<Parallax>,
    wipe: WipeTransition,
    cursor: Option<CursorController>,
    last_scroll_y: f32,
}

impl PortfolioApp {
    pub fn new(surface: SharedSurface) -> Result<Self, SiteError> {
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();

        let mut registry = TriggerRegistry::new(handle.clone());
        for (root, triggers) in sections::all() {
            for spec in triggers {
                registry.register(root, spec)?;
            }
        }

        let nav = NavChannel::new();
        let nav_writer = nav.take_writer().ok_or(SiteError::NavWriterClaimed)?;

        let panels = surface.resolve("wipe", ".panel");
        let wipe = WipeTransition::new(handle.clone(), surface.clone(), panels);

        let cursor = {
            let dot = surface.resolve("cursor", ".dot").first().copied();
            let ring = surface.resolve("cursor", ".ring").first().copied();
            match (dot, ring) {
                (Some(dot), Some(ring)) => Some(CursorController::new(
                    handle.clone(),
                    surface.as_ref(),
                    dot,
                    ring,
                    &nav,
                    CursorTheme::default(),
                )),
                _ => {
                    tracing::debug!("cursor markers not mounted; custom cursor skipped");
                    None
                }
            }
        };

        let navbar = surface
            .resolve(sections::navigation::ROOT, ".bar")
            .first()
            .and_then(|&bar| {
                handle.add_spring(bar, Property::TranslateY, SpringConfig::snappy(), 0.0)
            })
            .map(|offset| Navbar {
                offset,
                hidden: false,
            });

        // The hero glyph drifts a little toward the pointer.
        let glyph_parallax = surface
            .resolve(sections::hero::ROOT, ".glyph")
            .first()
            .copied()
            .and_then(|glyph| {
                let x = handle.add_spring(glyph, Property::TranslateX, SpringConfig::trailing(), 0.0)?;
                let y = handle.add_spring(glyph, Property::TranslateY, SpringConfig::trailing(), 0.0)?;
                Some(Parallax { x, y })
            });

        let last_scroll_y = surface.viewport().scroll_y;
        Ok(Self {
            surface,
            scheduler,
            registry,
            nav,
            nav_writer,
            nav_links: None,
            navbar,
            glyph_parallax,
            wipe,
            cursor,
            last_scroll_y,
        })
    }

    /// Arm every section against the mounted surface
    ///
    /// Mount timelines (intro bricks, hero entrance) start here, and any
    /// section already past its threshold fires immediately.
    pub fn activate(&mut self) {
        for (root, _) in sections::all() {
            self.registry.activate(root, self.surface.as_ref());
        }

        // The overlay link cascade is channel-driven, not threshold-driven.
        let timeline = sections::navigation::links_choreography().lower(&mut |selector| {
            self.surface
                .resolve(sections::navigation::ROOT, selector)
        });
        match folio_animation::TimelinePlayback::new(&timeline) {
            Ok(playback) => {
                self.nav_links = self.scheduler.handle().add_playback(playback);
            }
            Err(err) => tracing::error!(%err, "nav links timeline failed to compile"),
        }
    }

    /// Advance one frame
    pub fn tick(&mut self, dt: f32) {
        self.scheduler.tick(dt, self.surface.as_ref());

        // A wipe jump moves the scroll position mid-tick; triggers must
        // see the new position without waiting for a host scroll event.
        if self.surface.viewport().scroll_y != self.last_scroll_y {
            self.on_scroll();
        }
    }

    /// Host scroll event (the surface already reflects the new position)
    pub fn on_scroll(&mut self) {
        let scroll_y = self.surface.viewport().scroll_y;
        let scrolling_down = scroll_y > self.last_scroll_y;
        self.last_scroll_y = scroll_y;

        if let Some(navbar) = &mut self.navbar {
            let hide = scrolling_down && scroll_y > NAV_HIDE_SCROLL;
            if hide != navbar.hidden {
                navbar.hidden = hide;
                let target = if hide { NAV_HIDDEN_Y } else { 0.0 };
                self.scheduler.handle().set_spring_target(navbar.offset, target);
            }
        }

        self.registry.on_scroll(self.surface.as_ref());
    }

    /// Host resize event
    pub fn on_resize(&mut self) {
        self.registry.on_resize(self.surface.as_ref());
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if let Some(cursor) = &mut self.cursor {
            cursor.on_pointer_move(x, y, self.surface.as_ref());
        }
        if let Some(parallax) = &self.glyph_parallax {
            let viewport = self.surface.viewport();
            if viewport.width > 0.0 && viewport.height > 0.0 {
                let handle = self.scheduler.handle();
                let nx = (x / viewport.width - 0.5) * 2.0;
                let ny = (y / viewport.height - 0.5) * 2.0;
                handle.set_spring_target(parallax.x, nx * GLYPH_PARALLAX);
                handle.set_spring_target(parallax.y, ny * GLYPH_PARALLAX);
            }
        }
    }

    /// Pointer entered a plain interactive element (links, buttons)
    pub fn on_interactive_enter(&mut self) {
        if let Some(cursor) = &mut self.cursor {
            cursor.on_hover_start();
        }
    }

    pub fn on_interactive_leave(&mut self) {
        if let Some(cursor) = &mut self.cursor {
            cursor.on_hover_end();
        }
    }

    /// Pointer entered an element with a registered hover trigger
    pub fn on_hover_enter(&mut self, section: &str, trigger: &str) {
        self.on_interactive_enter();
        self.registry
            .pointer_enter(section, trigger, self.surface.as_ref());
    }

    pub fn on_hover_leave(&mut self, section: &str, trigger: &str) {
        self.on_interactive_leave();
        self.registry.pointer_leave(section, trigger);
    }

    /// Toggle the navigation overlay
    pub fn toggle_nav(&mut self) {
        let state = self.nav_writer.toggle();
        if let Some(links) = self.nav_links {
            match state {
                NavState::Open => self
                    .scheduler
                    .handle()
                    .play_from_start(links, self.surface.as_ref()),
                NavState::Closed => self.scheduler.handle().reverse(links),
            }
        }
    }

    /// A nav link was clicked: close the overlay and wipe to the anchor
    pub fn on_anchor_click(&mut self, anchor: &str) {
        if self.nav.state().is_open() {
            self.toggle_nav();
        }
        self.wipe.navigate(anchor);
    }

    /// Tear the page down: cancel everything and restore the pointer
    pub fn teardown(&mut self) {
        self.registry.teardown_all();
        if let Some(cursor) = &mut self.cursor {
            cursor.teardown(self.surface.as_ref());
        }
        if let Some(links) = self.nav_links.take() {
            self.scheduler.handle().remove_playback(links);
        }
        if let Some(navbar) = self.navbar.take() {
            self.scheduler.handle().remove_spring(navbar.offset);
        }
        if let Some(parallax) = self.glyph_parallax.take() {
            self.scheduler.handle().remove_spring(parallax.x);
            self.scheduler.handle().remove_spring(parallax.y);
        }
    }

    // ------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------

    pub fn nav_channel(&self) -> &NavChannel {
        &self.nav
    }

    pub fn nav_state(&self) -> NavState {
        self.nav.state()
    }

    pub fn wipe_phase(&self) -> WipePhase {
        self.wipe.phase()
    }

    pub fn registry(&self) -> &TriggerRegistry {
        &self.registry
    }

    /// Whether anything is still animating
    pub fn is_animating(&self) -> bool {
        self.scheduler.has_active()
    }
}
