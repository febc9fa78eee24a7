//! Full-screen wipe transition
//!
//! Anchor navigation does not scroll smoothly; it hides the jump behind a
//! wipe. Columns sweep in to cover the viewport, the scroll position jumps
//! while nothing is visible, and the columns sweep back out.
//!
//! The transition is a three-phase state machine. A navigation request
//! while any phase other than `Idle` is in flight is ignored, so rapid
//! clicks cannot interleave two wipes.

use std::sync::{Arc, Mutex};

use folio_animation::{
    Easing, PlaybackEvent, SchedulerHandle, Stagger, Step, Timeline, TimelinePlayback,
};
use folio_core::{Property, SharedSurface, TargetId};

const SWEEP_DURATION: f32 = 0.8;
const SWEEP_STAGGER: f32 = 0.06;

/// Where the wipe currently is
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WipePhase {
    Idle,
    /// Columns sweeping in; the jump happens when they finish
    Covering,
    /// Scroll has jumped; columns sweeping back out
    Revealing,
}

/// The wipe transition driver
///
/// With no panel targets the wipe degenerates gracefully: the cover
/// timeline completes on the next tick and the jump still happens.
pub struct WipeTransition {
    scheduler: SchedulerHandle,
    surface: SharedSurface,
    panels: Vec<TargetId>,
    phase: Arc<Mutex<WipePhase>>,
}

impl WipeTransition {
    pub fn new(scheduler: SchedulerHandle, surface: SharedSurface, panels: Vec<TargetId>) -> Self {
        Self {
            scheduler,
            surface,
            panels,
            phase: Arc::new(Mutex::new(WipePhase::Idle)),
        }
    }

    pub fn phase(&self) -> WipePhase {
        *self.phase.lock().unwrap()
    }

    pub fn is_idle(&self) -> bool {
        self.phase() == WipePhase::Idle
    }

    /// Start a wipe that lands on `anchor`
    ///
    /// Ignored if a wipe is already in flight.
    pub fn navigate(&self, anchor: &str) {
        {
            let mut phase = self.phase.lock().unwrap();
            if *phase != WipePhase::Idle {
                tracing::debug!(anchor, current = ?*phase, "wipe in flight; navigation ignored");
                return;
            }
            *phase = WipePhase::Covering;
        }

        let cover = sweep_timeline(&self.panels, 0.0, 1.0);
        let playback = match TimelinePlayback::new(&cover) {
            Ok(playback) => playback,
            Err(err) => {
                tracing::error!(%err, "cover timeline failed to compile");
                *self.phase.lock().unwrap() = WipePhase::Idle;
                return;
            }
        };

        let scheduler = self.scheduler.clone();
        let surface = Arc::clone(&self.surface);
        let panels = self.panels.clone();
        let phase = Arc::clone(&self.phase);
        let anchor = anchor.to_string();
        let cover_id = Arc::new(Mutex::new(None));
        let cover_id_inner = Arc::clone(&cover_id);

        let id = self.scheduler.add_playback_with(playback, move |event| {
            if event != PlaybackEvent::Completed {
                return;
            }
            if let Some(id) = cover_id_inner.lock().unwrap().take() {
                scheduler.remove_playback(id);
            }

            // Covered: jump while nothing is visible, then sweep out.
            surface.scroll_to_anchor(&anchor);
            *phase.lock().unwrap() = WipePhase::Revealing;

            let reveal = sweep_timeline(&panels, 1.0, 0.0);
            let Ok(playback) = TimelinePlayback::new(&reveal) else {
                *phase.lock().unwrap() = WipePhase::Idle;
                return;
            };

            let phase_done = Arc::clone(&phase);
            let scheduler_done = scheduler.clone();
            let reveal_id = Arc::new(Mutex::new(None));
            let reveal_id_inner = Arc::clone(&reveal_id);
            let id = scheduler.add_playback_with(playback, move |event| {
                if event != PlaybackEvent::Completed {
                    return;
                }
                if let Some(id) = reveal_id_inner.lock().unwrap().take() {
                    scheduler_done.remove_playback(id);
                }
                *phase_done.lock().unwrap() = WipePhase::Idle;
            });
            *reveal_id.lock().unwrap() = id;
            if let Some(id) = id {
                scheduler.play_from_start(id, surface.as_ref());
            } else {
                *phase.lock().unwrap() = WipePhase::Idle;
            }
        });

        match id {
            Some(id) => {
                *cover_id.lock().unwrap() = Some(id);
                self.scheduler.play_from_start(id, self.surface.as_ref());
                tracing::debug!(panels = self.panels.len(), "wipe covering");
            }
            None => {
                *self.phase.lock().unwrap() = WipePhase::Idle;
            }
        }
    }
}

fn sweep_timeline(panels: &[TargetId], from: f32, to: f32) -> Timeline {
    Timeline::new().step(
        Step::new(panels.to_vec())
            .from_to(Property::ScaleY, from, to)
            .duration(SWEEP_DURATION)
            .ease(Easing::QuintInOut)
            .stagger(Stagger::linear(SWEEP_STAGGER)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_animation::AnimationScheduler;
    use folio_core::{HeadlessSurface, Rect, RenderSurface, Viewport};

    fn fixture() -> (AnimationScheduler, Arc<HeadlessSurface>, WipeTransition) {
        let scheduler = AnimationScheduler::new();
        let surface = Arc::new(HeadlessSurface::new(Viewport {
            width: 1440.0,
            height: 900.0,
            scroll_y: 0.0,
            content_height: 8000.0,
        }));
        surface.add_anchor_element(
            "skills",
            "section",
            Rect::new(0.0, 3000.0, 1440.0, 900.0),
            "skills",
        );
        let panels: Vec<_> = (0..4)
            .map(|i| {
                surface.add_element(
                    "wipe",
                    ".panel",
                    Rect::new(i as f32 * 360.0, 0.0, 360.0, 900.0),
                )
            })
            .collect();
        let shared: SharedSurface = Arc::clone(&surface) as SharedSurface;
        let wipe = WipeTransition::new(scheduler.handle(), shared, panels);
        (scheduler, surface, wipe)
    }

    #[test]
    fn test_full_wipe_sequence() {
        let (scheduler, surface, wipe) = fixture();

        wipe.navigate("skills");
        assert_eq!(wipe.phase(), WipePhase::Covering);
        // Jump has not happened yet.
        assert_eq!(surface.viewport().scroll_y, 0.0);

        // Run past the cover sweep: jump lands, reveal starts.
        for _ in 0..75 {
            scheduler.tick(0.016, surface.as_ref());
        }
        assert_eq!(surface.viewport().scroll_y, 3000.0);
        assert_eq!(surface.anchor_jumps(), vec!["skills".to_string()]);

        // Run past the reveal sweep: back to idle.
        for _ in 0..75 {
            scheduler.tick(0.016, surface.as_ref());
        }
        assert_eq!(wipe.phase(), WipePhase::Idle);
    }

    #[test]
    fn test_reentrant_navigation_ignored() {
        let (scheduler, surface, wipe) = fixture();

        wipe.navigate("skills");
        scheduler.tick(0.016, surface.as_ref());
        wipe.navigate("skills"); // Mid-cover: ignored
        wipe.navigate("skills");

        for _ in 0..160 {
            scheduler.tick(0.016, surface.as_ref());
        }
        // Exactly one jump despite three clicks.
        assert_eq!(surface.anchor_jumps().len(), 1);
        assert_eq!(wipe.phase(), WipePhase::Idle);
    }

    #[test]
    fn test_second_navigation_after_idle_works() {
        let (scheduler, surface, wipe) = fixture();
        surface.add_anchor_element(
            "contact",
            "section",
            Rect::new(0.0, 6000.0, 1440.0, 900.0),
            "contact",
        );

        wipe.navigate("skills");
        for _ in 0..160 {
            scheduler.tick(0.016, surface.as_ref());
        }
        wipe.navigate("contact");
        for _ in 0..160 {
            scheduler.tick(0.016, surface.as_ref());
        }
        assert_eq!(
            surface.anchor_jumps(),
            vec!["skills".to_string(), "contact".to_string()]
        );
        assert_eq!(surface.viewport().scroll_y, 6000.0);
    }

    #[test]
    fn test_no_panels_still_jumps() {
        let scheduler = AnimationScheduler::new();
        let surface = Arc::new(HeadlessSurface::new(Viewport {
            content_height: 8000.0,
            ..Viewport::default()
        }));
        surface.add_anchor_element(
            "skills",
            "section",
            Rect::new(0.0, 3000.0, 1440.0, 900.0),
            "skills",
        );
        let wipe = WipeTransition::new(
            scheduler.handle(),
            Arc::clone(&surface) as SharedSurface,
            Vec::new(),
        );

        wipe.navigate("skills");
        for _ in 0..10 {
            scheduler.tick(0.016, surface.as_ref());
        }
        assert_eq!(surface.viewport().scroll_y, 3000.0);
        assert_eq!(wipe.phase(), WipePhase::Idle);
    }
}
