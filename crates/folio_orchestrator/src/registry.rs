//! Per-section trigger registry
//!
//! The registry owns every section's triggers through a four-phase
//! lifecycle:
//!
//! 1. **register** — store the validated spec; nothing is resolved yet
//! 2. **activate** — resolve selectors against the mounted surface, compile
//!    playbacks, and evaluate thresholds once so content already past its
//!    trigger line fires immediately
//! 3. **fire / evaluate** — scroll and resize re-run threshold evaluation;
//!    replay policies decide what a repeat crossing does
//! 4. **teardown** — cancel playbacks and forget resolution; specs are
//!    kept so the section can be activated again
//!
//! A selector that resolves to nothing is tolerated: the trigger stays
//! dormant and a warning is logged once, at activation.

use folio_animation::{PlaybackId, SchedulerHandle, TimelinePlayback};
use folio_core::{RenderSurface, TargetId};
use indexmap::IndexMap;

use crate::trigger::{AuthoringError, ReplayPolicy, TriggerKind, TriggerSpec};

struct TriggerState {
    spec: TriggerSpec,
    /// Resolved threshold/hover anchor, present only while active
    anchor: Option<TargetId>,
    playback: Option<PlaybackId>,
    /// Has ever fired (drives `Once` and re-entry behavior)
    fired: bool,
    /// Currently past the enter threshold
    inside: bool,
}

impl TriggerState {
    fn new(spec: TriggerSpec) -> Self {
        Self {
            spec,
            anchor: None,
            playback: None,
            fired: false,
            inside: false,
        }
    }
}

#[derive(Default)]
struct Section {
    active: bool,
    triggers: Vec<TriggerState>,
}

/// Registry of every section's triggers
pub struct TriggerRegistry {
    scheduler: SchedulerHandle,
    sections: IndexMap<String, Section>,
}

impl TriggerRegistry {
    pub fn new(scheduler: SchedulerHandle) -> Self {
        Self {
            scheduler,
            sections: IndexMap::new(),
        }
    }

    /// Register a trigger under a section root, validating it eagerly
    pub fn register(&mut self, section: &str, spec: TriggerSpec) -> Result<(), AuthoringError> {
        spec.validate()?;
        let entry = self.sections.entry(section.to_string()).or_default();
        if entry.triggers.iter().any(|t| t.spec.name == spec.name) {
            return Err(AuthoringError::DuplicateTrigger {
                section: section.to_string(),
                name: spec.name.clone(),
            });
        }
        entry.triggers.push(TriggerState::new(spec));
        Ok(())
    }

    /// Resolve and arm a section's triggers against the mounted surface
    ///
    /// Safe to call on an already-active section (no-op). Mount triggers
    /// fire here; scroll triggers are evaluated once immediately, so a
    /// section already past its threshold animates in without waiting for
    /// a scroll event.
    pub fn activate(&mut self, section: &str, surface: &dyn RenderSurface) {
        let Some(entry) = self.sections.get_mut(section) else {
            tracing::warn!(section, "activate: unknown section");
            return;
        };
        if entry.active {
            return;
        }
        entry.active = true;

        for state in &mut entry.triggers {
            let timeline = state
                .spec
                .choreography
                .lower(&mut |selector| surface.resolve(section, selector));

            if !state.spec.anchor.is_empty() {
                state.anchor = surface.resolve(section, &state.spec.anchor).first().copied();
                if state.anchor.is_none() {
                    tracing::warn!(
                        section,
                        trigger = %state.spec.name,
                        anchor = %state.spec.anchor,
                        "anchor selector resolved to nothing; trigger dormant"
                    );
                    continue;
                }
            }

            match TimelinePlayback::new(&timeline) {
                Ok(playback) => {
                    state.playback = self.scheduler.add_playback(playback);
                }
                Err(err) => {
                    // Structural errors are caught at register; this only
                    // trips if the spec was mutated since.
                    tracing::error!(section, trigger = %state.spec.name, %err, "compile failed");
                    continue;
                }
            }

            if matches!(state.spec.kind, TriggerKind::Mount) {
                if let Some(id) = state.playback {
                    self.scheduler.play_from_start(id, surface);
                    state.fired = true;
                }
            }
        }

        self.evaluate_section(section, surface);
        tracing::debug!(section, "section activated");
    }

    /// Cancel a section's playbacks and drop its resolution
    ///
    /// Idempotent. Registered specs survive, so the section can be
    /// activated again later; fired/inside state resets with it.
    pub fn teardown(&mut self, section: &str) {
        let Some(entry) = self.sections.get_mut(section) else {
            return;
        };
        if !entry.active {
            return;
        }
        entry.active = false;
        for state in &mut entry.triggers {
            if let Some(id) = state.playback.take() {
                self.scheduler.remove_playback(id);
            }
            state.anchor = None;
            state.fired = false;
            state.inside = false;
        }
        tracing::debug!(section, "section torn down");
    }

    pub fn teardown_all(&mut self) {
        let names: Vec<String> = self.sections.keys().cloned().collect();
        for name in names {
            self.teardown(&name);
        }
    }

    /// Re-evaluate every active threshold after a scroll
    pub fn on_scroll(&mut self, surface: &dyn RenderSurface) {
        self.evaluate_all(surface);
    }

    /// Re-evaluate every active threshold after a resize or layout shift
    pub fn on_resize(&mut self, surface: &dyn RenderSurface) {
        self.evaluate_all(surface);
    }

    /// Manually fire a trigger, restarting its playback from the top
    ///
    /// Honors the replay policy: a `Once` trigger that has already fired
    /// stays settled.
    pub fn fire(&mut self, section: &str, name: &str, surface: &dyn RenderSurface) {
        let Some(state) = self.trigger_mut(section, name) else {
            tracing::warn!(section, name, "fire: unknown or dormant trigger");
            return;
        };
        if state.fired
            && matches!(
                state.spec.kind,
                TriggerKind::Scroll {
                    replay: ReplayPolicy::Once,
                    ..
                }
            )
        {
            tracing::debug!(section, name, "fire: once-trigger already ran");
            return;
        }
        if let Some(id) = state.playback {
            state.fired = true;
            self.scheduler.play_from_start(id, surface);
        }
    }

    /// Route a pointer-enter on a hover trigger's anchor
    pub fn pointer_enter(&mut self, section: &str, name: &str, surface: &dyn RenderSurface) {
        let scheduler = self.scheduler.clone();
        let Some(state) = self.trigger_mut(section, name) else {
            return;
        };
        if !matches!(state.spec.kind, TriggerKind::Hover) {
            return;
        }
        if let Some(id) = state.playback {
            if state.fired {
                scheduler.resume(id);
            } else {
                state.fired = true;
                scheduler.play_from_start(id, surface);
            }
        }
    }

    /// Route a pointer-leave on a hover trigger's anchor
    pub fn pointer_leave(&mut self, section: &str, name: &str) {
        let scheduler = self.scheduler.clone();
        let Some(state) = self.trigger_mut(section, name) else {
            return;
        };
        if matches!(state.spec.kind, TriggerKind::Hover) {
            if let Some(id) = state.playback {
                scheduler.reverse(id);
            }
        }
    }

    pub fn is_active(&self, section: &str) -> bool {
        self.sections.get(section).is_some_and(|s| s.active)
    }

    /// Whether a trigger has fired at least once (diagnostics and tests)
    pub fn has_fired(&self, section: &str, name: &str) -> bool {
        self.sections
            .get(section)
            .and_then(|s| s.triggers.iter().find(|t| t.spec.name == name))
            .is_some_and(|t| t.fired)
    }

    fn trigger_mut(&mut self, section: &str, name: &str) -> Option<&mut TriggerState> {
        self.sections
            .get_mut(section)?
            .triggers
            .iter_mut()
            .find(|t| t.spec.name == name && t.playback.is_some())
    }

    fn evaluate_all(&mut self, surface: &dyn RenderSurface) {
        let names: Vec<String> = self
            .sections
            .iter()
            .filter(|(_, s)| s.active)
            .map(|(name, _)| name.clone())
            .collect();
        for name in names {
            self.evaluate_section(&name, surface);
        }
    }

    fn evaluate_section(&mut self, section: &str, surface: &dyn RenderSurface) {
        let scheduler = self.scheduler.clone();
        let viewport = surface.viewport();
        let Some(entry) = self.sections.get_mut(section) else {
            return;
        };

        for state in &mut entry.triggers {
            let (Some(anchor), Some(playback)) = (state.anchor, state.playback) else {
                continue;
            };
            let Some(bounds) = surface.bounds(anchor) else {
                // Anchor unmounted mid-session; leave the trigger as-is.
                continue;
            };

            match state.spec.kind {
                TriggerKind::Scroll { enter, replay } => {
                    let inside = enter.crossed(viewport, bounds);
                    if inside && !state.inside {
                        match replay {
                            ReplayPolicy::Once if state.fired => {}
                            ReplayPolicy::Once | ReplayPolicy::EveryEntry => {
                                state.fired = true;
                                scheduler.play_from_start(playback, surface);
                            }
                            ReplayPolicy::ReverseOnExit => {
                                if state.fired {
                                    scheduler.resume(playback);
                                } else {
                                    state.fired = true;
                                    scheduler.play_from_start(playback, surface);
                                }
                            }
                        }
                    } else if !inside && state.inside {
                        if replay == ReplayPolicy::ReverseOnExit {
                            scheduler.reverse(playback);
                        }
                    }
                    state.inside = inside;
                }
                TriggerKind::Scrub { range } => {
                    // The scrubbed playback never runs on the scheduler
                    // clock; scroll position is its only driver.
                    let progress = range.progress(viewport, bounds);
                    scheduler.seek(playback, progress, surface);
                    state.fired = state.fired || progress > 0.0;
                }
                TriggerKind::Mount | TriggerKind::Hover => {}
            }
        }
    }
}
