//! Animation scheduler
//!
//! Owns every running animation and advances them from the host's frame
//! callback. There is no internal clock or thread: the embedding calls
//! [`AnimationScheduler::tick`] with the frame delta and the surface to
//! write into, which keeps the whole engine single-threaded and
//! deterministic under test.
//!
//! Components hold a [`SchedulerHandle`] (a weak reference); when the
//! scheduler is dropped, every handle quietly becomes inert.

use folio_core::{Property, RenderSurface, TargetId};
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, Weak};

use crate::spring::{Spring, SpringConfig};
use crate::timeline::{PlaybackEvent, TimelinePlayback};
use crate::values::ColorTween;

new_key_type! {
    /// Handle to a registered timeline playback
    pub struct PlaybackId;
    /// Handle to a registered spring binding
    pub struct SpringId;
    /// Handle to a registered color tween
    pub struct ColorTweenId;
}

/// Invoked when a playback completes forward or rewinds to the start
pub type EndCallback = Box<dyn FnMut(PlaybackEvent) + Send>;

struct PlaybackEntry {
    playback: TimelinePlayback,
    on_end: Option<EndCallback>,
}

/// A spring whose value is written to one target property every tick
struct SpringBinding {
    spring: Spring,
    target: TargetId,
    property: Property,
}

struct SchedulerInner {
    playbacks: SlotMap<PlaybackId, PlaybackEntry>,
    springs: SlotMap<SpringId, SpringBinding>,
    color_tweens: SlotMap<ColorTweenId, ColorTween>,
}

/// The scheduler that advances all registered animations
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                playbacks: SlotMap::with_key(),
                springs: SlotMap::with_key(),
                color_tweens: SlotMap::with_key(),
            })),
        }
    }

    /// A weak handle for components to register and control animations
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Whether anything is still in motion (host render loops use this to
    /// decide if another frame is needed)
    pub fn has_active(&self) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.playbacks.values().any(|e| e.playback.is_playing())
            || inner.springs.values().any(|s| !s.spring.is_settled())
            || inner.color_tweens.values().any(|t| !t.is_complete())
    }

    /// Advance every animation by `dt` seconds and write the frame
    ///
    /// End callbacks run after the lock is released, so a callback may
    /// register or control animations on this same scheduler.
    pub fn tick(&self, dt: f32, surface: &dyn RenderSurface) {
        let mut fired: Vec<(PlaybackId, EndCallback, PlaybackEvent)> = Vec::new();

        {
            let mut inner = self.inner.lock().unwrap();

            let ids: Vec<PlaybackId> = inner.playbacks.keys().collect();
            for id in ids {
                let Some(entry) = inner.playbacks.get_mut(id) else {
                    continue;
                };
                if let Some(event) = entry.playback.tick(dt, surface) {
                    if let Some(callback) = entry.on_end.take() {
                        fired.push((id, callback, event));
                    }
                }
            }

            for binding in inner.springs.values_mut() {
                if !binding.spring.is_settled() {
                    binding.spring.step(dt);
                    surface.apply(binding.target, binding.property, binding.spring.value());
                }
            }

            for tween in inner.color_tweens.values_mut() {
                tween.step(dt, surface);
            }
        }

        for (id, mut callback, event) in fired {
            callback(event);
            // Re-arm unless the callback removed the playback.
            let mut inner = self.inner.lock().unwrap();
            if let Some(entry) = inner.playbacks.get_mut(id) {
                entry.on_end = Some(callback);
            }
        }
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Weak handle to the scheduler
///
/// All methods are no-ops returning `None`/`false` once the scheduler has
/// been dropped.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    fn with<R>(&self, f: impl FnOnce(&mut SchedulerInner) -> R) -> Option<R> {
        let inner = self.inner.upgrade()?;
        let mut guard = inner.lock().unwrap();
        Some(f(&mut guard))
    }

    // ------------------------------------------------------------------
    // Timeline playbacks
    // ------------------------------------------------------------------

    /// Register a compiled playback; it does not run until started
    pub fn add_playback(&self, playback: TimelinePlayback) -> Option<PlaybackId> {
        self.with(|inner| {
            inner.playbacks.insert(PlaybackEntry {
                playback,
                on_end: None,
            })
        })
    }

    /// Register a playback with a callback invoked when it completes
    /// forward or rewinds back to the start
    pub fn add_playback_with<F>(&self, playback: TimelinePlayback, on_end: F) -> Option<PlaybackId>
    where
        F: FnMut(PlaybackEvent) + Send + 'static,
    {
        self.with(|inner| {
            inner.playbacks.insert(PlaybackEntry {
                playback,
                on_end: Some(Box::new(on_end)),
            })
        })
    }

    pub fn remove_playback(&self, id: PlaybackId) {
        self.with(|inner| {
            inner.playbacks.remove(id);
        });
    }

    /// Start (or restart) a playback from its beginning
    pub fn play_from_start(&self, id: PlaybackId, surface: &dyn RenderSurface) {
        self.with(|inner| {
            if let Some(entry) = inner.playbacks.get_mut(id) {
                entry.playback.play_from_start(surface);
            } else {
                tracing::warn!(?id, "play_from_start on unknown playback");
            }
        });
    }

    /// Reverse a playback from wherever it currently is
    pub fn reverse(&self, id: PlaybackId) {
        self.with(|inner| {
            if let Some(entry) = inner.playbacks.get_mut(id) {
                entry.playback.reverse();
            }
        });
    }

    /// Resume forward playback from the current position
    pub fn resume(&self, id: PlaybackId) {
        self.with(|inner| {
            if let Some(entry) = inner.playbacks.get_mut(id) {
                entry.playback.resume();
            }
        });
    }

    /// Seek a playback to a progress fraction and render it immediately,
    /// leaving it paused (the scrub path)
    pub fn seek(&self, id: PlaybackId, progress: f32, surface: &dyn RenderSurface) {
        self.with(|inner| {
            if let Some(entry) = inner.playbacks.get_mut(id) {
                entry.playback.seek(progress, surface);
            }
        });
    }

    pub fn playback_progress(&self, id: PlaybackId) -> Option<f32> {
        self.with(|inner| inner.playbacks.get(id).map(|e| e.playback.progress()))
            .flatten()
    }

    pub fn is_playback_running(&self, id: PlaybackId) -> bool {
        self.with(|inner| {
            inner
                .playbacks
                .get(id)
                .is_some_and(|e| e.playback.is_playing())
        })
        .unwrap_or(false)
    }

    // ------------------------------------------------------------------
    // Springs
    // ------------------------------------------------------------------

    /// Bind a spring to a target property; its value is written every tick
    /// until the spring settles or is removed
    pub fn add_spring(
        &self,
        target: TargetId,
        property: Property,
        config: SpringConfig,
        initial: f32,
    ) -> Option<SpringId> {
        self.with(|inner| {
            inner.springs.insert(SpringBinding {
                spring: Spring::new(config, initial),
                target,
                property,
            })
        })
    }

    pub fn set_spring_target(&self, id: SpringId, target: f32) {
        self.with(|inner| {
            if let Some(binding) = inner.springs.get_mut(id) {
                binding.spring.set_target(target);
            }
        });
    }

    /// Jump a spring to a value with no motion
    pub fn set_spring_immediate(&self, id: SpringId, value: f32) {
        self.with(|inner| {
            if let Some(binding) = inner.springs.get_mut(id) {
                binding.spring.set_immediate(value);
            }
        });
    }

    pub fn spring_value(&self, id: SpringId) -> Option<f32> {
        self.with(|inner| inner.springs.get(id).map(|b| b.spring.value()))
            .flatten()
    }

    pub fn remove_spring(&self, id: SpringId) {
        self.with(|inner| {
            inner.springs.remove(id);
        });
    }

    // ------------------------------------------------------------------
    // Color tweens
    // ------------------------------------------------------------------

    pub fn add_color_tween(&self, tween: ColorTween) -> Option<ColorTweenId> {
        self.with(|inner| inner.color_tweens.insert(tween))
    }

    /// Redirect a color tween toward a new color from its current value
    pub fn retarget_color(&self, id: ColorTweenId, to: folio_core::Color, duration: f32) {
        self.with(|inner| {
            if let Some(tween) = inner.color_tweens.get_mut(id) {
                tween.retarget(to, duration);
            }
        });
    }

    pub fn remove_color_tween(&self, id: ColorTweenId) {
        self.with(|inner| {
            inner.color_tweens.remove(id);
        });
    }

    /// Whether the scheduler behind this handle is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use crate::timeline::{Step, Timeline};
    use folio_core::{HeadlessSurface, Rect};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn one_element() -> (HeadlessSurface, TargetId) {
        let surface = HeadlessSurface::default();
        let id = surface.add_element("s", ".item", Rect::new(0.0, 0.0, 100.0, 50.0));
        (surface, id)
    }

    fn fade_in(id: TargetId) -> TimelinePlayback {
        let tl = Timeline::new().step(
            Step::new(vec![id])
                .from(Property::Opacity, 0.0)
                .duration(1.0)
                .ease(Easing::Linear),
        );
        TimelinePlayback::new(&tl).unwrap()
    }

    #[test]
    fn test_tick_advances_playback() {
        let (surface, target) = one_element();
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();

        let id = handle.add_playback(fade_in(target)).unwrap();
        handle.play_from_start(id, &surface);

        scheduler.tick(0.5, &surface);
        let mid = surface.value_of(target, Property::Opacity).unwrap();
        assert!((mid - 0.5).abs() < 1e-4);
        assert!(scheduler.has_active());

        scheduler.tick(1.0, &surface);
        assert_eq!(surface.value_of(target, Property::Opacity), Some(1.0));
        assert!(!scheduler.has_active());
    }

    #[test]
    fn test_end_callback_fires_once_per_end() {
        let (surface, target) = one_element();
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();

        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);
        let id = handle
            .add_playback_with(fade_in(target), move |_| {
                count_clone.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();

        handle.play_from_start(id, &surface);
        scheduler.tick(2.0, &surface);
        scheduler.tick(0.1, &surface); // Nothing playing; no second call
        assert_eq!(count.load(Ordering::SeqCst), 1);

        handle.reverse(id);
        scheduler.tick(2.0, &surface);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_end_callback_can_reenter_scheduler() {
        let (surface, target) = one_element();
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();

        let chained = Arc::new(Mutex::new(None::<PlaybackId>));
        let chained_clone = Arc::clone(&chained);
        let reenter = handle.clone();
        let follow_up = fade_in(target);
        let follow_up = Mutex::new(Some(follow_up));

        let id = handle
            .add_playback_with(fade_in(target), move |_| {
                if let Some(pb) = follow_up.lock().unwrap().take() {
                    *chained_clone.lock().unwrap() = reenter.add_playback(pb);
                }
            })
            .unwrap();

        handle.play_from_start(id, &surface);
        scheduler.tick(2.0, &surface);
        assert!(chained.lock().unwrap().is_some());
    }

    #[test]
    fn test_spring_binding_writes_until_settled() {
        let (surface, target) = one_element();
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();

        let spring = handle
            .add_spring(target, Property::TranslateX, SpringConfig::snappy(), 0.0)
            .unwrap();
        handle.set_spring_target(spring, 80.0);

        for _ in 0..500 {
            scheduler.tick(0.008, &surface);
        }
        let x = surface.value_of(target, Property::TranslateX).unwrap();
        assert!((x - 80.0).abs() < 1.0);
        assert!(!scheduler.has_active());
    }

    #[test]
    fn test_handle_inert_after_scheduler_drop() {
        let (surface, target) = one_element();
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();
        drop(scheduler);

        assert!(!handle.is_alive());
        assert!(handle.add_playback(fade_in(target)).is_none());
        handle.play_from_start(PlaybackId::default(), &surface); // No panic
    }

    #[test]
    fn test_seek_does_not_start_playback() {
        let (surface, target) = one_element();
        let scheduler = AnimationScheduler::new();
        let handle = scheduler.handle();

        let id = handle.add_playback(fade_in(target)).unwrap();
        handle.seek(id, 0.25, &surface);
        assert!((surface.value_of(target, Property::Opacity).unwrap() - 0.25).abs() < 1e-4);

        scheduler.tick(1.0, &surface);
        // Still where the seek left it.
        assert!((surface.value_of(target, Property::Opacity).unwrap() - 0.25).abs() < 1e-4);
    }
}
