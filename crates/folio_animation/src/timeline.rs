//! Timeline authoring and playback
//!
//! A [`Timeline`] is the authored description of one choreographed entrance:
//! an ordered list of [`Step`]s, each tweening one or more properties across
//! a resolved target list, optionally staggered, optionally overlapping the
//! previous step through a position offset.
//!
//! Authoring and playback are split. The `Timeline` is immutable data owned
//! by a trigger; firing compiles it into a [`TimelinePlayback`] whose frame
//! is a pure function of elapsed time, so replays, reversal, and scrubbing
//! all render consistently.
//!
//! ```ignore
//! let tl = Timeline::new()
//!     .step(
//!         Step::new(lines)
//!             .from(Property::TranslateYPercent, 100.0)
//!             .from(Property::SkewY, 7.0)
//!             .duration(1.1)
//!             .ease(Easing::QuartOut)
//!             .stagger(Stagger::linear(0.12)),
//!     )
//!     .step(
//!         Step::new(cta)
//!             .from(Property::Opacity, 0.0)
//!             .duration(0.8)
//!             .offset(-0.4),
//!     );
//! ```

use folio_core::{Property, RenderSurface, TargetId};
use smallvec::SmallVec;
use thiserror::Error;

use crate::easing::Easing;
use crate::stagger::Stagger;

/// Authoring mistakes caught when a timeline is compiled
#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("timeline has no steps")]
    Empty,
    #[error("step {index} declares no property tweens")]
    NoTweens { index: usize },
    #[error("step {index} has invalid duration {duration}")]
    InvalidDuration { index: usize, duration: f32 },
    #[error("step {index} has invalid stagger interval")]
    InvalidStagger { index: usize },
    #[error("step {index} has non-finite position")]
    InvalidPosition { index: usize },
}

/// How one property of a step tweens
#[derive(Clone, Copy, Debug, PartialEq)]
enum TweenKind {
    /// Start at the authored value, end at the property's resting default.
    /// The start value renders immediately, so content is visibly in its
    /// pre-entrance state the moment playback begins.
    From(f32),
    /// Start at whatever is currently rendered, end at the authored value
    To(f32),
    /// Both endpoints authored; start value renders immediately
    FromTo(f32, f32),
    /// Instantaneous write at the step's start time
    Set(f32),
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    property: Property,
    kind: TweenKind,
}

/// Where a step sits relative to the timeline built so far
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Position {
    /// After the end of everything before it
    #[default]
    Sequence,
    /// Relative to the end of everything before it; negative overlaps
    Offset(f32),
    /// Absolute time from the timeline start
    At(f32),
}

/// One authored step of a timeline
#[derive(Clone, Debug)]
pub struct Step {
    targets: Vec<TargetId>,
    tweens: SmallVec<[Tween; 2]>,
    duration: f32,
    easing: Easing,
    stagger: Option<Stagger>,
    position: Position,
}

impl Step {
    pub fn new(targets: impl Into<Vec<TargetId>>) -> Self {
        Self {
            targets: targets.into(),
            tweens: SmallVec::new(),
            duration: 0.5,
            easing: Easing::default(),
            stagger: None,
            position: Position::Sequence,
        }
    }

    /// Tween a property from `value` back to its resting default
    pub fn from(mut self, property: Property, value: f32) -> Self {
        self.tweens.push(Tween {
            property,
            kind: TweenKind::From(value),
        });
        self
    }

    /// Tween a property from its current rendered value to `value`
    pub fn to(mut self, property: Property, value: f32) -> Self {
        self.tweens.push(Tween {
            property,
            kind: TweenKind::To(value),
        });
        self
    }

    /// Tween a property between two authored values
    pub fn from_to(mut self, property: Property, from: f32, to: f32) -> Self {
        self.tweens.push(Tween {
            property,
            kind: TweenKind::FromTo(from, to),
        });
        self
    }

    /// Write a property instantly at this step's start time
    pub fn set(mut self, property: Property, value: f32) -> Self {
        self.tweens.push(Tween {
            property,
            kind: TweenKind::Set(value),
        });
        self
    }

    /// Per-target duration in seconds
    pub fn duration(mut self, seconds: f32) -> Self {
        self.duration = seconds;
        self
    }

    pub fn ease(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Fan this step across its targets with per-target delays
    pub fn stagger(mut self, stagger: Stagger) -> Self {
        self.stagger = Some(stagger);
        self
    }

    /// Overlap (negative) or gap (positive) against the previous content
    pub fn offset(mut self, seconds: f32) -> Self {
        self.position = Position::Offset(seconds);
        self
    }

    /// Place at an absolute time from the timeline start
    pub fn at(mut self, seconds: f32) -> Self {
        self.position = Position::At(seconds);
        self
    }
}

/// An authored, immutable timeline
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    steps: Vec<Step>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Validate authoring without compiling against a surface
    pub fn validate(&self) -> Result<(), TimelineError> {
        if self.steps.is_empty() {
            return Err(TimelineError::Empty);
        }
        for (index, step) in self.steps.iter().enumerate() {
            if step.tweens.is_empty() {
                return Err(TimelineError::NoTweens { index });
            }
            if !step.duration.is_finite() || step.duration < 0.0 {
                return Err(TimelineError::InvalidDuration {
                    index,
                    duration: step.duration,
                });
            }
            if let Some(stagger) = step.stagger {
                let each = match stagger {
                    Stagger::Linear { each } | Stagger::Grid { each, .. } => each,
                };
                if !each.is_finite() || each < 0.0 {
                    return Err(TimelineError::InvalidStagger { index });
                }
            }
            match step.position {
                Position::Offset(v) | Position::At(v) if !v.is_finite() => {
                    return Err(TimelineError::InvalidPosition { index });
                }
                _ => {}
            }
        }
        Ok(())
    }
}

// ============================================================================
// Compiled playback
// ============================================================================

/// One target/property tween with resolved endpoints and absolute timing
#[derive(Clone, Copy, Debug)]
struct Segment {
    target: TargetId,
    property: Property,
    from: f32,
    to: f32,
    start: f32,
    duration: f32,
    easing: Easing,
    /// Whether `from` renders before the segment's start time (from-style
    /// tweens show their pre-entrance state the moment playback begins)
    render_before_start: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// Emitted by [`TimelinePlayback::tick`] when playback reaches an end
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// Forward playback reached the end
    Completed,
    /// Reverse playback returned to the start
    Rewound,
}

/// A timeline compiled against a surface's current state and playing on it
///
/// Sampling is a pure function of elapsed time, so playback can run forward,
/// run in reverse, or be seeked arbitrarily (scrubbing) and always produces
/// the same frame for the same time.
pub struct TimelinePlayback {
    segments: Vec<Segment>,
    duration: f32,
    elapsed: f32,
    direction: Direction,
    playing: bool,
}

impl TimelinePlayback {
    /// Compile a timeline into absolute-time segments
    pub fn new(timeline: &Timeline) -> Result<Self, TimelineError> {
        timeline.validate()?;

        let mut segments = Vec::new();
        let mut cursor_end = 0.0_f32;

        for (index, step) in timeline.steps.iter().enumerate() {
            if step.targets.is_empty() {
                // Tolerated: optional content may not be mounted.
                tracing::debug!(step = index, "timeline step resolved no targets; skipped");
                continue;
            }

            let step_start = match step.position {
                Position::Sequence => cursor_end,
                Position::Offset(offset) => (cursor_end + offset).max(0.0),
                Position::At(at) => at.max(0.0),
            };

            let count = step.targets.len();
            for (i, &target) in step.targets.iter().enumerate() {
                let delay = step
                    .stagger
                    .map(|s| s.delay_for_index(i, count))
                    .unwrap_or(0.0);
                let start = step_start + delay;

                for tween in &step.tweens {
                    let (from, to, duration, render_before_start) = match tween.kind {
                        TweenKind::From(v) => {
                            (v, tween.property.resting_default(), step.duration, true)
                        }
                        // The surface has no value read-back; a to-tween on
                        // untouched content starts from the resting default.
                        TweenKind::To(v) => {
                            (tween.property.resting_default(), v, step.duration, false)
                        }
                        TweenKind::FromTo(a, b) => (a, b, step.duration, true),
                        TweenKind::Set(v) => (v, v, 0.0, false),
                    };
                    segments.push(Segment {
                        target,
                        property: tween.property,
                        from,
                        to,
                        start,
                        duration,
                        easing: step.easing,
                        render_before_start,
                    });
                }
            }

            let group = step
                .stagger
                .map(|s| s.group_duration(count, step.duration))
                .unwrap_or(step.duration);
            cursor_end = cursor_end.max(step_start + group);
        }

        let duration = segments
            .iter()
            .map(|s| s.start + s.duration)
            .fold(0.0_f32, f32::max);

        Ok(Self {
            segments,
            duration,
            elapsed: 0.0,
            direction: Direction::Forward,
            playing: false,
        })
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Elapsed time as a fraction of the total duration
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Start (or restart) forward playback from the beginning, rendering
    /// the first frame immediately so pre-entrance states apply now
    pub fn play_from_start(&mut self, surface: &dyn RenderSurface) {
        self.elapsed = 0.0;
        self.direction = Direction::Forward;
        self.playing = true;
        self.sample(surface);
    }

    /// Reverse from the current position back toward the start
    pub fn reverse(&mut self) {
        self.direction = Direction::Reverse;
        self.playing = self.elapsed > 0.0;
    }

    /// Resume forward from the current position
    pub fn resume(&mut self) {
        self.direction = Direction::Forward;
        self.playing = self.elapsed < self.duration;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Jump to a progress fraction, render it, and pause there
    ///
    /// This is the scrub path: the evaluator owns the clock, not the
    /// scheduler.
    pub fn seek(&mut self, progress: f32, surface: &dyn RenderSurface) {
        self.elapsed = self.duration * progress.clamp(0.0, 1.0);
        self.playing = false;
        self.sample(surface);
    }

    /// Advance by `dt` seconds and render the resulting frame
    pub fn tick(&mut self, dt: f32, surface: &dyn RenderSurface) -> Option<PlaybackEvent> {
        if !self.playing {
            return None;
        }

        let event = match self.direction {
            Direction::Forward => {
                self.elapsed = (self.elapsed + dt).min(self.duration);
                (self.elapsed >= self.duration).then_some(PlaybackEvent::Completed)
            }
            Direction::Reverse => {
                self.elapsed = (self.elapsed - dt).max(0.0);
                (self.elapsed <= 0.0).then_some(PlaybackEvent::Rewound)
            }
        };

        self.sample(surface);
        if event.is_some() {
            self.playing = false;
        }
        event
    }

    /// Render the frame at the current elapsed time
    ///
    /// Segments apply in authoring order, so a later step writing the same
    /// property wins, matching how the timeline was written.
    fn sample(&self, surface: &dyn RenderSurface) {
        let t = self.elapsed;
        for seg in &self.segments {
            if t < seg.start {
                if seg.render_before_start {
                    surface.apply(seg.target, seg.property, seg.from);
                }
            } else if seg.duration <= 0.0 || t >= seg.start + seg.duration {
                surface.apply(seg.target, seg.property, seg.to);
            } else {
                let local = (t - seg.start) / seg.duration;
                let eased = seg.easing.apply(local);
                let value = seg.from + (seg.to - seg.from) * eased;
                surface.apply(seg.target, seg.property, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{HeadlessSurface, Rect};

    fn surface_with(n: usize) -> (HeadlessSurface, Vec<TargetId>) {
        let surface = HeadlessSurface::default();
        let ids = (0..n)
            .map(|i| {
                surface.add_element("s", ".item", Rect::new(0.0, i as f32 * 40.0, 100.0, 30.0))
            })
            .collect();
        (surface, ids)
    }

    #[test]
    fn test_validation_rejects_empty_timeline() {
        assert!(matches!(
            Timeline::new().validate(),
            Err(TimelineError::Empty)
        ));
    }

    #[test]
    fn test_validation_rejects_bad_duration() {
        let (_, ids) = surface_with(1);
        let tl = Timeline::new().step(Step::new(ids).from(Property::Opacity, 0.0).duration(-1.0));
        assert!(matches!(
            tl.validate(),
            Err(TimelineError::InvalidDuration { index: 0, .. })
        ));
    }

    #[test]
    fn test_validation_rejects_step_without_tweens() {
        let (_, ids) = surface_with(1);
        let tl = Timeline::new().step(Step::new(ids).duration(1.0));
        assert!(matches!(
            tl.validate(),
            Err(TimelineError::NoTweens { index: 0 })
        ));
    }

    #[test]
    fn test_from_tween_renders_hidden_state_on_play() {
        let (surface, ids) = surface_with(1);
        let tl = Timeline::new().step(
            Step::new(ids.clone())
                .from(Property::Opacity, 0.0)
                .duration(1.0),
        );
        let mut playback = TimelinePlayback::new(&tl).unwrap();

        playback.play_from_start(&surface);
        assert_eq!(surface.value_of(ids[0], Property::Opacity), Some(0.0));

        // Runs to completion at the resting default.
        let event = playback.tick(1.0, &surface);
        assert_eq!(event, Some(PlaybackEvent::Completed));
        assert_eq!(surface.value_of(ids[0], Property::Opacity), Some(1.0));
    }

    #[test]
    fn test_staggered_later_targets_hidden_at_start() {
        let (surface, ids) = surface_with(3);
        let tl = Timeline::new().step(
            Step::new(ids.clone())
                .from(Property::TranslateYPercent, 100.0)
                .duration(0.5)
                .stagger(Stagger::linear(0.2)),
        );
        let mut playback = TimelinePlayback::new(&tl).unwrap();
        playback.play_from_start(&surface);

        // Last target starts at 0.4s but already shows its offset state.
        assert_eq!(
            surface.value_of(ids[2], Property::TranslateYPercent),
            Some(100.0)
        );

        // Group duration: (3-1)*0.2 + 0.5
        assert!((playback.duration() - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_stagger_ordering_monotone() {
        let (surface, ids) = surface_with(4);
        let tl = Timeline::new().step(
            Step::new(ids.clone())
                .from(Property::Opacity, 0.0)
                .duration(0.5)
                .stagger(Stagger::linear(0.1)),
        );
        let mut playback = TimelinePlayback::new(&tl).unwrap();
        playback.play_from_start(&surface);
        playback.tick(0.25, &surface);

        // Earlier targets are further along at any mid-flight instant.
        let values: Vec<f32> = ids
            .iter()
            .map(|&id| surface.value_of(id, Property::Opacity).unwrap())
            .collect();
        for pair in values.windows(2) {
            assert!(pair[0] >= pair[1], "earlier target behind later: {values:?}");
        }
    }

    #[test]
    fn test_negative_offset_overlaps() {
        let (surface, ids) = surface_with(2);
        let tl = Timeline::new()
            .step(
                Step::new(vec![ids[0]])
                    .from(Property::Opacity, 0.0)
                    .duration(1.0),
            )
            .step(
                Step::new(vec![ids[1]])
                    .from(Property::Opacity, 0.0)
                    .duration(1.0)
                    .offset(-0.4),
            );
        let playback = TimelinePlayback::new(&tl).unwrap();
        // Second step starts at 0.6, ends at 1.6.
        assert!((playback.duration() - 1.6).abs() < 1e-6);
    }

    #[test]
    fn test_reverse_returns_to_hidden_state() {
        let (surface, ids) = surface_with(1);
        let tl = Timeline::new().step(
            Step::new(ids.clone())
                .from(Property::Opacity, 0.0)
                .duration(1.0),
        );
        let mut playback = TimelinePlayback::new(&tl).unwrap();
        playback.play_from_start(&surface);
        playback.tick(1.0, &surface);
        assert_eq!(surface.value_of(ids[0], Property::Opacity), Some(1.0));

        playback.reverse();
        let event = playback.tick(1.0, &surface);
        assert_eq!(event, Some(PlaybackEvent::Rewound));
        assert_eq!(surface.value_of(ids[0], Property::Opacity), Some(0.0));
    }

    #[test]
    fn test_seek_is_deterministic() {
        let (surface, ids) = surface_with(2);
        let tl = Timeline::new().step(
            Step::new(ids.clone())
                .from(Property::ScaleY, 0.0)
                .duration(1.0)
                .stagger(Stagger::linear(0.3)),
        );
        let mut playback = TimelinePlayback::new(&tl).unwrap();

        playback.seek(0.5, &surface);
        let a = surface.value_of(ids[0], Property::ScaleY);
        playback.seek(1.0, &surface);
        playback.seek(0.5, &surface);
        let b = surface.value_of(ids[0], Property::ScaleY);
        assert_eq!(a, b);
        assert!(!playback.is_playing());
    }

    #[test]
    fn test_set_step_fires_at_its_time() {
        let (surface, ids) = surface_with(1);
        let tl = Timeline::new()
            .step(
                Step::new(ids.clone())
                    .from(Property::Opacity, 0.0)
                    .duration(0.5),
            )
            .step(Step::new(ids.clone()).set(Property::Visibility, 0.0));
        let mut playback = TimelinePlayback::new(&tl).unwrap();
        playback.play_from_start(&surface);

        // Before 0.5s the set has not applied.
        assert_eq!(surface.value_of(ids[0], Property::Visibility), None);
        playback.tick(0.6, &surface);
        assert_eq!(surface.value_of(ids[0], Property::Visibility), Some(0.0));
    }

    #[test]
    fn test_empty_target_step_skipped() {
        let (surface, ids) = surface_with(1);
        let tl = Timeline::new()
            .step(
                Step::new(Vec::new())
                    .from(Property::Opacity, 0.0)
                    .duration(2.0),
            )
            .step(
                Step::new(ids)
                    .from(Property::Opacity, 0.0)
                    .duration(0.5),
            );
        let playback = TimelinePlayback::new(&tl).unwrap();
        assert!((playback.duration() - 0.5).abs() < 1e-6);
    }
}
