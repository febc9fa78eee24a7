//! Trigger authoring
//!
//! Sections describe their motion declaratively: a [`Choreography`] names
//! marker selectors instead of resolved targets, so it can be authored
//! before the section is mounted. The registry lowers it to a concrete
//! [`Timeline`] at activation, when the selectors can be resolved.
//!
//! Authoring mistakes (empty steps, negative durations, non-finite
//! thresholds) are rejected at registration, not discovered mid-scroll.

use folio_animation::{Easing, Stagger, Step, Timeline, TimelineError};
use folio_core::{Property, TargetId};
use thiserror::Error;

use crate::threshold::{ScrollThreshold, ScrubRange};

/// Rejected at [`crate::TriggerRegistry::register`] time
#[derive(Debug, Error)]
pub enum AuthoringError {
    #[error("trigger `{name}`: {source}")]
    Timeline {
        name: String,
        #[source]
        source: TimelineError,
    },
    #[error("trigger `{name}`: threshold is not finite")]
    InvalidThreshold { name: String },
    #[error("section `{section}` already has a trigger named `{name}`")]
    DuplicateTrigger { section: String, name: String },
}

/// What happens when a trigger's condition stops holding, then holds again
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReplayPolicy {
    /// Fire once, ever; later entries do nothing
    #[default]
    Once,
    /// Restart from the beginning on every entry; exits do nothing
    EveryEntry,
    /// Play on entry, reverse from wherever playback is on exit
    ReverseOnExit,
}

/// The condition that drives a trigger
#[derive(Clone, Copy, Debug)]
pub enum TriggerKind {
    /// Fires when the section is activated
    Mount,
    /// Fires when a scroll threshold on the anchor element is crossed
    Scroll {
        enter: ScrollThreshold,
        replay: ReplayPolicy,
    },
    /// Playback progress is bound directly to scroll position
    Scrub { range: ScrubRange },
    /// Plays on pointer enter over the anchor, reverses on leave
    Hover,
}

#[derive(Clone, Copy, Debug)]
enum Op {
    From(f32),
    To(f32),
    FromTo(f32, f32),
    Set(f32),
}

/// One authored step, addressed by selector
#[derive(Clone, Debug)]
pub struct StepDef {
    selector: String,
    ops: Vec<(Property, Op)>,
    duration: f32,
    easing: Easing,
    stagger: Option<Stagger>,
    offset: Option<f32>,
    at: Option<f32>,
}

impl StepDef {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            ops: Vec::new(),
            duration: 0.5,
            easing: Easing::default(),
            stagger: None,
            offset: None,
            at: None,
        }
    }

    pub fn from(mut self, property: Property, value: f32) -> Self {
        self.ops.push((property, Op::From(value)));
        self
    }

    pub fn to(mut self, property: Property, value: f32) -> Self {
        self.ops.push((property, Op::To(value)));
        self
    }

    pub fn from_to(mut self, property: Property, from: f32, to: f32) -> Self {
        self.ops.push((property, Op::FromTo(from, to)));
        self
    }

    pub fn set(mut self, property: Property, value: f32) -> Self {
        self.ops.push((property, Op::Set(value)));
        self
    }

    pub fn duration(mut self, seconds: f32) -> Self {
        self.duration = seconds;
        self
    }

    pub fn ease(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn stagger(mut self, stagger: Stagger) -> Self {
        self.stagger = Some(stagger);
        self
    }

    pub fn offset(mut self, seconds: f32) -> Self {
        self.offset = Some(seconds);
        self
    }

    pub fn at(mut self, seconds: f32) -> Self {
        self.at = Some(seconds);
        self
    }
}

/// A selector-addressed timeline description
#[derive(Clone, Debug, Default)]
pub struct Choreography {
    steps: Vec<StepDef>,
}

impl Choreography {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(mut self, step: StepDef) -> Self {
        self.steps.push(step);
        self
    }

    /// Lower to a concrete timeline, resolving each selector to targets
    pub fn lower(&self, resolve: &mut dyn FnMut(&str) -> Vec<TargetId>) -> Timeline {
        let mut timeline = Timeline::new();
        for def in &self.steps {
            let mut step = Step::new(resolve(&def.selector));
            for &(property, op) in &def.ops {
                step = match op {
                    Op::From(v) => step.from(property, v),
                    Op::To(v) => step.to(property, v),
                    Op::FromTo(a, b) => step.from_to(property, a, b),
                    Op::Set(v) => step.set(property, v),
                };
            }
            step = step.duration(def.duration).ease(def.easing);
            if let Some(stagger) = def.stagger {
                step = step.stagger(stagger);
            }
            if let Some(offset) = def.offset {
                step = step.offset(offset);
            }
            if let Some(at) = def.at {
                step = step.at(at);
            }
            timeline = timeline.step(step);
        }
        timeline
    }

    /// Authoring validity, independent of what the selectors resolve to
    pub fn validate(&self) -> Result<(), TimelineError> {
        // Lower against a placeholder target: validation only looks at
        // structure and timing, never at targets.
        self.lower(&mut |_| vec![TargetId::default()]).validate()
    }
}

/// A fully authored trigger: condition plus choreography
#[derive(Clone, Debug)]
pub struct TriggerSpec {
    pub name: String,
    /// Selector for the element whose bounds drive threshold evaluation
    /// (and hover hit-testing); resolved inside the section root
    pub anchor: String,
    pub kind: TriggerKind,
    pub choreography: Choreography,
}

impl TriggerSpec {
    pub fn mount(name: impl Into<String>, choreography: Choreography) -> Self {
        Self {
            name: name.into(),
            anchor: String::new(),
            kind: TriggerKind::Mount,
            choreography,
        }
    }

    pub fn scroll(
        name: impl Into<String>,
        anchor: impl Into<String>,
        enter: ScrollThreshold,
        replay: ReplayPolicy,
        choreography: Choreography,
    ) -> Self {
        Self {
            name: name.into(),
            anchor: anchor.into(),
            kind: TriggerKind::Scroll { enter, replay },
            choreography,
        }
    }

    pub fn scrub(
        name: impl Into<String>,
        anchor: impl Into<String>,
        range: ScrubRange,
        choreography: Choreography,
    ) -> Self {
        Self {
            name: name.into(),
            anchor: anchor.into(),
            kind: TriggerKind::Scrub { range },
            choreography,
        }
    }

    pub fn hover(
        name: impl Into<String>,
        anchor: impl Into<String>,
        choreography: Choreography,
    ) -> Self {
        Self {
            name: name.into(),
            anchor: anchor.into(),
            kind: TriggerKind::Hover,
            choreography,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), AuthoringError> {
        self.choreography
            .validate()
            .map_err(|source| AuthoringError::Timeline {
                name: self.name.clone(),
                source,
            })?;
        let finite = match self.kind {
            TriggerKind::Mount | TriggerKind::Hover => true,
            TriggerKind::Scroll { enter, .. } => enter.is_finite(),
            TriggerKind::Scrub { range } => range.is_finite(),
        };
        if !finite {
            return Err(AuthoringError::InvalidThreshold {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_choreography_rejected() {
        let spec = TriggerSpec::mount("intro", Choreography::new());
        assert!(matches!(
            spec.validate(),
            Err(AuthoringError::Timeline { .. })
        ));
    }

    #[test]
    fn test_negative_duration_rejected() {
        let choreo = Choreography::new()
            .step(StepDef::new(".line").from(Property::Opacity, 0.0).duration(-2.0));
        let spec = TriggerSpec::mount("intro", choreo);
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_non_finite_threshold_rejected() {
        let choreo =
            Choreography::new().step(StepDef::new(".line").from(Property::Opacity, 0.0));
        let spec = TriggerSpec::scroll(
            "enter",
            "section",
            ScrollThreshold::top(f32::NAN),
            ReplayPolicy::Once,
            choreo,
        );
        assert!(matches!(
            spec.validate(),
            Err(AuthoringError::InvalidThreshold { .. })
        ));
    }

    #[test]
    fn test_lowering_preserves_step_order() {
        let choreo = Choreography::new()
            .step(StepDef::new(".a").from(Property::Opacity, 0.0).duration(1.0))
            .step(
                StepDef::new(".b")
                    .from(Property::Opacity, 0.0)
                    .duration(1.0)
                    .offset(-0.5),
            );
        let timeline = choreo.lower(&mut |_| vec![TargetId::default()]);
        let playback = folio_animation::TimelinePlayback::new(&timeline).unwrap();
        // Two overlapping one-second steps: 1.0 + (1.0 - 0.5).
        assert!((playback.duration() - 1.5).abs() < 1e-6);
    }
}
