//! Folio Orchestrator
//!
//! The layer that decides *when* motion happens: per-section trigger
//! registries with replay policies, scroll-threshold and scrub evaluation,
//! the full-screen wipe that hides anchor jumps, and the custom cursor
//! controller.
//!
//! Sections author [`TriggerSpec`]s declaratively against marker selectors;
//! the registry resolves them at activation and drives playbacks on the
//! shared [`folio_animation::AnimationScheduler`].

pub mod cursor;
pub mod registry;
pub mod threshold;
pub mod transition;
pub mod trigger;

pub use cursor::{CursorController, CursorTheme};
pub use registry::TriggerRegistry;
pub use threshold::{ScrollThreshold, ScrubRange};
pub use transition::{WipePhase, WipeTransition};
pub use trigger::{AuthoringError, Choreography, ReplayPolicy, StepDef, TriggerKind, TriggerSpec};
