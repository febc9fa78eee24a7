//! Folio Animation
//!
//! The motion engine under the portfolio page: authored timelines with
//! stagger expansion, easing curves, spring physics for pointer-driven
//! motion, and a host-ticked scheduler that writes every frame to a
//! [`folio_core::RenderSurface`].
//!
//! # Design
//!
//! - **Authoring vs playback**: a [`Timeline`] is immutable data; each
//!   firing compiles a fresh [`TimelinePlayback`], so replays are exact
//! - **Pure sampling**: a playback's frame is a function of elapsed time,
//!   which makes reverse playback and scrubbing trivially consistent
//! - **Host-driven clock**: nothing advances until the embedding calls
//!   [`AnimationScheduler::tick`] with a frame delta

pub mod easing;
pub mod scheduler;
pub mod spring;
pub mod stagger;
pub mod timeline;
pub mod values;

pub use easing::Easing;
pub use scheduler::{
    AnimationScheduler, ColorTweenId, EndCallback, PlaybackId, SchedulerHandle, SpringId,
};
pub use spring::{Spring, SpringConfig};
pub use stagger::{GridAxis, Stagger};
pub use timeline::{
    Direction, PlaybackEvent, Position, Step, Timeline, TimelineError, TimelinePlayback,
};
pub use values::{ColorTween, Interpolate};
