//! Navigation overlay
//!
//! The overlay's link cascade is not a registry trigger: it is driven
//! directly by the nav channel (open plays, close reverses), so the app
//! shell owns its playback. This module only authors the motion.

use folio_animation::{Easing, Stagger};
use folio_core::Property;
use folio_orchestrator::{Choreography, StepDef};

pub const ROOT: &str = "nav";

/// Staggered link entrance when the overlay opens
pub fn links_choreography() -> Choreography {
    Choreography::new()
        .step(
            StepDef::new(".overlay-panel")
                .from_to(Property::ScaleY, 0.0, 1.0)
                .duration(0.6)
                .ease(Easing::QuintInOut),
        )
        .step(
            StepDef::new(".link")
                .from(Property::TranslateY, 40.0)
                .from(Property::Opacity, 0.0)
                .duration(0.6)
                .ease(Easing::QuartOut)
                .stagger(Stagger::linear(0.1))
                .offset(-0.1),
        )
}
