//! Case-study rows ("proof over claims")

use folio_animation::{Easing, Stagger};
use folio_core::Property;
use folio_orchestrator::{
    Choreography, ReplayPolicy, ScrollThreshold, StepDef, TriggerSpec,
};

pub const ROOT: &str = "proof";

pub fn triggers() -> Vec<TriggerSpec> {
    let entrance = Choreography::new()
        .step(
            StepDef::new(".heading")
                .from(Property::Opacity, 0.0)
                .from(Property::TranslateY, 30.0)
                .duration(0.9)
                .ease(Easing::QuartOut),
        )
        .step(
            StepDef::new(".row")
                .from(Property::Opacity, 0.0)
                .from(Property::TranslateY, 40.0)
                .duration(0.9)
                .ease(Easing::CubicOut)
                .stagger(Stagger::linear(0.12))
                .offset(-0.4),
        );

    vec![TriggerSpec::scroll(
        "enter",
        "section",
        ScrollThreshold::top(0.85),
        ReplayPolicy::Once,
        entrance,
    )]
}
