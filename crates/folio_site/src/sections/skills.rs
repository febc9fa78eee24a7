//! Skill domains

use folio_animation::{Easing, Stagger};
use folio_core::Property;
use folio_orchestrator::{
    Choreography, ReplayPolicy, ScrollThreshold, StepDef, TriggerSpec,
};

pub const ROOT: &str = "skills";

pub fn triggers() -> Vec<TriggerSpec> {
    let entrance = Choreography::new()
        .step(
            StepDef::new(".heading")
                .from(Property::TranslateYPercent, 100.0)
                .duration(1.0)
                .ease(Easing::QuartOut),
        )
        .step(
            StepDef::new(".domain")
                .from(Property::Opacity, 0.0)
                .from(Property::TranslateY, 40.0)
                .duration(0.8)
                .ease(Easing::CubicOut)
                .stagger(Stagger::linear(0.15))
                .offset(-0.5),
        );

    vec![TriggerSpec::scroll(
        "enter",
        "section",
        ScrollThreshold::top(0.85),
        ReplayPolicy::Once,
        entrance,
    )]
}
