//! Selected projects rail

use folio_animation::{Easing, Stagger};
use folio_core::Property;
use folio_orchestrator::{
    Choreography, ReplayPolicy, ScrollThreshold, StepDef, TriggerSpec,
};

pub const ROOT: &str = "work";

pub fn triggers() -> Vec<TriggerSpec> {
    // The copy settles once; the card rail keeps reacting to direction.
    let copy = Choreography::new().step(
        StepDef::new(".title-line")
            .from(Property::TranslateYPercent, 100.0)
            .duration(1.0)
            .ease(Easing::QuartOut)
            .stagger(Stagger::linear(0.1)),
    );

    let rail = Choreography::new().step(
        StepDef::new(".card")
            .from(Property::TranslateX, 100.0)
            .from(Property::Opacity, 0.0)
            .duration(1.0)
            .ease(Easing::QuartOut)
            .stagger(Stagger::linear(0.15)),
    );

    vec![
        TriggerSpec::scroll(
            "copy",
            "section",
            ScrollThreshold::top(0.8),
            ReplayPolicy::Once,
            copy,
        ),
        TriggerSpec::scroll(
            "rail",
            "section",
            ScrollThreshold::top(0.8),
            ReplayPolicy::ReverseOnExit,
            rail,
        ),
    ]
}
