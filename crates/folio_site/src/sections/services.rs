//! Services grid

use folio_animation::{Easing, Stagger};
use folio_core::Property;
use folio_orchestrator::{
    Choreography, ReplayPolicy, ScrollThreshold, StepDef, TriggerSpec,
};

pub const ROOT: &str = "services";

pub fn triggers() -> Vec<TriggerSpec> {
    let entrance = Choreography::new()
        .step(
            StepDef::new(".title-line")
                .from(Property::TranslateY, 40.0)
                .from(Property::Opacity, 0.0)
                .duration(0.9)
                .ease(Easing::QuartOut)
                .stagger(Stagger::linear(0.1)),
        )
        .step(
            StepDef::new(".card")
                .from(Property::TranslateY, 60.0)
                .from(Property::Opacity, 0.0)
                .duration(0.8)
                .ease(Easing::CubicOut)
                .stagger(Stagger::linear(0.15))
                .offset(-0.5),
        );

    let card_hover = Choreography::new().step(
        StepDef::new(".card-glow")
            .from_to(Property::Opacity, 0.0, 1.0)
            .duration(0.3)
            .ease(Easing::CubicOut),
    );

    vec![
        TriggerSpec::scroll(
            "enter",
            "section",
            ScrollThreshold::top(0.8),
            ReplayPolicy::ReverseOnExit,
            entrance,
        ),
        TriggerSpec::hover("card-hover", ".card", card_hover),
    ]
}
