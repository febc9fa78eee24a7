//! Contact section
//!
//! Fires a little before the section bottom enters the viewport, and only
//! once: the sign-off should not replay if the visitor bounces around the
//! end of the page.

use folio_animation::{Easing, Stagger};
use folio_core::Property;
use folio_orchestrator::{
    Choreography, ReplayPolicy, ScrollThreshold, StepDef, TriggerSpec,
};

pub const ROOT: &str = "contact";

pub fn triggers() -> Vec<TriggerSpec> {
    let entrance = Choreography::new()
        .step(
            StepDef::new(".headline-line")
                .from(Property::TranslateYPercent, 100.0)
                .from(Property::SkewY, 4.0)
                .duration(1.1)
                .ease(Easing::QuartOut)
                .stagger(Stagger::linear(0.12)),
        )
        .step(
            StepDef::new(".cta")
                .from(Property::Opacity, 0.0)
                .from(Property::TranslateY, 20.0)
                .duration(0.8)
                .ease(Easing::CubicOut)
                .stagger(Stagger::linear(0.08))
                .offset(-0.2),
        )
        .step(
            StepDef::new(".social")
                .from(Property::Opacity, 0.0)
                .duration(0.6)
                .ease(Easing::CubicOut)
                .stagger(Stagger::linear(0.08))
                .offset(-0.2),
        );

    // The CTA arrow nudges right while hovered.
    let arrow = Choreography::new().step(
        StepDef::new(".arrow")
            .from_to(Property::TranslateX, 0.0, 6.0)
            .duration(0.3)
            .ease(Easing::CubicOut),
    );

    vec![
        TriggerSpec::scroll(
            "enter",
            "section",
            ScrollThreshold::top(1.0).offset_px(-100.0),
            ReplayPolicy::Once,
            entrance,
        ),
        TriggerSpec::hover("cta-arrow", ".cta", arrow),
    ]
}
