//! Experience timeline
//!
//! Two triggers: the blocks animate in on a threshold, and the vertical
//! timeline rule draws itself scrubbed to scroll between the list's top
//! and bottom passing the 70% viewport line.

use folio_animation::{Easing, Stagger};
use folio_core::Property;
use folio_orchestrator::{
    Choreography, ReplayPolicy, ScrollThreshold, ScrubRange, StepDef, TriggerSpec,
};

pub const ROOT: &str = "exp";

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
            StepDef::new(".block")
                .from(Property::Opacity, 0.0)
                .from(Property::TranslateX, 40.0)
                .duration(0.9)
                .ease(Easing::CubicOut)
                .stagger(Stagger::linear(0.15))
                .offset(-0.4),
        );

    let line_draw = Choreography::new().step(
        StepDef::new(".line")
            .from_to(Property::ScaleY, 0.0, 1.0)
            .duration(1.0)
            .ease(Easing::Linear),
    );

    vec![
        TriggerSpec::scroll(
            "enter",
            "section",
            ScrollThreshold::top(0.8),
            ReplayPolicy::ReverseOnExit,
            entrance,
        ),
        TriggerSpec::scrub(
            "line-draw",
            ".list",
            ScrubRange::new(ScrollThreshold::top(0.7), ScrollThreshold::bottom(0.7)),
            line_draw,
        ),
    ]
}
