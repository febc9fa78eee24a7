//! Hero entrance
//!
//! The heaviest timeline on the page: background glyph, masthead, masked
//! headline lines, then the CTA rules and labels, all overlapping into one
//! continuous sweep.

use folio_animation::{Easing, Stagger};
use folio_core::Property;
use folio_orchestrator::{Choreography, StepDef, TriggerSpec};

pub const ROOT: &str = "hero";

pub fn triggers() -> Vec<TriggerSpec> {
    let entrance = Choreography::new()
        .step(
            StepDef::new(".glyph")
                .from(Property::Scale, 1.15)
                .from(Property::Opacity, 0.0)
                .duration(2.5)
                .ease(Easing::ExpoOut),
        )
        .step(
            StepDef::new(".masthead")
                .from(Property::TranslateY, -30.0)
                .from(Property::Opacity, 0.0)
                .duration(1.0)
                .ease(Easing::QuartOut)
                .at(0.2),
        )
        // Masked line reveal: each headline line slides up out of its
        // clipping span while the skew settles.
        .step(
            StepDef::new(".line-inner")
                .from(Property::TranslateYPercent, 100.0)
                .from(Property::SkewY, 7.0)
                .duration(1.8)
                .ease(Easing::ExpoOut)
                .stagger(Stagger::linear(0.12))
                .offset(-1.4),
        )
        .step(
            StepDef::new(".cta-line")
                .from_to(Property::ScaleX, 0.0, 1.0)
                .duration(0.9)
                .ease(Easing::CubicOut)
                .stagger(Stagger::linear(0.1))
                .offset(-0.8),
        )
        .step(
            StepDef::new(".cta-text")
                .from(Property::Opacity, 0.0)
                .from(Property::TranslateY, 16.0)
                .duration(0.8)
                .ease(Easing::CubicOut)
                .stagger(Stagger::linear(0.1))
                .offset(-1.0),
        )
        .step(
            StepDef::new(".paragraph")
                .from(Property::Opacity, 0.0)
                .from(Property::TranslateY, 24.0)
                .duration(1.0)
                .ease(Easing::CubicOut)
                .offset(-1.2),
        );

    vec![TriggerSpec::mount("entrance", entrance)]
}
