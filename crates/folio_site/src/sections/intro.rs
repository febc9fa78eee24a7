//! First-load intro wipe
//!
//! A 2x5 grid of bricks covers the page and collapses column by column,
//! left to right, revealing the hero underneath. Runs exactly once, on
//! activation.

use folio_animation::{Easing, GridAxis, Stagger};
use folio_core::Property;
use folio_orchestrator::{Choreography, StepDef, TriggerSpec};

pub const ROOT: &str = "intro";

pub const BRICK_ROWS: usize = 2;
pub const BRICK_COLS: usize = 5;

pub fn triggers() -> Vec<TriggerSpec> {
    let reveal = Choreography::new()
        .step(
            StepDef::new(".brick")
                .from_to(Property::ScaleY, 1.0, 0.0)
                .duration(1.0)
                .ease(Easing::QuartInOut)
                .stagger(Stagger::grid(0.08, BRICK_ROWS, BRICK_COLS, GridAxis::X)),
        )
        // Drop the overlay out of the way once every brick is gone.
        .step(StepDef::new(".overlay").set(Property::Visibility, 0.0));

    vec![TriggerSpec::mount("reveal", reveal)]
}
