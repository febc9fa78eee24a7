//! Section choreography
//!
//! One module per page section. Each exposes its root name, the marker
//! selectors its markup carries, and the triggers that animate it. The
//! timings here are the authored design values; everything mechanical
//! (stagger expansion, thresholds, replay) lives in the orchestrator.

pub mod contact;
pub mod experience;
pub mod hero;
pub mod intro;
pub mod navigation;
pub mod proof;
pub mod projects;
pub mod services;
pub mod skills;

use folio_orchestrator::TriggerSpec;

/// Every scrolling section's (root, triggers) in page order
pub fn all() -> Vec<(&'static str, Vec<TriggerSpec>)> {
    vec![
        (intro::ROOT, intro::triggers()),
        (hero::ROOT, hero::triggers()),
        (services::ROOT, services::triggers()),
        (proof::ROOT, proof::triggers()),
        (projects::ROOT, projects::triggers()),
        (experience::ROOT, experience::triggers()),
        (skills::ROOT, skills::triggers()),
        (contact::ROOT, contact::triggers()),
    ]
}
