//! Headless page layout
//!
//! Mounts the full page onto a [`HeadlessSurface`] with representative
//! document-space geometry: every marker element the section choreography
//! addresses, sized and stacked the way the real page lays out. Used by
//! the walkthrough example and the integration tests.

use std::sync::Arc;

use folio_core::{HeadlessSurface, Rect, Viewport};

use crate::content;
use crate::sections::intro::{BRICK_COLS, BRICK_ROWS};

const PAGE_WIDTH: f32 = 1440.0;
const VIEW_HEIGHT: f32 = 900.0;
const SECTION_HEIGHT: f32 = 900.0;

/// Section vertical origins, in page order
pub const HERO_Y: f32 = 0.0;
pub const SERVICES_Y: f32 = SECTION_HEIGHT;
pub const PROOF_Y: f32 = 2.0 * SECTION_HEIGHT;
pub const WORK_Y: f32 = 3.0 * SECTION_HEIGHT;
pub const EXP_Y: f32 = 4.0 * SECTION_HEIGHT;
pub const SKILLS_Y: f32 = 5.0 * SECTION_HEIGHT;
pub const CONTACT_Y: f32 = 6.0 * SECTION_HEIGHT;
pub const CONTENT_HEIGHT: f32 = 7.0 * SECTION_HEIGHT;

fn section(y: f32) -> Rect {
    Rect::new(0.0, y, PAGE_WIDTH, SECTION_HEIGHT)
}

fn row(y: f32, index: usize, height: f32) -> Rect {
    Rect::new(0.0, y + 120.0 + index as f32 * (height + 24.0), PAGE_WIDTH, height)
}

/// Build the page
pub fn build() -> Arc<HeadlessSurface> {
    let surface = Arc::new(HeadlessSurface::new(Viewport {
        width: PAGE_WIDTH,
        height: VIEW_HEIGHT,
        scroll_y: 0.0,
        content_height: CONTENT_HEIGHT,
    }));

    // Fixed chrome: navbar, overlay, cursor, wipe columns.
    surface.add_element("nav", ".bar", Rect::new(0.0, 0.0, PAGE_WIDTH, 72.0));
    surface.add_element("nav", ".overlay-panel", Rect::new(0.0, 0.0, PAGE_WIDTH, VIEW_HEIGHT));
    for (i, _) in content::NAV_LINKS.iter().enumerate() {
        surface.add_element("nav", ".link", row(120.0, i, 72.0));
    }
    surface.add_element("cursor", ".dot", Rect::new(0.0, 0.0, 8.0, 8.0));
    surface.add_element("cursor", ".ring", Rect::new(0.0, 0.0, 36.0, 36.0));
    for i in 0..4 {
        surface.add_element(
            "wipe",
            ".panel",
            Rect::new(i as f32 * PAGE_WIDTH / 4.0, 0.0, PAGE_WIDTH / 4.0, VIEW_HEIGHT),
        );
    }

    // Intro brick grid, row-major.
    surface.add_element("intro", ".overlay", Rect::new(0.0, 0.0, PAGE_WIDTH, VIEW_HEIGHT));
    let brick_w = PAGE_WIDTH / BRICK_COLS as f32;
    let brick_h = VIEW_HEIGHT / BRICK_ROWS as f32;
    for r in 0..BRICK_ROWS {
        for c in 0..BRICK_COLS {
            surface.add_element(
                "intro",
                ".brick",
                Rect::new(c as f32 * brick_w, r as f32 * brick_h, brick_w, brick_h),
            );
        }
    }

    // Hero.
    surface.add_anchor_element("hero", "section", section(HERO_Y), "about");
    surface.add_element("hero", ".glyph", Rect::new(400.0, 100.0, 640.0, 640.0));
    surface.add_element("hero", ".masthead", Rect::new(0.0, 40.0, PAGE_WIDTH, 80.0));
    for (i, _) in content::HERO_HEADLINE.iter().enumerate() {
        surface.add_element("hero", ".line-inner", row(HERO_Y + 100.0, i, 110.0));
    }
    for i in 0..2 {
        surface.add_element("hero", ".cta-line", row(HERO_Y + 600.0, i, 2.0));
        surface.add_element("hero", ".cta-text", row(HERO_Y + 610.0, i, 28.0));
    }
    surface.add_element("hero", ".paragraph", Rect::new(0.0, HERO_Y + 560.0, 640.0, 120.0));

    // Services.
    surface.add_element("services", "section", section(SERVICES_Y));
    for i in 0..2 {
        surface.add_element("services", ".title-line", row(SERVICES_Y, i, 64.0));
    }
    for (i, _) in content::SERVICES.iter().enumerate() {
        let card = Rect::new(
            (i % 2) as f32 * (PAGE_WIDTH / 2.0),
            SERVICES_Y + 300.0 + (i / 2) as f32 * 260.0,
            PAGE_WIDTH / 2.0 - 24.0,
            240.0,
        );
        surface.add_element("services", ".card", card);
        surface.add_element("services", ".card-glow", card);
    }

    // Proof rows.
    surface.add_element("proof", "section", section(PROOF_Y));
    surface.add_element("proof", ".heading", row(PROOF_Y, 0, 80.0));
    for (i, _) in content::PROOF_PROJECTS.iter().enumerate() {
        surface.add_element("proof", ".row", row(PROOF_Y + 160.0, i, 180.0));
    }

    // Selected projects rail.
    surface.add_anchor_element("work", "section", section(WORK_Y), "work");
    for i in 0..2 {
        surface.add_element("work", ".title-line", row(WORK_Y, i, 90.0));
    }
    for (i, _) in content::SELECTED_PROJECTS.iter().enumerate() {
        surface.add_element(
            "work",
            ".card",
            Rect::new(i as f32 * 480.0, WORK_Y + 320.0, 440.0, 420.0),
        );
    }

    // Experience.
    surface.add_anchor_element("exp", "section", section(EXP_Y), "exp");
    surface.add_element("exp", ".heading", row(EXP_Y, 0, 80.0));
    surface.add_element("exp", ".list", Rect::new(0.0, EXP_Y + 200.0, PAGE_WIDTH, 600.0));
    surface.add_element("exp", ".line", Rect::new(48.0, EXP_Y + 200.0, 2.0, 600.0));
    for (i, _) in content::EXPERIENCES.iter().enumerate() {
        surface.add_element("exp", ".block", row(EXP_Y + 220.0, i, 260.0));
    }

    // Skills.
    surface.add_anchor_element("skills", "section", section(SKILLS_Y), "skills");
    surface.add_element("skills", ".heading", row(SKILLS_Y, 0, 90.0));
    for (i, _) in content::SKILL_DOMAINS.iter().enumerate() {
        surface.add_element("skills", ".domain", row(SKILLS_Y + 160.0, i, 150.0));
    }

    // Contact.
    surface.add_anchor_element("contact", "section", section(CONTACT_Y), "contact");
    for (i, _) in content::CONTACT_HEADLINE.iter().enumerate() {
        surface.add_element("contact", ".headline-line", row(CONTACT_Y + 100.0, i, 90.0));
    }
    for i in 0..2 {
        surface.add_element("contact", ".cta", row(CONTACT_Y + 360.0, i, 56.0));
        surface.add_element("contact", ".arrow", Rect::new(320.0, CONTACT_Y + 372.0 + i as f32 * 80.0, 24.0, 24.0));
    }
    for (i, _) in content::CONTACT_LINKS.iter().enumerate() {
        surface.add_element("contact", ".social", row(CONTACT_Y + 520.0, i, 32.0));
    }

    surface
}
