//! Full-stack orchestration tests
//!
//! Drive [`PortfolioApp`] against the headless demo layout the way a host
//! would: activation, frame ticks, scroll and pointer events. Assertions
//! read back the recorded property writes on the surface.

use std::sync::Arc;

use folio_core::{ColorProperty, HeadlessSurface, PointerStyle, Property, RenderSurface, TargetId};
use folio_orchestrator::{CursorTheme, WipePhase};
use folio_site::{demo, PortfolioApp};

const DT: f32 = 0.016;

fn frames(app: &mut PortfolioApp, seconds: f32) {
    let steps = (seconds / DT).ceil() as usize;
    for _ in 0..steps {
        app.tick(DT);
    }
}

fn scroll_to(surface: &HeadlessSurface, app: &mut PortfolioApp, y: f32) {
    surface.set_scroll(y);
    app.on_scroll();
}

/// Build the page, activate it, and let the intro and hero settle.
fn settled_page() -> (Arc<HeadlessSurface>, PortfolioApp) {
    let surface = demo::build();
    let mut app = PortfolioApp::new(surface.clone()).unwrap();
    app.activate();
    frames(&mut app, 4.0);
    surface.clear_log();
    (surface, app)
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn test_intro_bricks_collapse_column_by_column() {
    let surface = demo::build();
    let mut app = PortfolioApp::new(surface.clone()).unwrap();
    app.activate();

    // The mount playback renders its first frame immediately: every brick
    // starts fully scaled, covering the page.
    let bricks = surface.resolve("intro", ".brick");
    assert_eq!(bricks.len(), 10);
    for &brick in &bricks {
        assert_eq!(surface.value_of(brick, Property::ScaleY), Some(1.0));
    }

    // Mid-flight: bricks are laid out row-major over 2x5, and the grid
    // stagger sweeps along x. Both rows of a column move in lockstep, and
    // columns further right lag behind.
    frames(&mut app, 0.15);
    let scale = |id: TargetId| surface.value_of(id, Property::ScaleY).unwrap();
    for c in 0..5 {
        assert!(close(scale(bricks[c]), scale(bricks[5 + c])));
    }
    for c in 0..4 {
        assert!(scale(bricks[c]) <= scale(bricks[c + 1]) + 1e-4);
    }

    // Fully settled: bricks collapsed, overlay dropped out of hit testing.
    frames(&mut app, 2.0);
    for &brick in &bricks {
        assert!(close(scale(brick), 0.0));
    }
    let overlay = surface.resolve("intro", ".overlay")[0];
    assert_eq!(surface.value_of(overlay, Property::Visibility), Some(0.0));
}

#[test]
fn test_hero_entrance_settles_to_resting_pose() {
    let (surface, _app) = settled_page();

    for line in surface.resolve("hero", ".line-inner") {
        assert!(close(surface.rendered_value(line, Property::TranslateYPercent), 0.0));
        assert!(close(surface.rendered_value(line, Property::SkewY), 0.0));
    }
    let glyph = surface.resolve("hero", ".glyph")[0];
    assert!(close(surface.rendered_value(glyph, Property::Opacity), 1.0));
    assert!(close(surface.rendered_value(glyph, Property::Scale), 1.0));
    for rule in surface.resolve("hero", ".cta-line") {
        assert!(close(surface.rendered_value(rule, Property::ScaleX), 1.0));
    }
}

#[test]
fn test_services_reverse_on_exit_and_resume() {
    let (surface, mut app) = settled_page();
    let cards = surface.resolve("services", ".card");

    // Section top at y=900 against the 80% line: crosses at scroll 180.
    scroll_to(&surface, &mut app, 400.0);
    assert!(app.registry().has_fired("services", "enter"));
    frames(&mut app, 3.0);
    assert!(close(surface.rendered_value(cards[0], Property::Opacity), 1.0));

    // Scrolling back out reverses the entrance to its hidden pose.
    scroll_to(&surface, &mut app, 0.0);
    frames(&mut app, 3.0);
    assert!(close(surface.rendered_value(cards[0], Property::Opacity), 0.0));
    assert!(close(surface.rendered_value(cards[0], Property::TranslateY), 60.0));

    // Re-entering resumes forward from wherever the reverse left off.
    scroll_to(&surface, &mut app, 400.0);
    frames(&mut app, 3.0);
    assert!(close(surface.rendered_value(cards[0], Property::Opacity), 1.0));
    assert!(close(surface.rendered_value(cards[0], Property::TranslateY), 0.0));
}

#[test]
fn test_contact_plays_once() {
    let (surface, mut app) = settled_page();
    let lines = surface.resolve("contact", ".headline-line");

    scroll_to(&surface, &mut app, 4500.0);
    assert!(app.registry().has_fired("contact", "enter"));
    frames(&mut app, 4.0);
    for &line in &lines {
        assert!(close(surface.rendered_value(line, Property::TranslateYPercent), 0.0));
    }

    // Leave and come back: the sign-off must not replay.
    scroll_to(&surface, &mut app, 0.0);
    frames(&mut app, 1.0);
    surface.clear_log();
    scroll_to(&surface, &mut app, 4500.0);
    frames(&mut app, 0.5);
    assert!(surface
        .log()
        .iter()
        .all(|write| !lines.contains(&write.target)));
}

#[test]
fn test_experience_line_scrubs_with_scroll() {
    let (surface, mut app) = settled_page();
    let line = surface.resolve("exp", ".line")[0];

    // The list spans y=3800..4400; against the 70% viewport line the scrub
    // runs from scroll 3170 to 3770. Seeks apply without any frame tick.
    scroll_to(&surface, &mut app, 3170.0);
    assert!(close(surface.rendered_value(line, Property::ScaleY), 0.0));

    scroll_to(&surface, &mut app, 3470.0);
    assert!(close(surface.rendered_value(line, Property::ScaleY), 0.5));

    scroll_to(&surface, &mut app, 3770.0);
    assert!(close(surface.rendered_value(line, Property::ScaleY), 1.0));

    // Scrolling back rewinds the draw.
    scroll_to(&surface, &mut app, 3320.0);
    assert!(close(surface.rendered_value(line, Property::ScaleY), 0.25));
}

#[test]
fn test_wipe_navigation_is_not_reentrant() {
    let (surface, mut app) = settled_page();

    app.on_anchor_click("skills");
    assert_eq!(app.wipe_phase(), WipePhase::Covering);

    // A second click mid-sweep is swallowed.
    frames(&mut app, 0.2);
    app.on_anchor_click("contact");
    frames(&mut app, 3.0);

    assert_eq!(app.wipe_phase(), WipePhase::Idle);
    assert_eq!(surface.anchor_jumps(), vec!["skills".to_string()]);
    assert_eq!(surface.viewport().scroll_y, demo::SKILLS_Y);

    // The jump lands past the skills threshold; its entrance fires without
    // a host scroll event.
    assert!(app.registry().has_fired("skills", "enter"));
    frames(&mut app, 3.0);
    let heading = surface.resolve("skills", ".heading")[0];
    assert!(close(surface.rendered_value(heading, Property::TranslateYPercent), 0.0));

    // Cover panels are scaled back out of view.
    for panel in surface.resolve("wipe", ".panel") {
        assert!(close(surface.rendered_value(panel, Property::ScaleY), 0.0));
    }
}

#[test]
fn test_nav_toggle_is_synchronous_and_recolors_cursor() {
    let (surface, mut app) = settled_page();
    let dot = surface.resolve("cursor", ".dot")[0];
    let accent = CursorTheme::default().accent;
    let base = CursorTheme::default().base;

    app.toggle_nav();
    assert!(app.nav_state().is_open());
    frames(&mut app, 2.0);

    // Overlay links cascaded in.
    for link in surface.resolve("nav", ".link") {
        assert!(close(surface.rendered_value(link, Property::Opacity), 1.0));
        assert!(close(surface.rendered_value(link, Property::TranslateY), 0.0));
    }
    let dot_color = surface.color_of(dot, ColorProperty::Background).unwrap();
    assert!((dot_color.r - accent.r).abs() < 0.01 && (dot_color.g - accent.g).abs() < 0.01);

    app.toggle_nav();
    assert!(!app.nav_state().is_open());
    frames(&mut app, 2.0);
    let dot_color = surface.color_of(dot, ColorProperty::Background).unwrap();
    assert!((dot_color.r - base.r).abs() < 0.01 && (dot_color.g - base.g).abs() < 0.01);
}

#[test]
fn test_projects_copy_once_rail_reverses() {
    let (surface, mut app) = settled_page();
    let title = surface.resolve("work", ".title-line")[0];
    let card = surface.resolve("work", ".card")[0];

    // Section top at y=2700 against the 80% line: crosses at scroll 1980.
    scroll_to(&surface, &mut app, 2200.0);
    frames(&mut app, 3.0);
    assert!(close(surface.rendered_value(card, Property::TranslateX), 0.0));
    assert!(close(surface.rendered_value(title, Property::TranslateYPercent), 0.0));

    // On exit the rail slides back out while the copy keeps its pose.
    scroll_to(&surface, &mut app, 0.0);
    frames(&mut app, 3.0);
    assert!(close(surface.rendered_value(card, Property::TranslateX), 100.0));
    assert!(close(surface.rendered_value(title, Property::TranslateYPercent), 0.0));
}

#[test]
fn test_contact_arrow_hover_nudges_and_reverses() {
    let (surface, mut app) = settled_page();
    let arrow = surface.resolve("contact", ".arrow")[0];

    app.on_hover_enter("contact", "cta-arrow");
    frames(&mut app, 1.0);
    assert!(close(surface.rendered_value(arrow, Property::TranslateX), 6.0));

    app.on_hover_leave("contact", "cta-arrow");
    frames(&mut app, 1.0);
    assert!(close(surface.rendered_value(arrow, Property::TranslateX), 0.0));
}

#[test]
fn test_hero_glyph_parallax_follows_pointer() {
    let (surface, mut app) = settled_page();
    let glyph = surface.resolve("hero", ".glyph")[0];

    // Right edge, vertical center: full positive x drift, no y drift.
    app.on_pointer_move(1440.0, 450.0);
    frames(&mut app, 3.0);
    assert!((surface.rendered_value(glyph, Property::TranslateX) - 20.0).abs() < 1.0);
    assert!(surface.rendered_value(glyph, Property::TranslateY).abs() < 1.0);

    app.on_pointer_move(720.0, 450.0);
    frames(&mut app, 3.0);
    assert!(surface.rendered_value(glyph, Property::TranslateX).abs() < 1.0);
}

#[test]
fn test_navbar_hides_on_scroll_down_and_returns() {
    let (surface, mut app) = settled_page();
    let bar = surface.resolve("nav", ".bar")[0];

    scroll_to(&surface, &mut app, 300.0);
    frames(&mut app, 3.0);
    let hidden_y = surface.rendered_value(bar, Property::TranslateY);
    assert!((hidden_y - -100.0).abs() < 1.0);

    scroll_to(&surface, &mut app, 200.0);
    frames(&mut app, 3.0);
    let shown_y = surface.rendered_value(bar, Property::TranslateY);
    assert!(shown_y.abs() < 1.0);
}

#[test]
fn test_shallow_scroll_keeps_navbar() {
    let (surface, mut app) = settled_page();
    let bar = surface.resolve("nav", ".bar")[0];

    // Below the hide depth the bar never moves, whatever the direction.
    scroll_to(&surface, &mut app, 60.0);
    frames(&mut app, 2.0);
    assert!(surface.rendered_value(bar, Property::TranslateY).abs() < 1e-3);
}

#[test]
fn test_teardown_quiesces_everything() {
    let (surface, mut app) = settled_page();
    scroll_to(&surface, &mut app, 400.0);
    app.toggle_nav();
    frames(&mut app, 0.2);

    app.teardown();
    assert!(!app.is_animating());
    assert_eq!(surface.pointer_style(), PointerStyle::Default);

    surface.clear_log();
    frames(&mut app, 1.0);
    scroll_to(&surface, &mut app, 2000.0);
    frames(&mut app, 1.0);
    assert!(surface.log().is_empty());
}
