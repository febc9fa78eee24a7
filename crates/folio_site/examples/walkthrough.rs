//! Simulated visit through the whole page
//!
//! Drives the headless layout the way a browser host would: activation,
//! a scroll from hero to contact, a card hover, the nav overlay, and an
//! anchor wipe. Run with `RUST_LOG=debug` to watch the orchestration.

use anyhow::Result;
use folio_core::RenderSurface;
use folio_site::{demo, PortfolioApp};

fn frames(app: &mut PortfolioApp, seconds: f32) {
    let steps = (seconds / 0.016).ceil() as usize;
    for _ in 0..steps {
        app.tick(0.016);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let surface = demo::build();
    let mut app = PortfolioApp::new(surface.clone())?;

    tracing::info!("activating page");
    app.activate();
    frames(&mut app, 3.0); // Intro bricks + hero entrance
    tracing::info!(animating = app.is_animating(), "hero settled");

    tracing::info!("scrolling through the page");
    for scroll in (0..=5400).step_by(300) {
        surface.set_scroll(scroll as f32);
        app.on_scroll();
        app.on_pointer_move(720.0, 450.0);
        frames(&mut app, 0.1);
    }
    frames(&mut app, 2.0);

    tracing::info!("hovering a service card");
    app.on_hover_enter("services", "card-hover");
    frames(&mut app, 0.5);
    app.on_hover_leave("services", "card-hover");
    frames(&mut app, 0.5);

    tracing::info!("opening the nav overlay");
    app.toggle_nav();
    frames(&mut app, 1.5);
    tracing::info!(state = ?app.nav_state(), "overlay open");

    tracing::info!("wiping to the skills section");
    app.on_anchor_click("skills");
    frames(&mut app, 2.5);
    tracing::info!(
        scroll_y = surface.viewport().scroll_y,
        phase = ?app.wipe_phase(),
        "landed"
    );

    app.teardown();
    tracing::info!("torn down");
    Ok(())
}
