//! Drives the widget through a scripted scroll session on a simulated
//! viewport, logging every visibility transition and the style the
//! host would render.
//!
//! To run: cargo run --example simulation
//! Set RUST_LOG=trace to also see listener registration.

use std::cell::Cell;
use std::rc::Rc;

use risalgo::prelude::*;

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .try_init();

    let viewport = SimulatedViewport::new();
    let mut button = BackToTop::new(viewport.clone())
        .size(60.0)
        .position(Position::BottomRight)
        .scroll_threshold(300.0)
        .transition_duration(200.0);
    button.mount();
    let button = Rc::new(button);

    // A reactive host: re-resolve the style whenever visibility flips.
    let renders = Rc::new(Cell::new(0));
    let renders_in_effect = renders.clone();
    let button_in_effect = button.clone();
    let _render_effect = create_effect(move || {
        let style = button_in_effect.style();
        renders_in_effect.set(renders_in_effect.get() + 1);
        log::info!(
            "render: opacity {} over {}ms ({:?}), interactive {}",
            style.opacity,
            style.transition.duration_ms,
            style.transition.timing,
            style.interactive,
        );
    });

    for offset in [0.0, 120.0, 280.0, 340.0, 900.0, 150.0, 600.0] {
        viewport.set_scroll_offset(offset);
        log::info!("scrolled to {offset}: visible = {}", button.is_visible());
    }

    log::info!("user clicks the button");
    button.activate();
    for (offset, behavior) in viewport.scroll_requests() {
        log::info!("host received scroll request: to {offset} ({behavior:?})");
    }

    log::info!(
        "done: {} renders for 7 scroll positions",
        renders.get()
    );
}
