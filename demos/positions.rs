//! Prints the resolved placement and style for each corner, plus the
//! fallback for an unrecognized position name.
//!
//! To run: cargo run --example positions

use risalgo::prelude::*;

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let names = [
        "top-left",
        "top-right",
        "bottom-left",
        "bottom-right",
        "center", // unrecognized, resolves like bottom-right
    ];

    for name in names {
        let position = Position::parse(name);
        let placement = position.resolve();
        log::info!("{name:>13} -> {position:?}: {placement:?}");
    }

    let style = ButtonStyle::resolve(
        &BackToTopConfig::new()
            .size(80.0)
            .position(Position::TopLeft),
        true,
    );
    log::info!(
        "80px top-left button: {}x{} circle (radius {}), pinned top {:?} left {:?}, margin {}",
        style.width,
        style.height,
        style.corner_radius,
        style.placement.top,
        style.placement.left,
        style.placement.margin,
    );
}
