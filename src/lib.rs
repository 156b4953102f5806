//! A reactive "back to top" button widget.
//!
//! The widget watches a host [`Viewport`]'s scroll offset, fades in
//! once the offset passes a configurable threshold, and smooth-scrolls
//! the viewport back to the top when activated. It is purely
//! presentational: the host embeds the widget, feeds it a viewport,
//! and renders the [`ButtonStyle`] it resolves.
//!
//! ```no_run
//! use risalgo::prelude::*;
//!
//! let viewport = SimulatedViewport::new();
//! let mut button = BackToTop::new(viewport.clone());
//! button.mount();
//!
//! viewport.set_scroll_offset(400.0); // past the default 300px threshold
//! assert!(button.is_visible());
//!
//! button.activate(); // one smooth scroll-to-0 request
//! ```
//!
//! [`Viewport`]: viewport::Viewport
//! [`ButtonStyle`]: style::ButtonStyle

pub mod animation;
pub mod color;
pub mod config;
pub mod position;
pub mod reactive;
pub mod style;
pub mod viewport;
pub mod watcher;
pub mod widget;

pub mod prelude {
    pub use crate::animation::{TimingFunction, Transition};
    pub use crate::color::Color;
    pub use crate::config::BackToTopConfig;
    pub use crate::position::{Placement, Position, EDGE_MARGIN};
    pub use crate::reactive::{create_effect, create_signal, Effect, Signal};
    pub use crate::style::{ButtonStyle, CursorIcon, Role, ACCESSIBLE_LABEL, FONT_SIZE};
    pub use crate::viewport::{
        DetachedViewport, ListenerId, ScrollBehavior, ScrollSubscription, SimulatedViewport,
        Viewport,
    };
    pub use crate::watcher::ScrollWatcher;
    pub use crate::widget::BackToTop;
}

pub use config::BackToTopConfig;
pub use position::Position;
pub use style::ButtonStyle;
pub use widget::BackToTop;
