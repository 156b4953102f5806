//! The back-to-top widget.

use std::rc::Rc;

use crate::color::Color;
use crate::config::BackToTopConfig;
use crate::position::Position;
use crate::reactive::Signal;
use crate::style::ButtonStyle;
use crate::viewport::{ScrollBehavior, Viewport};
use crate::watcher::ScrollWatcher;

/// A "back to top" button for a scrollable host surface.
///
/// The widget stays hidden until the viewport scrolls past the
/// configured threshold, then fades in; activating it asks the host to
/// smooth-scroll back to offset zero. It holds no resources until
/// [`mount`] and releases its scroll subscription on [`unmount`] (or
/// drop), so notifications never reach an unmounted instance.
///
/// ```no_run
/// use std::rc::Rc;
/// use risalgo::prelude::*;
///
/// # fn host_viewport() -> Rc<SimulatedViewport> { SimulatedViewport::new() }
/// let viewport = host_viewport();
/// let mut button = BackToTop::new(viewport)
///     .size(60.0)
///     .position(Position::BottomLeft)
///     .scroll_threshold(400.0);
/// button.mount();
/// let style = button.style(); // hand to the host render tree
/// ```
///
/// [`mount`]: BackToTop::mount
/// [`unmount`]: BackToTop::unmount
pub struct BackToTop {
    config: BackToTopConfig,
    viewport: Rc<dyn Viewport>,
    watcher: Option<ScrollWatcher>,
}

impl BackToTop {
    /// Create an unmounted widget with the default configuration.
    pub fn new(viewport: Rc<dyn Viewport>) -> Self {
        Self::with_config(viewport, BackToTopConfig::default())
    }

    pub fn with_config(viewport: Rc<dyn Viewport>, config: BackToTopConfig) -> Self {
        Self {
            config,
            viewport,
            watcher: None,
        }
    }

    // Builder-style configuration, intended for use before mounting.

    pub fn size(mut self, size: f32) -> Self {
        self.config = self.config.size(size);
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.config = self.config.position(position);
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.config = self.config.background_color(color);
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.config = self.config.text_color(color);
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.config = self.config.icon(icon);
        self
    }

    pub fn scroll_threshold(mut self, threshold: f32) -> Self {
        self.config = self.config.scroll_threshold(threshold);
        self
    }

    pub fn transition_duration(mut self, duration_ms: f32) -> Self {
        self.config = self.config.transition_duration(duration_ms);
        self
    }

    /// Acquire the scroll subscription and start tracking visibility.
    /// Idempotent; the widget starts hidden.
    pub fn mount(&mut self) {
        if self.watcher.is_none() {
            log::debug!("back-to-top mounted (threshold {})", self.config.scroll_threshold);
            self.watcher = Some(ScrollWatcher::mount(
                self.viewport.clone(),
                self.config.scroll_threshold,
            ));
        }
    }

    /// Release the scroll subscription and discard derived state.
    /// Idempotent. After this returns, no scroll notification can
    /// reach the instance.
    pub fn unmount(&mut self) {
        if self.watcher.take().is_some() {
            log::debug!("back-to-top unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.watcher.is_some()
    }

    /// Current visibility; always false while unmounted.
    pub fn is_visible(&self) -> bool {
        self.watcher.as_ref().is_some_and(ScrollWatcher::is_visible)
    }

    /// Handle to the visibility signal, for hosts that re-render
    /// reactively. `None` while unmounted.
    pub fn visible_signal(&self) -> Option<Signal<bool>> {
        self.watcher.as_ref().map(ScrollWatcher::visible)
    }

    /// Change the show/hide threshold. If mounted, the watcher
    /// re-subscribes so the next notification uses the new value.
    pub fn set_scroll_threshold(&mut self, threshold: f32) {
        self.config = self.config.clone().scroll_threshold(threshold);
        if let Some(watcher) = &mut self.watcher {
            watcher.set_threshold(self.config.scroll_threshold);
        }
    }

    /// User activation: request one smooth scroll of the viewport to
    /// offset zero. Fire-and-forget and idempotent; activating while
    /// already at the top issues a harmless no-op request.
    pub fn activate(&self) {
        log::debug!("back-to-top activated, scrolling to 0");
        self.viewport.scroll_to(0.0, ScrollBehavior::Smooth);
    }

    /// Resolve the current render description. Reading this inside a
    /// reactive effect subscribes the effect to visibility changes.
    pub fn style(&self) -> ButtonStyle {
        let visible = self.watcher.as_ref().is_some_and(|w| w.visible().get());
        ButtonStyle::resolve(&self.config, visible)
    }

    pub fn config(&self) -> &BackToTopConfig {
        &self.config
    }
}
