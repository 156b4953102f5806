//! Scroll subscription and the derived visibility flag.

use std::rc::Rc;

use crate::config::{sanitize_non_negative, DEFAULT_SCROLL_THRESHOLD};
use crate::reactive::{create_signal, Signal};
use crate::viewport::{ScrollSubscription, Viewport};

/// Watches a viewport's scroll offset and derives the widget's
/// `visible` flag: true iff the offset is strictly above the
/// configured threshold.
///
/// The watcher owns the scroll subscription through an RAII guard, so
/// dropping it (the widget unmounting) deregisters the listener on
/// every exit path. Changing the threshold re-subscribes with a fresh
/// listener closed over the new value.
pub struct ScrollWatcher {
    viewport: Rc<dyn Viewport>,
    threshold: f32,
    visible: Signal<bool>,
    subscription: ScrollSubscription,
}

impl ScrollWatcher {
    /// Registers a scroll listener on the viewport. The widget starts
    /// hidden; visibility is recomputed on every notification.
    ///
    /// Negative thresholds clamp to 0 and non-finite ones fall back to
    /// the default, so the comparison is always well-defined.
    pub fn mount(viewport: Rc<dyn Viewport>, threshold: f32) -> Self {
        let threshold = sanitize_non_negative(threshold, DEFAULT_SCROLL_THRESHOLD);
        let visible = create_signal(false);
        let subscription = Self::subscribe(&viewport, threshold, &visible);
        Self {
            viewport,
            threshold,
            visible,
            subscription,
        }
    }

    fn subscribe(
        viewport: &Rc<dyn Viewport>,
        threshold: f32,
        visible: &Signal<bool>,
    ) -> ScrollSubscription {
        let visible = visible.clone();
        ScrollSubscription::new(
            viewport.clone(),
            Rc::new(move |offset: f32| {
                let now_visible = offset > threshold;
                if now_visible != visible.get_untracked() {
                    log::debug!(
                        "back-to-top {} at offset {offset} (threshold {threshold})",
                        if now_visible { "shown" } else { "hidden" }
                    );
                }
                visible.set(now_visible);
            }),
        )
    }

    /// Handle to the derived visibility signal.
    pub fn visible(&self) -> Signal<bool> {
        self.visible.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get_untracked()
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Swap in a new threshold. The old listener is deregistered and a
    /// fresh one registered, so the next notification compares against
    /// the latest configured value. Negative values clamp to 0;
    /// non-finite values keep the current threshold.
    pub fn set_threshold(&mut self, threshold: f32) {
        let threshold = sanitize_non_negative(threshold, self.threshold);
        if threshold == self.threshold {
            return;
        }
        self.threshold = threshold;
        self.subscription = Self::subscribe(&self.viewport, threshold, &self.visible);
    }
}
