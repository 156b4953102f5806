//! Host viewport collaborator interface.
//!
//! The widget never touches a real scroll surface directly. The host
//! embeds the widget and hands it a [`Viewport`]: a scroll-offset
//! query, a subscribe/unsubscribe pair for offset-change
//! notifications, and a scroll-to command. Everything is synchronous
//! and single-threaded; the animated scroll itself is the host's job.

use std::cell::RefCell;
use std::rc::Rc;

/// How a programmatic scroll should move the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Animated interpolation toward the target offset.
    #[default]
    Smooth,
    /// Jump directly to the target offset.
    Instant,
}

/// Handle identifying a registered scroll listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(pub u64);

/// Callback invoked with the current vertical scroll offset after
/// every offset change.
pub type ScrollListener = Rc<dyn Fn(f32)>;

/// A scrollable host surface.
pub trait Viewport {
    /// Current vertical scroll offset in pixels.
    fn scroll_offset(&self) -> f32;

    /// Register a listener for offset-change notifications.
    fn add_scroll_listener(&self, listener: ScrollListener) -> ListenerId;

    /// Remove a previously registered listener. Removing an unknown id
    /// is a no-op.
    fn remove_scroll_listener(&self, id: ListenerId);

    /// Ask the host to move the viewport to `offset`. Fire-and-forget:
    /// completion of the animation is not reported back.
    fn scroll_to(&self, offset: f32, behavior: ScrollBehavior);
}

/// RAII guard for a scroll subscription.
///
/// Holding the guard keeps the listener registered; dropping it
/// removes the listener synchronously, so no notification can reach a
/// listener that outlived its owner.
pub struct ScrollSubscription {
    viewport: Rc<dyn Viewport>,
    id: ListenerId,
}

impl ScrollSubscription {
    pub fn new(viewport: Rc<dyn Viewport>, listener: ScrollListener) -> Self {
        let id = viewport.add_scroll_listener(listener);
        log::trace!("scroll listener {:?} registered", id);
        Self { viewport, id }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        log::trace!("scroll listener {:?} removed", self.id);
        self.viewport.remove_scroll_listener(self.id);
    }
}

/// A host without a scrollable surface.
///
/// Reports offset 0, never notifies, and swallows scroll commands. A
/// widget mounted on it degrades to permanently hidden instead of
/// erroring.
#[derive(Debug, Default)]
pub struct DetachedViewport;

impl DetachedViewport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self)
    }
}

impl Viewport for DetachedViewport {
    fn scroll_offset(&self) -> f32 {
        0.0
    }

    fn add_scroll_listener(&self, _listener: ScrollListener) -> ListenerId {
        ListenerId(0)
    }

    fn remove_scroll_listener(&self, _id: ListenerId) {}

    fn scroll_to(&self, offset: f32, behavior: ScrollBehavior) {
        log::trace!("detached viewport ignoring scroll_to({offset}, {behavior:?})");
    }
}

/// An in-memory viewport for demos and tests.
///
/// The driver scripts scroll positions with [`set_scroll_offset`],
/// which notifies registered listeners; scroll commands are recorded
/// for inspection and applied instantly (no notification, mirroring a
/// host that reports the resulting positions on its own schedule).
///
/// [`set_scroll_offset`]: SimulatedViewport::set_scroll_offset
#[derive(Default)]
pub struct SimulatedViewport {
    inner: RefCell<SimulatedInner>,
}

#[derive(Default)]
struct SimulatedInner {
    offset: f32,
    next_listener: u64,
    listeners: Vec<(ListenerId, ScrollListener)>,
    scroll_requests: Vec<(f32, ScrollBehavior)>,
}

impl SimulatedViewport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Move the simulated scroll position and notify listeners.
    pub fn set_scroll_offset(&self, offset: f32) {
        // Snapshot the listeners so a callback may re-borrow the
        // viewport (query the offset, unsubscribe, ...).
        let listeners: Vec<ScrollListener> = {
            let mut inner = self.inner.borrow_mut();
            inner.offset = offset;
            inner
                .listeners
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect()
        };
        for listener in listeners {
            listener(offset);
        }
    }

    /// All scroll commands issued so far, oldest first.
    pub fn scroll_requests(&self) -> Vec<(f32, ScrollBehavior)> {
        self.inner.borrow().scroll_requests.clone()
    }

    /// Number of listeners currently registered.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl Viewport for SimulatedViewport {
    fn scroll_offset(&self) -> f32 {
        self.inner.borrow().offset
    }

    fn add_scroll_listener(&self, listener: ScrollListener) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = ListenerId(inner.next_listener);
        inner.next_listener += 1;
        inner.listeners.push((id, listener));
        id
    }

    fn remove_scroll_listener(&self, id: ListenerId) {
        self.inner
            .borrow_mut()
            .listeners
            .retain(|(listener_id, _)| *listener_id != id);
    }

    fn scroll_to(&self, offset: f32, behavior: ScrollBehavior) {
        let mut inner = self.inner.borrow_mut();
        inner.scroll_requests.push((offset, behavior));
        inner.offset = offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_simulated_viewport_notifies_listeners() {
        let viewport = SimulatedViewport::new();
        let seen = Rc::new(Cell::new(0.0));
        let seen_in_listener = seen.clone();
        viewport.add_scroll_listener(Rc::new(move |offset| seen_in_listener.set(offset)));

        viewport.set_scroll_offset(120.0);
        assert_eq!(seen.get(), 120.0);
        assert_eq!(viewport.scroll_offset(), 120.0);
    }

    #[test]
    fn test_removed_listener_is_silent() {
        let viewport = SimulatedViewport::new();
        let calls = Rc::new(Cell::new(0));
        let calls_in_listener = calls.clone();
        let id = viewport
            .add_scroll_listener(Rc::new(move |_| calls_in_listener.set(calls_in_listener.get() + 1)));

        viewport.set_scroll_offset(10.0);
        viewport.remove_scroll_listener(id);
        viewport.set_scroll_offset(20.0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_subscription_guard_removes_on_drop() {
        let viewport = SimulatedViewport::new();
        let subscription =
            ScrollSubscription::new(viewport.clone(), Rc::new(|_| {}));
        assert_eq!(viewport.listener_count(), 1);
        drop(subscription);
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn test_scroll_to_is_recorded() {
        let viewport = SimulatedViewport::new();
        viewport.set_scroll_offset(500.0);
        viewport.scroll_to(0.0, ScrollBehavior::Smooth);
        assert_eq!(viewport.scroll_requests(), vec![(0.0, ScrollBehavior::Smooth)]);
        assert_eq!(viewport.scroll_offset(), 0.0);
    }

    #[test]
    fn test_detached_viewport_degrades_gracefully() {
        let viewport = DetachedViewport::new();
        assert_eq!(viewport.scroll_offset(), 0.0);
        let id = viewport.add_scroll_listener(Rc::new(|_| panic!("never notified")));
        viewport.scroll_to(0.0, ScrollBehavior::Smooth);
        viewport.remove_scroll_listener(id);
    }
}
