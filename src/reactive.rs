//! Reactive primitives backing the widget's derived state.
//!
//! A small signal/effect system in the Leptos/SolidJS tradition. The
//! host environment is single-threaded and cooperative, so signal
//! values live in `Rc<RefCell<T>>` and the tracking runtime is a
//! `thread_local!`. Effects re-run synchronously when a signal they
//! read changes.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

thread_local! {
    static RUNTIME: RefCell<Runtime> = RefCell::new(Runtime::default());
}

type SignalId = usize;
type EffectId = usize;

#[derive(Default)]
struct Runtime {
    current_effect: Option<EffectId>,
    pending_effects: HashSet<EffectId>,
    effect_callbacks: Vec<Option<Rc<RefCell<dyn FnMut()>>>>,
    effect_dependencies: Vec<HashSet<SignalId>>,
    signal_subscribers: Vec<HashSet<EffectId>>,
    // Released slots, reused by the next allocation so repeated
    // mount/unmount cycles don't grow the runtime without bound.
    free_signals: Vec<SignalId>,
    free_effects: Vec<EffectId>,
}

impl Runtime {
    fn allocate_signal(&mut self) -> SignalId {
        if let Some(id) = self.free_signals.pop() {
            id
        } else {
            let id = self.signal_subscribers.len();
            self.signal_subscribers.push(HashSet::new());
            id
        }
    }

    fn allocate_effect(&mut self, callback: Rc<RefCell<dyn FnMut()>>) -> EffectId {
        if let Some(id) = self.free_effects.pop() {
            self.effect_callbacks[id] = Some(callback);
            id
        } else {
            let id = self.effect_callbacks.len();
            self.effect_callbacks.push(Some(callback));
            self.effect_dependencies.push(HashSet::new());
            id
        }
    }

    /// Detach a signal from its subscribers and return its slot to the
    /// free list. The subscriber set is left empty for reuse.
    fn release_signal(&mut self, signal_id: SignalId) {
        let subscribers = std::mem::take(&mut self.signal_subscribers[signal_id]);
        for effect_id in subscribers {
            self.effect_dependencies[effect_id].remove(&signal_id);
        }
        self.free_signals.push(signal_id);
    }

    /// Unsubscribe an effect everywhere and return its slot to the free
    /// list. The callback is handed back so the caller can drop it
    /// outside the runtime borrow (its captures may hold signals whose
    /// release re-enters the runtime).
    fn release_effect(&mut self, effect_id: EffectId) -> Option<Rc<RefCell<dyn FnMut()>>> {
        let deps = std::mem::take(&mut self.effect_dependencies[effect_id]);
        for signal_id in deps {
            self.signal_subscribers[signal_id].remove(&effect_id);
        }
        self.pending_effects.remove(&effect_id);
        self.free_effects.push(effect_id);
        self.effect_callbacks[effect_id].take()
    }

    fn track_read(&mut self, signal_id: SignalId) {
        if let Some(effect_id) = self.current_effect {
            self.signal_subscribers[signal_id].insert(effect_id);
            self.effect_dependencies[effect_id].insert(signal_id);
        }
    }
}

fn with_runtime<F, R>(f: F) -> R
where
    F: FnOnce(&mut Runtime) -> R,
{
    RUNTIME.with(|rt| f(&mut rt.borrow_mut()))
}

/// Like [`with_runtime`], but safe to call from drop glue: skips the
/// callback when the thread-local is gone (thread teardown) or already
/// borrowed.
fn try_with_runtime<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut Runtime) -> R,
{
    RUNTIME
        .try_with(|rt| rt.try_borrow_mut().ok().map(|mut rt| f(&mut rt)))
        .ok()
        .flatten()
}

/// Runs one effect with dependency tracking. The callback executes
/// outside the runtime borrow so it can freely read and write signals.
fn run_effect(effect_id: EffectId) {
    let (callback, prev_effect) = with_runtime(|rt| {
        let old_deps = std::mem::take(&mut rt.effect_dependencies[effect_id]);
        for signal_id in old_deps {
            rt.signal_subscribers[signal_id].remove(&effect_id);
        }
        let prev = rt.current_effect.replace(effect_id);
        (rt.effect_callbacks[effect_id].clone(), prev)
    });

    if let Some(callback) = callback {
        (&mut *callback.borrow_mut())();
    }

    with_runtime(|rt| rt.current_effect = prev_effect);
}

fn notify_write(signal_id: SignalId) {
    with_runtime(|rt| {
        let subscribers: Vec<_> = rt.signal_subscribers[signal_id].iter().copied().collect();
        rt.pending_effects.extend(subscribers);
    });
    flush_effects();
}

fn flush_effects() {
    loop {
        let next = with_runtime(|rt| {
            let id = rt.pending_effects.iter().next().copied();
            if let Some(id) = id {
                rt.pending_effects.remove(&id);
            }
            id
        });
        match next {
            Some(effect_id) => run_effect(effect_id),
            None => break,
        }
    }
}

struct SignalInner<T> {
    id: SignalId,
    value: RefCell<T>,
}

impl<T> Drop for SignalInner<T> {
    fn drop(&mut self) {
        let id = self.id;
        try_with_runtime(|rt| rt.release_signal(id));
    }
}

/// A reactive value. Cloning a signal yields another handle to the
/// same underlying value; reading it inside an effect subscribes that
/// effect to future writes.
pub struct Signal<T> {
    inner: Rc<SignalInner<T>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        let id = with_runtime(Runtime::allocate_signal);
        Self {
            inner: Rc::new(SignalInner {
                id,
                value: RefCell::new(value),
            }),
        }
    }

    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        with_runtime(|rt| rt.track_read(self.inner.id));
        f(&self.inner.value.borrow())
    }

    pub fn with_untracked<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.inner.value.borrow())
    }
}

impl<T: Clone> Signal<T> {
    pub fn get(&self) -> T {
        with_runtime(|rt| rt.track_read(self.inner.id));
        self.inner.value.borrow().clone()
    }

    pub fn get_untracked(&self) -> T {
        self.inner.value.borrow().clone()
    }
}

impl<T: PartialEq> Signal<T> {
    /// Sets the signal's value, notifying subscribers only if the
    /// value actually changed.
    pub fn set(&self, value: T) {
        let changed = {
            let mut guard = self.inner.value.borrow_mut();
            if *guard != value {
                *guard = value;
                true
            } else {
                false
            }
        };
        if changed {
            notify_write(self.inner.id);
        }
    }
}

impl<T: PartialEq + Clone> Signal<T> {
    /// Updates the signal's value in place, notifying subscribers only
    /// if the value actually changed.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        let changed = {
            let mut guard = self.inner.value.borrow_mut();
            let old_value = guard.clone();
            f(&mut guard);
            *guard != old_value
        };
        if changed {
            notify_write(self.inner.id);
        }
    }
}

/// A running reactive computation. Dropping the handle disposes the
/// effect: its subscriptions are removed and it will never run again.
pub struct Effect {
    id: EffectId,
}

impl Effect {
    pub fn new<F>(f: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let id = with_runtime(|rt| rt.allocate_effect(Rc::new(RefCell::new(f))));
        run_effect(id);
        Self { id }
    }
}

impl Drop for Effect {
    fn drop(&mut self) {
        let callback = try_with_runtime(|rt| rt.release_effect(self.id)).flatten();
        // The closure's captures drop here, outside the runtime borrow.
        drop(callback);
    }
}

pub fn create_signal<T>(value: T) -> Signal<T> {
    Signal::new(value)
}

pub fn create_effect<F>(f: F) -> Effect
where
    F: FnMut() + 'static,
{
    Effect::new(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_create_signal_and_get() {
        let signal = create_signal(42);
        assert_eq!(signal.get(), 42);
    }

    #[test]
    fn test_set_updates_value() {
        let signal = create_signal(10);
        signal.set(20);
        assert_eq!(signal.get(), 20);
    }

    #[test]
    fn test_update_with_closure() {
        let signal = create_signal(5);
        signal.update(|v| *v += 10);
        assert_eq!(signal.get(), 15);
    }

    #[test]
    fn test_clone_shares_underlying_value() {
        let signal1 = create_signal(50);
        let signal2 = signal1.clone();
        signal1.set(75);
        assert_eq!(signal2.get(), 75);
    }

    #[test]
    fn test_with_for_borrowing() {
        let signal = create_signal(String::from("hello"));
        let length = signal.with(|s| s.len());
        assert_eq!(length, 5);
    }

    #[test]
    fn test_effect_runs_immediately() {
        let runs = Rc::new(Cell::new(0));
        let runs_in_effect = runs.clone();
        let _effect = create_effect(move || {
            runs_in_effect.set(runs_in_effect.get() + 1);
        });
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn test_effect_reruns_on_write() {
        let signal = create_signal(0);
        let seen = Rc::new(Cell::new(-1));
        let signal_in_effect = signal.clone();
        let seen_in_effect = seen.clone();
        let _effect = create_effect(move || {
            seen_in_effect.set(signal_in_effect.get());
        });
        assert_eq!(seen.get(), 0);

        signal.set(7);
        assert_eq!(seen.get(), 7);
    }

    #[test]
    fn test_effect_skips_unchanged_write() {
        let signal = create_signal(1);
        let runs = Rc::new(Cell::new(0));
        let signal_in_effect = signal.clone();
        let runs_in_effect = runs.clone();
        let _effect = create_effect(move || {
            let _ = signal_in_effect.get();
            runs_in_effect.set(runs_in_effect.get() + 1);
        });
        assert_eq!(runs.get(), 1);

        signal.set(1); // no actual change
        assert_eq!(runs.get(), 1);
        signal.set(2);
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn test_dropped_effect_stops_running() {
        let signal = create_signal(0);
        let runs = Rc::new(Cell::new(0));
        let signal_in_effect = signal.clone();
        let runs_in_effect = runs.clone();
        let effect = create_effect(move || {
            let _ = signal_in_effect.get();
            runs_in_effect.set(runs_in_effect.get() + 1);
        });
        assert_eq!(runs.get(), 1);

        drop(effect);
        signal.set(99);
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn test_dropped_signal_slot_is_reused() {
        let first = create_signal(0);
        let first_id = first.inner.id;
        drop(first);

        let second = create_signal(0);
        assert_eq!(second.inner.id, first_id);
    }

    #[test]
    fn test_dropped_effect_slot_is_reused() {
        let effect = create_effect(|| {});
        let effect_id = effect.id;
        drop(effect);

        let replacement = create_effect(|| {});
        assert_eq!(replacement.id, effect_id);
    }

    #[test]
    fn test_reused_slots_start_unsubscribed() {
        let signal = create_signal(0);
        let signal_in_effect = signal.clone();
        let effect = create_effect(move || {
            let _ = signal_in_effect.get();
        });
        drop(effect);
        drop(signal);

        // The replacements land in the released slots; writes to the
        // new signal must only re-run the new effect.
        let signal = create_signal(0);
        let runs = Rc::new(Cell::new(0));
        let signal_in_effect = signal.clone();
        let runs_in_effect = runs.clone();
        let _effect = create_effect(move || {
            let _ = signal_in_effect.get();
            runs_in_effect.set(runs_in_effect.get() + 1);
        });
        assert_eq!(runs.get(), 1);

        signal.set(1);
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn test_untracked_read_does_not_subscribe() {
        let signal = create_signal(0);
        let runs = Rc::new(Cell::new(0));
        let signal_in_effect = signal.clone();
        let runs_in_effect = runs.clone();
        let _effect = create_effect(move || {
            let _ = signal_in_effect.get_untracked();
            runs_in_effect.set(runs_in_effect.get() + 1);
        });
        assert_eq!(runs.get(), 1);

        signal.set(5);
        assert_eq!(runs.get(), 1);
    }
}
