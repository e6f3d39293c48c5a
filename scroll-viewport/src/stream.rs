//! Push-based scroll event streams.
//!
//! Delivery is synchronous and in order. Nothing here buffers or coalesces events; consumers
//! that want throttling do it on their side.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use crate::ScrollEvent;

/// Receives scroll events from a [`ScrollEvents`] stream.
///
/// Closures `Fn(&ScrollEvent)` implement this trait and ignore completion.
pub trait ScrollObserver {
    fn next(&self, event: &ScrollEvent);

    /// Called once when the stream ends (the owning viewport was disposed).
    fn complete(&self) {}
}

impl<F: Fn(&ScrollEvent)> ScrollObserver for F {
    fn next(&self, event: &ScrollEvent) {
        self(event)
    }
}

/// A live subscription to a [`ScrollEvents`] stream.
///
/// Dropping the subscription unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    closed: Rc<Cell<bool>>,
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Creates a subscription that runs `teardown` on the first `unsubscribe` (or drop).
    ///
    /// `closed` is shared with the source so that completion is visible through
    /// [`Subscription::is_closed`].
    pub fn new(closed: Rc<Cell<bool>>, teardown: impl FnOnce() + 'static) -> Self {
        Self {
            closed,
            teardown: Some(Box::new(teardown)),
        }
    }

    /// A subscription to a stream that has already completed.
    pub fn completed() -> Self {
        Self {
            closed: Rc::new(Cell::new(true)),
            teardown: None,
        }
    }

    /// Returns `true` after `unsubscribe` or once the source completed.
    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    pub fn unsubscribe(&mut self) {
        self.closed.set(true);
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("closed", &self.closed.get())
            .finish_non_exhaustive()
    }
}

type SubscribeFn = dyn Fn(Rc<dyn ScrollObserver>) -> Subscription;

/// A lazy stream of scroll events.
///
/// Nothing is attached to the host until [`ScrollEvents::subscribe`] is called, and each
/// subscription is independent.
#[derive(Clone)]
pub struct ScrollEvents {
    subscribe: Rc<SubscribeFn>,
}

impl ScrollEvents {
    pub fn new(subscribe: impl Fn(Rc<dyn ScrollObserver>) -> Subscription + 'static) -> Self {
        Self {
            subscribe: Rc::new(subscribe),
        }
    }

    /// A stream that completes every subscriber immediately.
    pub fn empty() -> Self {
        Self::new(|observer| {
            observer.complete();
            Subscription::completed()
        })
    }

    pub fn subscribe(&self, observer: impl ScrollObserver + 'static) -> Subscription {
        self.subscribe_rc(Rc::new(observer))
    }

    pub fn subscribe_rc(&self, observer: Rc<dyn ScrollObserver>) -> Subscription {
        (self.subscribe)(observer)
    }
}

impl fmt::Debug for ScrollEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ScrollEvents(..)")
    }
}

struct SubjectEntry {
    id: u64,
    observer: Rc<dyn ScrollObserver>,
    closed: Rc<Cell<bool>>,
}

#[derive(Default)]
struct SubjectState {
    completed: bool,
    next_id: u64,
    observers: Vec<SubjectEntry>,
}

/// A single-producer, multi-subscriber broadcast with explicit completion.
///
/// Completion is idempotent. Once completed, `next` is a no-op and new subscribers are
/// completed immediately without receiving anything.
#[derive(Clone, Default)]
pub struct ScrollSubject {
    state: Rc<RefCell<SubjectState>>,
}

impl ScrollSubject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_completed(&self) -> bool {
        self.state.borrow().completed
    }

    pub fn observer_count(&self) -> usize {
        self.state.borrow().observers.len()
    }

    /// Delivers `event` to every current subscriber, in subscription order.
    pub fn next(&self, event: &ScrollEvent) {
        let entries: Vec<(Rc<dyn ScrollObserver>, Rc<Cell<bool>>)> = {
            let state = self.state.borrow();
            if state.completed {
                return;
            }
            state
                .observers
                .iter()
                .map(|e| (Rc::clone(&e.observer), Rc::clone(&e.closed)))
                .collect()
        };

        // Observers may unsubscribe (or complete the subject) while we deliver.
        for (observer, closed) in entries {
            if self.is_completed() {
                break;
            }
            if closed.get() {
                continue;
            }
            observer.next(event);
        }
    }

    /// Completes the subject. Returns `false` if it was already completed.
    pub fn complete(&self) -> bool {
        let observers = {
            let mut state = self.state.borrow_mut();
            if state.completed {
                return false;
            }
            state.completed = true;
            core::mem::take(&mut state.observers)
        };
        for entry in observers {
            entry.closed.set(true);
            entry.observer.complete();
        }
        true
    }

    pub fn subscribe(&self, observer: Rc<dyn ScrollObserver>) -> Subscription {
        let closed = Rc::new(Cell::new(false));
        let id = {
            let mut state = self.state.borrow_mut();
            if state.completed {
                None
            } else {
                let id = state.next_id;
                state.next_id = state.next_id.wrapping_add(1);
                state.observers.push(SubjectEntry {
                    id,
                    observer: Rc::clone(&observer),
                    closed: Rc::clone(&closed),
                });
                Some(id)
            }
        };

        let Some(id) = id else {
            observer.complete();
            return Subscription::completed();
        };

        let state = Rc::downgrade(&self.state);
        Subscription::new(closed, move || {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().observers.retain(|e| e.id != id);
            }
        })
    }

    /// A stream view over this subject.
    pub fn events(&self) -> ScrollEvents {
        let subject = self.clone();
        ScrollEvents::new(move |observer| subject.subscribe(observer))
    }
}

impl fmt::Debug for ScrollSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ScrollSubject")
            .field("completed", &state.completed)
            .field("observers", &state.observers.len())
            .finish()
    }
}

#[derive(Default)]
struct DisposeState {
    disposed: bool,
    next_id: u64,
    hooks: Vec<(u64, Box<dyn FnOnce()>)>,
}

/// A one-shot teardown signal.
///
/// Hooks registered with [`DisposeSignal::on_dispose`] run exactly once, on the first
/// [`DisposeSignal::dispose`]. Later calls do nothing.
#[derive(Clone, Default)]
pub struct DisposeSignal {
    state: Rc<RefCell<DisposeState>>,
}

impl DisposeSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_disposed(&self) -> bool {
        self.state.borrow().disposed
    }

    /// Fires the signal. Returns `false` if it had already fired.
    pub fn dispose(&self) -> bool {
        let hooks = {
            let mut state = self.state.borrow_mut();
            if state.disposed {
                return false;
            }
            state.disposed = true;
            core::mem::take(&mut state.hooks)
        };
        for (_, hook) in hooks {
            hook();
        }
        true
    }

    /// Registers `hook`. If the signal already fired, runs it immediately and returns `None`.
    pub fn on_dispose(&self, hook: impl FnOnce() + 'static) -> Option<u64> {
        let mut state = self.state.borrow_mut();
        if state.disposed {
            drop(state);
            hook();
            return None;
        }
        let id = state.next_id;
        state.next_id = state.next_id.wrapping_add(1);
        state.hooks.push((id, Box::new(hook)));
        Some(id)
    }

    pub fn cancel(&self, id: u64) {
        self.state.borrow_mut().hooks.retain(|(hook_id, _)| *hook_id != id);
    }
}

impl fmt::Debug for DisposeSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("DisposeSignal")
            .field("disposed", &state.disposed)
            .field("hooks", &state.hooks.len())
            .finish()
    }
}
