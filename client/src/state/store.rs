//! Application store: one state value, one reducer, serialized dispatch.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `App` component owns the single `Store` and mirrors every new state
//! into a Leptos signal. Command executors and provider callbacks only ever see
//! a [`Dispatcher`].
//!
//! DESIGN
//! ======
//! Actions are folded strictly in dispatch order. A dispatch issued while
//! another is being applied (for example from a subscriber) is queued and
//! drained by the outer call before it returns. A subscriber that panics
//! releases the drain, so later dispatches still apply. Subscribers run only
//! when the root state `Arc` actually changed.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use super::focal::{FocalAction, StatusSink};
use super::root::{self, Action, AppState};
use super::subscription::Subscription;

type Listener = Arc<dyn Fn(&Arc<AppState>) + Send + Sync>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

struct StoreInner {
    state: Mutex<Arc<AppState>>,
    queue: Mutex<VecDeque<Action>>,
    dispatching: AtomicBool,
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_listener_id: AtomicU64,
}

/// Clears the `dispatching` flag when draining ends, including by unwinding.
struct DrainGuard<'a>(&'a AtomicBool);

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl StoreInner {
    fn dispatch(&self, action: Action) {
        lock(&self.queue).push_back(action);
        // Re-check after releasing the flag: an action queued between the last
        // pop and the release would otherwise wait for the next dispatch.
        while !lock(&self.queue).is_empty() {
            if self.dispatching.swap(true, Ordering::AcqRel) {
                return;
            }
            let _drain = DrainGuard(&self.dispatching);
            self.drain();
        }
    }

    fn drain(&self) {
        loop {
            let next = lock(&self.queue).pop_front();
            let Some(action) = next else {
                break;
            };
            self.apply(&action);
        }
    }

    fn apply(&self, action: &Action) {
        log::debug!("dispatch {}", action.action_type());
        let changed = {
            let mut state = lock(&self.state);
            let next = root::reduce(&state, action);
            if Arc::ptr_eq(&next, &state) {
                None
            } else {
                *state = Arc::clone(&next);
                Some(next)
            }
        };
        let Some(next) = changed else {
            return;
        };
        let listeners: Vec<Listener> = lock(&self.listeners)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&next);
        }
    }

    fn remove_listener(&self, id: u64) {
        lock(&self.listeners).retain(|(listener_id, _)| *listener_id != id);
    }
}

/// Redux-style store over [`AppState`].
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: Mutex::new(Arc::new(initial)),
                queue: Mutex::new(VecDeque::new()),
                dispatching: AtomicBool::new(false),
                listeners: Mutex::new(Vec::new()),
                next_listener_id: AtomicU64::new(0),
            }),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&lock(&self.inner.state))
    }

    pub fn dispatch(&self, action: impl Into<Action>) {
        self.inner.dispatch(action.into());
    }

    /// Call `listener` with every new state. Not called for the current one.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Arc<AppState>) + Send + Sync + 'static,
    {
        let id = self.inner.next_listener_id.fetch_add(1, Ordering::Relaxed);
        lock(&self.inner.listeners).push((id, Arc::new(listener)));
        let inner = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.remove_listener(id);
            }
        })
    }

    /// Cloneable dispatch handle that does not keep the store alive.
    pub fn dispatcher(&self) -> Dispatcher {
        let inner: Weak<StoreInner> = Arc::downgrade(&self.inner);
        Dispatcher::new(move |action| match inner.upgrade() {
            Some(inner) => inner.dispatch(action),
            None => log::warn!("dropped {} after store shutdown", action.action_type()),
        })
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store").field("state", &self.state()).finish_non_exhaustive()
    }
}

/// Dispatch capability handed to command executors and provider callbacks.
#[derive(Clone)]
pub struct Dispatcher {
    dispatch: Arc<dyn Fn(Action) + Send + Sync>,
}

impl Dispatcher {
    pub fn new<F>(dispatch: F) -> Self
    where
        F: Fn(Action) + Send + Sync + 'static,
    {
        Self { dispatch: Arc::new(dispatch) }
    }

    pub fn dispatch(&self, action: impl Into<Action>) {
        (self.dispatch)(action.into());
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}

impl StatusSink for Dispatcher {
    fn set(&self, message: &str) {
        self.dispatch(FocalAction::Set(message.to_owned()));
    }

    fn clear(&self) {
        self.dispatch(FocalAction::Clear);
    }
}
