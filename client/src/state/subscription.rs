//! Handle for a registered listener.
//!
//! DESIGN
//! ======
//! Store subscribers and auth-provider session listeners both hand back a
//! `Subscription`. Dropping the handle unregisters the listener; `forget`
//! leaves it registered for the rest of the page session.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use std::fmt;

/// Owned registration of a listener. Unsubscribes exactly once.
#[must_use = "dropping a Subscription unsubscribes immediately; call `forget` to keep it"]
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap the closure that removes the listener.
    pub fn new<F>(teardown: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self { teardown: Some(Box::new(teardown)) }
    }

    /// Remove the listener now.
    pub fn unsubscribe(mut self) {
        self.run_teardown();
    }

    /// Keep the listener registered for the remaining page lifetime.
    pub fn forget(mut self) {
        self.teardown = None;
    }

    fn run_teardown(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_teardown();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.teardown.is_some())
            .finish()
    }
}
