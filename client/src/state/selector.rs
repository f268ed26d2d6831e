//! Memoized derived selectors.
//!
//! DESIGN
//! ======
//! A `Selector` pairs a base projection with a pure compute function and
//! caches the last `(input, output)` pair. The compute function only runs when
//! the projected input differs from the cached one by reference (`Arc`) or by
//! value (scalars), so views can call selectors on every render.

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;

use std::sync::{Arc, Mutex, PoisonError};

/// Cheap "did the input change" comparison used to invalidate a selector cache.
pub trait Identity {
    /// True when `other` is the same input as `self`.
    fn is_same(&self, other: &Self) -> bool;
}

impl<T: ?Sized> Identity for Arc<T> {
    fn is_same(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: Identity> Identity for Option<T> {
    fn is_same(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.is_same(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl Identity for bool {
    fn is_same(&self, other: &Self) -> bool {
        self == other
    }
}

type Compute<I, O> = Box<dyn Fn(&I) -> O + Send + Sync>;

/// Derived selector memoized on a single base input.
pub struct Selector<S, I, O> {
    input: fn(&S) -> I,
    compute: Compute<I, O>,
    cache: Mutex<Option<(I, O)>>,
}

impl<S, I, O> Selector<S, I, O>
where
    I: Identity,
    O: Clone,
{
    pub fn new<F>(input: fn(&S) -> I, compute: F) -> Self
    where
        F: Fn(&I) -> O + Send + Sync + 'static,
    {
        Self { input, compute: Box::new(compute), cache: Mutex::new(None) }
    }

    /// Project `state`, recomputing only when the base input changed.
    pub fn select(&self, state: &S) -> O {
        let input = (self.input)(state);
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((cached_input, cached_output)) = cache.as_ref() {
            if cached_input.is_same(&input) {
                return cached_output.clone();
            }
        }
        let output = (self.compute)(&input);
        *cache = Some((input, output.clone()));
        output
    }
}
