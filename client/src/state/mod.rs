//! Client-side state: one store, split into slices.
//!
//! DESIGN
//! ======
//! `root` combines the slices (`auth`, `focal`) into `AppState`; `store`
//! serializes dispatch; `actions` runs the effectful auth commands; `selector`
//! memoizes derived values for the views.

pub mod actions;
pub mod auth;
pub mod focal;
pub mod root;
pub mod selector;
pub mod store;
pub mod subscription;
