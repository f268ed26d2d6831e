//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from the `AppContext` provided by `App`.

pub mod loader;
pub mod loading;
