//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components` and the `kit` layout crate.

pub mod dashboard;
pub mod login;
