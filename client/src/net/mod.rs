//! Networking modules for the identity provider boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provider` defines the capability set the auth commands consume, and `api`
//! implements it against the REST auth API in the browser.

pub mod api;
pub mod provider;
