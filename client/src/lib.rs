//! # client
//!
//! Leptos front-end for the `spent` expense tracker.
//!
//! This crate contains the application store and its auth slice, the
//! identity-provider adapter, pages, components, and browser utilities. The
//! root `spent` binary mounts [`app::App`] and registers the service worker.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
