//! # kit
//!
//! Small presentational component kit shared by the `spent` client pages.
//! Components are stateless: they only lay out their children. Style strings
//! are built by pure helpers so layout rules are testable without a DOM.

pub mod absolute;
pub mod alignment;
pub mod container;

pub use absolute::{AbsoluteContainer, Offsets};
pub use alignment::{Alignment, AlignmentContainer};
pub use container::Container;
