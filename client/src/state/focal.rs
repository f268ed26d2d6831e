//! Single-slot status message ("Signing in...").
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth command executor writes transient progress text through a
//! [`StatusSink`]; the `Loader` component reads it back from this slice while
//! an operation is in flight.

#[cfg(test)]
#[path = "focal_test.rs"]
mod focal_test;

use std::sync::Arc;

use super::root::Action;

pub mod action_types {
    pub const SET: &str = "spent/focal/set";
    pub const CLEAR: &str = "spent/focal/clear";
}

/// Where status text goes. Fire-and-forget; nothing is read back.
pub trait StatusSink {
    fn set(&self, message: &str);

    /// Drop whatever text an earlier operation left behind.
    fn clear(&self);
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FocalState {
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FocalAction {
    Set(String),
    Clear,
}

impl FocalAction {
    pub fn action_type(&self) -> &'static str {
        match self {
            Self::Set(_) => action_types::SET,
            Self::Clear => action_types::CLEAR,
        }
    }
}

/// Fold `action` into the focal slice; unrelated actions keep the same `Arc`.
pub fn reduce(state: &Arc<FocalState>, action: &Action) -> Arc<FocalState> {
    match action {
        Action::Focal(FocalAction::Set(message)) => {
            if state.message.as_deref() == Some(message.as_str()) {
                return Arc::clone(state);
            }
            Arc::new(FocalState { message: Some(message.clone()) })
        }
        Action::Focal(FocalAction::Clear) if state.message.is_some() => {
            Arc::new(FocalState { message: None })
        }
        _ => Arc::clone(state),
    }
}

/// Status text to show, if any.
pub fn message(state: &super::root::AppState) -> Option<&str> {
    state.focal.message.as_deref()
}
