//! Root store state and action envelope.
//!
//! DESIGN
//! ======
//! Every slice reducer sees every action and must return the same `Arc` for
//! actions it ignores. The root reducer keeps the root `Arc` too when no slice
//! changed, which lets the store skip subscriber notification.

use std::sync::Arc;

use super::auth::{self, AuthAction, AuthState};
use super::focal::{self, FocalAction, FocalState};

/// Combined state of all slices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub auth: Arc<AuthState>,
    pub focal: Arc<FocalState>,
}

/// Any action the store can dispatch.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Auth(AuthAction),
    Focal(FocalAction),
}

impl Action {
    pub fn action_type(&self) -> &'static str {
        match self {
            Self::Auth(action) => action.action_type(),
            Self::Focal(action) => action.action_type(),
        }
    }
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Self::Auth(action)
    }
}

impl From<FocalAction> for Action {
    fn from(action: FocalAction) -> Self {
        Self::Focal(action)
    }
}

pub fn reduce(state: &Arc<AppState>, action: &Action) -> Arc<AppState> {
    let auth = auth::reduce(&state.auth, action);
    let focal = focal::reduce(&state.focal, action);
    if Arc::ptr_eq(&auth, &state.auth) && Arc::ptr_eq(&focal, &state.focal) {
        return Arc::clone(state);
    }
    Arc::new(AppState { auth, focal })
}
