//! Auth-session slice for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and identity-aware components read this slice through the
//! selectors below. It changes only when the root reducer folds an
//! [`AuthAction`] into it.
//!
//! DESIGN
//! ======
//! `start` actions are dispatched optimistically by the command executor
//! (`state::actions`); the authoritative `authenticate.success` and
//! `unauthenticate.success` transitions come from the provider's session
//! listener. Success does not clear a previously stored error.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::root::{Action, AppState};
use super::selector::Selector;

/// Identifiers for the three phases of one asynchronous operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AsyncActionTypes {
    pub start: &'static str,
    pub success: &'static str,
    pub failure: &'static str,
}

macro_rules! async_action_types {
    ($name:literal) => {
        AsyncActionTypes {
            start: concat!("spent/", $name, "/start"),
            success: concat!("spent/", $name, "/success"),
            failure: concat!("spent/", $name, "/failure"),
        }
    };
}

/// Namespaced action type registry for the auth slice.
pub mod action_types {
    use super::AsyncActionTypes;

    pub const AUTHENTICATE: AsyncActionTypes = async_action_types!("auth/authenticate");
    pub const UNAUTHENTICATE: AsyncActionTypes = async_action_types!("auth/unauthenticate");
    pub const LISTENING: &str = "spent/auth/listening";
    pub const ERROR_CLEAR: &str = "spent/auth/error/clear";
}

/// Profile of the signed-in user as reported by the identity provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub uid: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}

impl AuthUser {
    pub fn new(uid: impl Into<String>) -> Self {
        Self { uid: uid.into(), ..Self::default() }
    }
}

/// Failure reported by the identity provider. Opaque beyond its message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct AuthError {
    pub code: Option<String>,
    pub message: String,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { code: None, message: message.into() }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self { code: Some(code.into()), message: message.into() }
    }
}

/// Authentication state tracking the current user, loading flag and last error.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub loading: bool,
    pub user: Option<Arc<AuthUser>>,
    pub error: Option<Arc<AuthError>>,
}

impl Default for AuthState {
    /// Starts in `loading` until the session listener reports.
    fn default() -> Self {
        Self { loading: true, user: None, error: None }
    }
}

/// Plain auth actions. Each variant is its own creator; payloads sit behind
/// `Arc` so selectors can memoize on reference identity.
#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    AuthenticateStart,
    AuthenticateSuccess(Arc<AuthUser>),
    AuthenticateFailure(Arc<AuthError>),
    UnauthenticateStart,
    UnauthenticateSuccess,
    UnauthenticateFailure(Arc<AuthError>),
    Listening,
    ClearError,
}

impl AuthAction {
    pub fn authenticate_start() -> Self {
        Self::AuthenticateStart
    }

    pub fn authenticate_success(user: AuthUser) -> Self {
        Self::AuthenticateSuccess(Arc::new(user))
    }

    pub fn authenticate_failure(error: AuthError) -> Self {
        Self::AuthenticateFailure(Arc::new(error))
    }

    pub fn unauthenticate_start() -> Self {
        Self::UnauthenticateStart
    }

    pub fn unauthenticate_success() -> Self {
        Self::UnauthenticateSuccess
    }

    pub fn unauthenticate_failure(error: AuthError) -> Self {
        Self::UnauthenticateFailure(Arc::new(error))
    }

    pub fn listening() -> Self {
        Self::Listening
    }

    pub fn clear_error() -> Self {
        Self::ClearError
    }

    /// Registry identifier for this action.
    pub fn action_type(&self) -> &'static str {
        match self {
            Self::AuthenticateStart => action_types::AUTHENTICATE.start,
            Self::AuthenticateSuccess(_) => action_types::AUTHENTICATE.success,
            Self::AuthenticateFailure(_) => action_types::AUTHENTICATE.failure,
            Self::UnauthenticateStart => action_types::UNAUTHENTICATE.start,
            Self::UnauthenticateSuccess => action_types::UNAUTHENTICATE.success,
            Self::UnauthenticateFailure(_) => action_types::UNAUTHENTICATE.failure,
            Self::Listening => action_types::LISTENING,
            Self::ClearError => action_types::ERROR_CLEAR,
        }
    }
}

/// Fold `action` into the auth slice.
///
/// Total over every [`Action`]: anything this slice does not handle returns
/// the same `Arc` it was given.
pub fn reduce(state: &Arc<AuthState>, action: &Action) -> Arc<AuthState> {
    let Action::Auth(action) = action else {
        return Arc::clone(state);
    };
    let current = &**state;
    let next = match action {
        AuthAction::AuthenticateStart | AuthAction::UnauthenticateStart => {
            AuthState { loading: true, ..current.clone() }
        }
        AuthAction::AuthenticateSuccess(user) => AuthState {
            user: Some(Arc::clone(user)),
            loading: false,
            ..current.clone()
        },
        AuthAction::AuthenticateFailure(error) => AuthState {
            loading: false,
            user: None,
            error: Some(Arc::clone(error)),
        },
        AuthAction::UnauthenticateSuccess => AuthState {
            user: None,
            loading: false,
            ..current.clone()
        },
        AuthAction::UnauthenticateFailure(error) => AuthState {
            error: Some(Arc::clone(error)),
            loading: false,
            ..current.clone()
        },
        AuthAction::ClearError => AuthState { error: None, ..current.clone() },
        AuthAction::Listening => return Arc::clone(state),
    };
    Arc::new(next)
}

// =============================================================
// Selectors
// =============================================================

pub fn loading(state: &AppState) -> bool {
    state.auth.loading
}

pub fn user(state: &AppState) -> Option<Arc<AuthUser>> {
    state.auth.user.clone()
}

pub fn error(state: &AppState) -> Option<Arc<AuthError>> {
    state.auth.error.clone()
}

type UserSelector<O> = Selector<AppState, Option<Arc<AuthUser>>, O>;
type ErrorSelector<O> = Selector<AppState, Option<Arc<AuthError>>, O>;

/// Derived auth selectors, each memoized on its base input.
pub struct AuthSelectors {
    is_authenticated: UserSelector<bool>,
    user_photo: UserSelector<Option<String>>,
    display_name: UserSelector<Option<String>>,
    error_message: ErrorSelector<Option<String>>,
}

impl Default for AuthSelectors {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthSelectors {
    pub fn new() -> Self {
        Self {
            is_authenticated: Selector::new(user, |user: &Option<Arc<AuthUser>>| user.is_some()),
            user_photo: Selector::new(user, |user: &Option<Arc<AuthUser>>| {
                user.as_ref().and_then(|u| u.photo_url.clone())
            }),
            display_name: Selector::new(user, |user: &Option<Arc<AuthUser>>| {
                user.as_ref().map(|u| preferred_name(u).to_owned())
            }),
            error_message: Selector::new(error, |error: &Option<Arc<AuthError>>| {
                error.as_ref().map(|e| e.message.clone())
            }),
        }
    }

    pub fn is_authenticated(&self, state: &AppState) -> bool {
        self.is_authenticated.select(state)
    }

    pub fn user_photo(&self, state: &AppState) -> Option<String> {
        self.user_photo.select(state)
    }

    /// Display name, falling back to email and then uid.
    pub fn display_name(&self, state: &AppState) -> Option<String> {
        self.display_name.select(state)
    }

    pub fn error_message(&self, state: &AppState) -> Option<String> {
        self.error_message.select(state)
    }
}

fn preferred_name(user: &AuthUser) -> &str {
    user.display_name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .or(user.email.as_deref())
        .unwrap_or(&user.uid)
}
