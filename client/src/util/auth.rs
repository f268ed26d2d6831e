//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior once the session
//! listener has reported.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::state::root::AppState;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

pub fn should_redirect_home(state: &AuthState) -> bool {
    !state.loading && state.user.is_some()
}

fn install_redirect<F>(
    state: RwSignal<Arc<AppState>>,
    navigate: F,
    target: &'static str,
    when: fn(&AuthState) -> bool,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let app = state.get();
        if when(&app.auth) {
            navigate(target, NavigateOptions::default());
        }
    });
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(state: RwSignal<Arc<AppState>>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_redirect(state, navigate, LOGIN_PATH, should_redirect_unauth);
}

/// Redirect to `/` once a signed-in user is present.
pub fn install_home_redirect<F>(state: RwSignal<Arc<AppState>>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_redirect(state, navigate, HOME_PATH, should_redirect_home);
}
