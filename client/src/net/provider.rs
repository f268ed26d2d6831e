//! Identity-provider capability set consumed by the auth commands.
//!
//! SYSTEM CONTEXT
//! ==============
//! `state::actions` only talks to an `AuthProvider`. The browser build plugs
//! in `net::api::HttpAuthProvider`; tests plug in scripted fakes.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::fmt;
use std::sync::Arc;

use futures::future::LocalBoxFuture;
use serde::Serialize;

use crate::state::auth::{AuthError, AuthUser};
use crate::state::subscription::Subscription;

/// Outcome of a provider round-trip. Success carries no data: the session
/// listener reports the resulting user.
pub type ProviderFuture = LocalBoxFuture<'static, Result<(), AuthError>>;

/// One session observation: an error, a signed-in user, or signed out.
pub type SessionResult = Result<Option<AuthUser>, AuthError>;

/// Durable, multi-fire session callback.
pub type SessionCallback = Arc<dyn Fn(SessionResult) + Send + Sync>;

/// Email/password pair submitted to the provider.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

pub trait AuthProvider {
    fn sign_in_with_email_and_password(&self, credentials: &Credentials) -> ProviderFuture;

    fn sign_in_with_google(&self) -> ProviderFuture;

    fn sign_in_with_facebook(&self) -> ProviderFuture;

    fn create_user_with_email_and_password(&self, credentials: &Credentials) -> ProviderFuture;

    fn end_session(&self) -> ProviderFuture;

    /// Register `callback` for every session change until the returned
    /// subscription is dropped or unsubscribed.
    fn listen(&self, callback: SessionCallback) -> Subscription;
}
