//! Effectful auth commands.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views describe what they want as an [`AuthCommand`] and hand it to
//! [`AuthActions::execute`] together with a [`Dispatcher`]. The executor runs
//! the synchronous phase immediately (status text, then the `start` action)
//! and returns the asynchronous phase as an [`Effect`] for the caller to spawn.
//!
//! DESIGN
//! ======
//! Sign-in, account creation and sign-out never dispatch their own success.
//! The provider's session listener is the only source of
//! `authenticate.success` / `unauthenticate.success`; the executor only turns
//! a rejected provider call into the matching failure action.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use std::fmt;
use std::sync::Arc;

use futures::future::LocalBoxFuture;

use super::auth::{AuthAction, AuthError};
use super::focal::StatusSink;
use super::store::Dispatcher;
use super::subscription::Subscription;
use crate::net::provider::{AuthProvider, Credentials, SessionCallback, SessionResult};

/// What a view asks the auth slice to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthCommand {
    SignInWithEmailAndPassword(Credentials),
    SignInWithGoogle,
    SignInWithFacebook,
    CreateUserWithEmailAndPassword(Credentials),
    SignOut,
    Listen,
    ClearError,
}

impl AuthCommand {
    /// Status text shown while the command is in flight.
    pub fn status_message(&self) -> Option<&'static str> {
        match self {
            Self::SignInWithEmailAndPassword(_) => Some("Signing in..."),
            Self::SignInWithGoogle => Some("Signing in with Google..."),
            Self::SignInWithFacebook => Some("Signing in with Facebook..."),
            Self::SignOut => Some("Signing out..."),
            Self::CreateUserWithEmailAndPassword(_) | Self::Listen | Self::ClearError => None,
        }
    }

    /// True for commands whose `start` action puts the slice into `loading`.
    pub fn starts_loading(&self) -> bool {
        !matches!(self, Self::Listen | Self::ClearError)
    }

    /// Action dispatched synchronously when the command runs.
    pub fn start_action(&self) -> AuthAction {
        match self {
            Self::SignInWithEmailAndPassword(_)
            | Self::SignInWithGoogle
            | Self::SignInWithFacebook
            | Self::CreateUserWithEmailAndPassword(_) => AuthAction::authenticate_start(),
            Self::SignOut => AuthAction::unauthenticate_start(),
            Self::Listen => AuthAction::listening(),
            Self::ClearError => AuthAction::clear_error(),
        }
    }

    /// Action dispatched when the provider rejects the command.
    pub fn failure_action(&self, error: AuthError) -> AuthAction {
        match self {
            Self::SignOut => AuthAction::unauthenticate_failure(error),
            _ => AuthAction::authenticate_failure(error),
        }
    }
}

/// Deferred work left over after [`AuthActions::execute`] returns.
pub enum Effect {
    /// Nothing left to do.
    Done,
    /// Provider round-trip with its failure handler attached.
    Pending(LocalBoxFuture<'static, ()>),
    /// Session listener registration.
    Listening(Subscription),
}

impl Effect {
    /// Run the effect on the UI task queue. The session listener is kept for
    /// the rest of the page lifetime.
    #[cfg(feature = "csr")]
    pub fn spawn(self) {
        match self {
            Self::Done => {}
            Self::Pending(work) => leptos::task::spawn_local(work),
            Self::Listening(subscription) => subscription.forget(),
        }
    }
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done => f.write_str("Done"),
            Self::Pending(_) => f.write_str("Pending"),
            Self::Listening(subscription) => {
                f.debug_tuple("Listening").field(subscription).finish()
            }
        }
    }
}

/// Map one session observation to the auth action it implies.
pub fn session_action(result: SessionResult) -> AuthAction {
    match result {
        Err(error) => AuthAction::authenticate_failure(error),
        Ok(Some(user)) => AuthAction::authenticate_success(user),
        Ok(None) => AuthAction::unauthenticate_success(),
    }
}

fn session_callback(dispatch: Dispatcher) -> SessionCallback {
    Arc::new(move |result| {
        let action = session_action(result);
        log::info!("session changed: {}", action.action_type());
        dispatch.dispatch(action);
    })
}

/// Command executor bound to an identity provider and a status sink.
pub struct AuthActions<P, S> {
    provider: P,
    status: S,
}

impl<P, S> AuthActions<P, S>
where
    P: AuthProvider,
    S: StatusSink,
{
    pub fn new(provider: P, status: S) -> Self {
        Self { provider, status }
    }

    /// Run the synchronous phase of `command` and return what remains.
    pub fn execute(&self, command: AuthCommand, dispatch: &Dispatcher) -> Effect {
        match command.status_message() {
            Some(message) => self.status.set(message),
            None if command.starts_loading() => self.status.clear(),
            None => {}
        }
        dispatch.dispatch(command.start_action());

        let call = match &command {
            AuthCommand::SignInWithEmailAndPassword(credentials) => {
                self.provider.sign_in_with_email_and_password(credentials)
            }
            AuthCommand::SignInWithGoogle => self.provider.sign_in_with_google(),
            AuthCommand::SignInWithFacebook => self.provider.sign_in_with_facebook(),
            AuthCommand::CreateUserWithEmailAndPassword(credentials) => {
                self.provider.create_user_with_email_and_password(credentials)
            }
            AuthCommand::SignOut => self.provider.end_session(),
            AuthCommand::Listen => {
                return Effect::Listening(self.provider.listen(session_callback(dispatch.clone())));
            }
            AuthCommand::ClearError => return Effect::Done,
        };

        let dispatch = dispatch.clone();
        Effect::Pending(Box::pin(async move {
            if let Err(error) = call.await {
                log::warn!("auth command failed: {error}");
                dispatch.dispatch(command.failure_action(error));
            }
        }))
    }
}
