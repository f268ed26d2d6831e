//! REST-backed [`AuthProvider`] for the browser build.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, OAuth sign-in by
//! navigating the window, and a `gloo-timers` poll loop feeding the session
//! listeners.
//! Native builds (tests, tooling): every operation resolves to an
//! "unavailable" [`AuthError`] and listeners never fire.
//!
//! ERROR HANDLING
//! ==============
//! HTTP and transport failures become `AuthError` values so the command
//! executor can turn them into failure actions. A poll that cannot reach the
//! server is logged and skipped rather than reported as a sign-out.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[cfg(any(test, feature = "csr"))]
use serde::Deserialize;

use super::provider::{AuthProvider, Credentials, ProviderFuture, SessionCallback, SessionResult};
use crate::config::AuthConfig;
use crate::state::auth::AuthError;
use crate::state::subscription::Subscription;

const SESSION_PATH: &str = "session";
const USERS_PATH: &str = "users";
const LOGOUT_PATH: &str = "logout";
const ME_PATH: &str = "me";
const GOOGLE_PATH: &str = "google";
const FACEBOOK_PATH: &str = "facebook";

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(any(test, feature = "csr"))]
fn request_failed_message(status: u16) -> String {
    format!("auth request failed: {status}")
}

fn unavailable() -> AuthError {
    AuthError::with_code("auth/unavailable", "not available outside the browser")
}

#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

/// Decode an error response body, falling back to a status-derived message.
#[cfg(any(test, feature = "csr"))]
fn error_from_response(status: u16, body: &str) -> AuthError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let code = parsed.code.unwrap_or_else(|| format!("http/{status}"));
    match parsed.message.or(parsed.error).filter(|m| !m.trim().is_empty()) {
        Some(message) => AuthError::with_code(code, message),
        None => AuthError::with_code(code, request_failed_message(status)),
    }
}

#[cfg(feature = "csr")]
fn network_error(err: &gloo_net::Error) -> AuthError {
    AuthError::with_code("auth/network-request-failed", err.to_string())
}

struct ListenerEntry {
    id: u64,
    callback: SessionCallback,
    last: Option<SessionResult>,
}

/// Registered session listeners and the last result each one was given.
#[derive(Default)]
struct ListenerSet {
    next_id: u64,
    entries: Vec<ListenerEntry>,
}

impl ListenerSet {
    fn add(&mut self, callback: SessionCallback) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(ListenerEntry { id, callback, last: None });
        id
    }

    fn remove(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }

    /// Callbacks (all, or just `only`) whose last delivery differs from
    /// `result`. Marks them as having seen it.
    fn changed(&mut self, only: Option<u64>, result: &SessionResult) -> Vec<SessionCallback> {
        self.entries
            .iter_mut()
            .filter(|entry| only.is_none_or(|id| id == entry.id))
            .filter(|entry| entry.last.as_ref() != Some(result))
            .map(|entry| {
                entry.last = Some(result.clone());
                Arc::clone(&entry.callback)
            })
            .collect()
    }
}

fn deliver(listeners: &Mutex<ListenerSet>, only: Option<u64>, result: &SessionResult) {
    let callbacks = lock(listeners).changed(only, result);
    for callback in callbacks {
        callback(result.clone());
    }
}

/// Fetch the current session from `GET {base}/me`.
///
/// `None` means the server could not be asked; `401` means signed out.
async fn fetch_session(me_url: &str) -> Option<SessionResult> {
    #[cfg(feature = "csr")]
    {
        let resp = match gloo_net::http::Request::get(me_url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("session check failed: {e}");
                return None;
            }
        };
        if resp.status() == 401 {
            return Some(Ok(None));
        }
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Some(Err(error_from_response(resp.status(), &body)));
        }
        let user = resp.json::<Option<crate::state::auth::AuthUser>>().await;
        Some(user.map_err(|e| network_error(&e)))
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("session check skipped outside the browser: {me_url}");
        None
    }
}

async fn refresh(listeners: &Mutex<ListenerSet>, me_url: &str) {
    if let Some(result) = fetch_session(me_url).await {
        deliver(listeners, None, &result);
    }
}

/// `POST` to an auth endpoint, optionally with a JSON body.
async fn post(url: &str, body: Option<&Credentials>) -> Result<(), AuthError> {
    #[cfg(feature = "csr")]
    {
        let request = gloo_net::http::Request::post(url);
        let request = match body {
            Some(body) => request.json(body).map_err(|e| network_error(&e))?,
            None => request.build().map_err(|e| network_error(&e))?,
        };
        let resp = request.send().await.map_err(|e| network_error(&e))?;
        if !resp.ok() {
            let text = resp.text().await.unwrap_or_default();
            return Err(error_from_response(resp.status(), &text));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("auth request to {url} skipped (body: {})", body.is_some());
        Err(unavailable())
    }
}

/// Hand the whole window over to an OAuth entry point.
fn navigate(url: &str) -> Result<(), AuthError> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window().ok_or_else(unavailable)?;
        window
            .location()
            .set_href(url)
            .map_err(|_| {
                AuthError::with_code("auth/redirect-failed", format!("could not open {url}"))
            })
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("redirect to {url} skipped outside the browser");
        Err(unavailable())
    }
}

/// Auth provider speaking to the REST auth API under [`AuthConfig::api_base`].
#[derive(Clone)]
pub struct HttpAuthProvider {
    config: AuthConfig,
    listeners: Arc<Mutex<ListenerSet>>,
}

impl HttpAuthProvider {
    pub fn new(config: AuthConfig) -> Self {
        Self { config, listeners: Arc::new(Mutex::new(ListenerSet::default())) }
    }

    /// Post to `path`, then push the resulting session to every listener.
    fn submit(&self, path: &str, body: Option<Credentials>) -> ProviderFuture {
        let url = self.config.endpoint(path);
        let me_url = self.config.endpoint(ME_PATH);
        let listeners = Arc::clone(&self.listeners);
        Box::pin(async move {
            post(&url, body.as_ref()).await?;
            refresh(&listeners, &me_url).await;
            Ok(())
        })
    }

    fn redirect(&self, path: &str) -> ProviderFuture {
        let url = self.config.endpoint(path);
        Box::pin(async move { navigate(&url) })
    }

    #[cfg(feature = "csr")]
    fn spawn_poll(&self, id: u64, active: Arc<AtomicBool>) {
        let listeners = Arc::clone(&self.listeners);
        let me_url = self.config.endpoint(ME_PATH);
        let interval = self.config.poll_interval();
        leptos::task::spawn_local(async move {
            while active.load(Ordering::Acquire) {
                if let Some(result) = fetch_session(&me_url).await {
                    if active.load(Ordering::Acquire) {
                        deliver(&listeners, Some(id), &result);
                    }
                }
                gloo_timers::future::sleep(interval).await;
            }
        });
    }

    #[cfg(not(feature = "csr"))]
    fn spawn_poll(&self, id: u64, active: Arc<AtomicBool>) {
        log::debug!(
            "session poll {id} not started outside the browser (active: {})",
            active.load(Ordering::Acquire)
        );
    }
}

impl AuthProvider for HttpAuthProvider {
    fn sign_in_with_email_and_password(&self, credentials: &Credentials) -> ProviderFuture {
        self.submit(SESSION_PATH, Some(credentials.clone()))
    }

    fn sign_in_with_google(&self) -> ProviderFuture {
        self.redirect(GOOGLE_PATH)
    }

    fn sign_in_with_facebook(&self) -> ProviderFuture {
        self.redirect(FACEBOOK_PATH)
    }

    fn create_user_with_email_and_password(&self, credentials: &Credentials) -> ProviderFuture {
        self.submit(USERS_PATH, Some(credentials.clone()))
    }

    fn end_session(&self) -> ProviderFuture {
        self.submit(LOGOUT_PATH, None)
    }

    fn listen(&self, callback: SessionCallback) -> Subscription {
        let id = lock(&self.listeners).add(callback);
        let active = Arc::new(AtomicBool::new(true));
        self.spawn_poll(id, Arc::clone(&active));
        let listeners = Arc::clone(&self.listeners);
        Subscription::new(move || {
            active.store(false, Ordering::Release);
            lock(&listeners).remove(id);
        })
    }
}
