//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::loading::Loading;
use crate::config::AuthConfig;
use crate::net::api::HttpAuthProvider;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::actions::{AuthActions, AuthCommand};
use crate::state::auth::AuthSelectors;
use crate::state::root::AppState;
use crate::state::store::{Dispatcher, Store};
use crate::util::auth::{install_home_redirect, install_unauth_redirect};

/// Everything a view needs to read auth state and run auth commands.
#[derive(Clone)]
pub struct AppContext {
    /// Sole owner of the store; dispatchers only hold weak references.
    store: Store,
    pub actions: Arc<AuthActions<HttpAuthProvider, Dispatcher>>,
    pub selectors: Arc<AuthSelectors>,
    /// Signal mirror of the store state; updated on every change.
    pub state: RwSignal<Arc<AppState>>,
}

impl AppContext {
    pub fn new(config: AuthConfig) -> Self {
        let store = Store::default();
        let state = RwSignal::new(store.state());
        store.subscribe(move |next| state.set(Arc::clone(next))).forget();
        let provider = HttpAuthProvider::new(config);
        let actions = Arc::new(AuthActions::new(provider, store.dispatcher()));
        Self {
            store,
            actions,
            selectors: Arc::new(AuthSelectors::new()),
            state,
        }
    }

    /// Run an auth command and schedule whatever it leaves behind.
    pub fn execute(&self, command: AuthCommand) {
        let effect = self.actions.execute(command, &self.store.dispatcher());
        #[cfg(feature = "csr")]
        effect.spawn();
        #[cfg(not(feature = "csr"))]
        log::debug!("discarding {effect:?} outside the browser");
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

/// Root application component.
///
/// Builds the store, starts the session listener and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AuthConfig::from_build_env().unwrap_or_else(|e| {
        log::warn!("{e}; falling back to default auth config");
        AuthConfig::default()
    });
    let app = AppContext::new(config);
    app.execute(AuthCommand::Listen);
    provide_context(app);

    view! {
        <Title text="Spent"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginRoute/>
                <Route path=StaticSegment("") view=HomeRoute/>
            </Routes>
        </Router>
    }
}

#[component]
fn HomeRoute() -> impl IntoView {
    let state = use_app().state;
    install_unauth_redirect(state, use_navigate());

    view! {
        <Show when=move || !state.get().auth.loading fallback=|| view! { <Loading/> }>
            <DashboardPage/>
        </Show>
    }
}

#[component]
fn LoginRoute() -> impl IntoView {
    let state = use_app().state;
    install_home_redirect(state, use_navigate());

    view! {
        <Show when=move || !state.get().auth.loading fallback=|| view! { <Loading/> }>
            <LoginPage/>
        </Show>
    }
}
