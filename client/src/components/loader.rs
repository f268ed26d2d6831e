//! Spinner with the current status caption.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use leptos::prelude::*;

use crate::app::use_app;
use crate::state::focal;
use crate::state::root::AppState;

pub const DEFAULT_CAPTION: &str = "Loading...";

/// Caption for the loader: the latest status message, if any.
pub fn loader_caption(state: &AppState) -> String {
    focal::message(state).unwrap_or(DEFAULT_CAPTION).to_owned()
}

#[component]
pub fn Loader() -> impl IntoView {
    let state = use_app().state;

    view! {
        <div class="loader" role="status">
            <span class="loader__spinner"></span>
            <span class="loader__caption">{move || loader_caption(&state.get())}</span>
        </div>
    }
}
