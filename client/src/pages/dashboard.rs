//! Dashboard page for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It shows who is signed in and
//! offers sign-out; the route wrapper handles the redirect to `/login`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use kit::Container;

use crate::app::use_app;
use crate::state::actions::AuthCommand;

/// Single uppercase letter shown when the user has no photo.
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let app = StoredValue::new(use_app());

    let name = move || {
        app.with_value(|app| app.selectors.display_name(&app.state.get()))
            .unwrap_or_default()
    };
    let photo = move || app.with_value(|app| app.selectors.user_photo(&app.state.get()));
    let on_sign_out = move |_| app.with_value(|app| app.execute(AuthCommand::SignOut));

    view! {
        <Container>
            <header class="dashboard-header">
                <Show
                    when=move || photo().is_some()
                    fallback=move || {
                        view! {
                            <span class="avatar avatar--initial">
                                {move || avatar_initial(&name())}
                            </span>
                        }
                    }
                >
                    <img class="avatar" src=move || photo().unwrap_or_default() alt="" />
                </Show>
                <span class="dashboard-header__name">{name}</span>
                <button class="dashboard-header__sign-out" type="button" on:click=on_sign_out>
                    "Sign out"
                </button>
            </header>
            <section class="dashboard-empty">
                <p>"No expenses yet."</p>
            </section>
        </Container>
    }
}
