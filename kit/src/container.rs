//! Centered, width-capped page column.

use leptos::prelude::*;

pub const CONTAINER_CLASS: &str = "kit-container";

#[component]
pub fn Container(children: Children) -> impl IntoView {
    view! { <div class=CONTAINER_CLASS>{children()}</div> }
}
