//! Flex box that places its children along both axes.

#[cfg(test)]
#[path = "alignment_test.rs"]
mod alignment_test;

use leptos::prelude::*;

/// Placement along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    Start,
    #[default]
    Center,
    End,
}

impl Alignment {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Start => "flex-start",
            Self::Center => "center",
            Self::End => "flex-end",
        }
    }
}

/// Inline style for a full-size flex box with the given placement.
pub fn alignment_style(horizontal: Alignment, vertical: Alignment) -> String {
    format!(
        "display: flex; width: 100%; height: 100%; justify-content: {}; align-items: {}",
        horizontal.as_css(),
        vertical.as_css()
    )
}

/// Fills its parent and aligns children (centered by default).
#[component]
pub fn AlignmentContainer(
    #[prop(optional)] horizontal: Alignment,
    #[prop(optional)] vertical: Alignment,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="kit-alignment" style=alignment_style(horizontal, vertical)>
            {children()}
        </div>
    }
}
