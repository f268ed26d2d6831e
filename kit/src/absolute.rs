//! Absolutely positioned layer, e.g. a full-screen overlay.

#[cfg(test)]
#[path = "absolute_test.rs"]
mod absolute_test;

use leptos::prelude::*;

/// Edge offsets in CSS pixels; `None` leaves the edge unset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offsets {
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
}

impl Offsets {
    /// Pin all four edges to the parent.
    pub fn fill() -> Self {
        Self { top: Some(0.0), left: Some(0.0), right: Some(0.0), bottom: Some(0.0) }
    }

    /// Edges set here win; unset edges fall back to `base`.
    pub fn or(self, base: Self) -> Self {
        Self {
            top: self.top.or(base.top),
            left: self.left.or(base.left),
            right: self.right.or(base.right),
            bottom: self.bottom.or(base.bottom),
        }
    }
}

/// Inline style for an absolute layer. `extra` is appended verbatim.
pub fn absolute_style(offsets: Offsets, extra: Option<&str>) -> String {
    let mut style = String::from("position: absolute");
    for (edge, value) in [
        ("top", offsets.top),
        ("left", offsets.left),
        ("right", offsets.right),
        ("bottom", offsets.bottom),
    ] {
        if let Some(px) = value {
            style.push_str(&format!("; {edge}: {px}px"));
        }
    }
    if let Some(extra) = extra.map(str::trim).filter(|e| !e.is_empty()) {
        style.push_str("; ");
        style.push_str(extra.trim_end_matches(';'));
    }
    style
}

/// Absolutely positioned layer. `fill` pins all four edges; explicit edge
/// props still override it.
#[component]
pub fn AbsoluteContainer(
    #[prop(optional)] fill: bool,
    #[prop(optional)] top: Option<f64>,
    #[prop(optional)] left: Option<f64>,
    #[prop(optional)] right: Option<f64>,
    #[prop(optional)] bottom: Option<f64>,
    #[prop(optional, into)] style: Option<String>,
    children: Children,
) -> impl IntoView {
    let base = if fill { Offsets::fill() } else { Offsets::default() };
    let offsets = Offsets { top, left, right, bottom }.or(base);
    view! {
        <div class="kit-absolute" style=absolute_style(offsets, style.as_deref())>
            {children()}
        </div>
    }
}
