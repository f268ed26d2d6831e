//! Full-screen loading layout shown until the session is known.

use leptos::prelude::*;

use kit::{AbsoluteContainer, AlignmentContainer};

use super::loader::Loader;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <AbsoluteContainer fill=true style="background: white">
                <AlignmentContainer>
                    <Loader/>
                </AlignmentContainer>
            </AbsoluteContainer>
        </div>
    }
}
