//! Reading-progress bar pinned to the top of the viewport.

use leptos::prelude::*;

use crate::state::scroll::ScrollState;

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let width = move || format!("{}%", scroll.with(|s| s.percent_end));

    view! {
        <div class="scroll-progress">
            <div class="scroll-progress-bar" style:width=width></div>
        </div>
    }
}
