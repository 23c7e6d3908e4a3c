//! Progress Bar Component

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ProgressBar() -> impl IntoView {
    let board = use_app_context().board;
    let progress = Memo::new(move |_| {
        board.with(|b| b.view().map(|v| v.progress).unwrap_or_default())
    });

    view! {
        <div id="progress-container">
            <div class="progress">
                <div
                    id="progress-bar"
                    class="determinate"
                    style:width=move || progress.get().bar_width()
                ></div>
            </div>
            <p id="progress-text">{move || progress.get().label()}</p>
        </div>
    }
}
