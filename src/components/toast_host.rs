//! Toast Host Component

use leptos::prelude::*;

use crate::store::{store_dismiss_toast, use_ui_store, UiStateStoreFields};

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_ui_store();

    view! {
        <div id="toast-container">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast {}", toast.notice.kind.class())
                            on:click=move |_| store_dismiss_toast(&store, id)
                        >
                            {toast.notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
