//! Email Form Component
//!
//! Alternate entry: look up a checklist by email address.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn EmailForm() -> impl IntoView {
    let ctx = use_app_context();
    let (email, set_email) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_email(email.get_untracked());
    };

    view! {
        <div id="email-form-container">
            <form class="email-form" on:submit=on_submit>
                <div class="input-field">
                    <input
                        id="emailInput"
                        type="email"
                        placeholder="メールアドレス"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn waves-effect waves-light">
                    "チェックリストを表示"
                </button>
            </form>
        </div>
    }
}
