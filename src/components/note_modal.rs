//! Note Modal Component
//!
//! Edits one row's note. The open `EditSession` belongs to this modal; a save
//! only closes the modal if that same session is still the one shown.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::controller::EditSession;

#[component]
pub fn NoteModal(editing: RwSignal<Option<EditSession>>) -> impl IntoView {
    let ctx = use_app_context();
    let (draft, set_draft) = signal(String::new());
    let (saving, set_saving) = signal(false);

    // Pre-fill whenever a new session opens
    Effect::new(move |_| {
        if let Some(session) = editing.get() {
            set_draft.set(session.original);
        }
    });

    let title = move || {
        editing.with(|e| e.as_ref().map(|s| format!("メモ: {}", s.key.name)).unwrap_or_default())
    };

    let save = move |_| {
        let Some(session) = editing.get_untracked() else { return };
        let note = draft.get_untracked();
        set_saving.set(true);
        ctx.save_note(session.clone(), note, move |saved| {
            set_saving.set(false);
            if saved {
                editing.update(|open| {
                    if open.as_ref() == Some(&session) {
                        *open = None;
                    }
                });
            }
        });
    };

    view! {
        <Show when=move || editing.with(|e| e.is_some())>
            <div class="modal-overlay" on:click=move |_| editing.set(None)></div>
            <div id="noteModal" class="modal open">
                <div class="modal-content">
                    <h5>{title}</h5>
                    <textarea
                        id="noteText"
                        class="materialize-textarea"
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="modal-footer">
                    <button class="btn-flat" on:click=move |_| editing.set(None)>
                        "キャンセル"
                    </button>
                    <button
                        class="btn waves-effect waves-light blue"
                        disabled=move || saving.get()
                        on:click=save.clone()
                    >
                        "保存"
                    </button>
                </div>
            </div>
        </Show>
    }
}
