//! UI State Store
//!
//! Toast queue kept in a `reactive_stores::Store` for field-level reactivity.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::config::TOAST_DURATION_MS;
use crate::controller::Outcome;
use crate::error::Notice;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Visible toasts, oldest first
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
}

pub type UiStore = Store<UiState>;

pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show a notice and schedule its dismissal
pub fn store_push_notice(store: &UiStore, notice: Notice) {
    let id = {
        let next_field = store.next_toast_id();
        let mut next = next_field.write();
        *next += 1;
        *next
    };
    store.toasts().write().push(Toast { id, notice });

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(TOAST_DURATION_MS).await;
        store_dismiss_toast(&store, id);
    });
}

pub fn store_dismiss_toast(store: &UiStore, id: u32) {
    store.toasts().write().retain(|toast| toast.id != id);
}

/// Turn an action's outcome into toasts
pub fn store_report(store: &UiStore, outcome: &Outcome) {
    match outcome {
        Ok(Some(notice)) => store_push_notice(store, notice.clone()),
        Ok(None) => {}
        Err(err) => store_push_notice(store, Notice::from(err)),
    }
}
