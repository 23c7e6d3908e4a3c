//! Daily Checklist App
//!
//! Root component: wires config, board state and context, then lays out the
//! date header, the email form or the board, the note modal and toasts.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::{Board, Screen};
use crate::commands::ScriptBridge;
use crate::components::{DateHeader, EmailForm, NoteModal, ProgressBar, TaskTable, ToastHost};
use crate::config::{AppConfig, EntryMode};
use crate::context::AppContext;
use crate::controller::EditSession;
use crate::store::UiState;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_document();
    crate::log::info("APP", &format!("endpoint={} entry={:?}", config.endpoint, config.entry_mode));

    let initial_screen = match config.entry_mode {
        EntryMode::Direct => Screen::Board,
        EntryMode::Email => Screen::EmailEntry,
    };

    // State
    let board = RwSignal::new(Board::new(initial_screen));
    let editing = RwSignal::new(None::<EditSession>);
    let ui = Store::new(UiState::default());

    // Provide context to all children
    let ctx = AppContext::new(ScriptBridge::new(config.endpoint), board, ui);
    provide_context(ui);
    provide_context(ctx.clone());

    // Initial load
    Effect::new(move |_| {
        ctx.fetch();
    });

    let screen = Memo::new(move |_| board.with(|b| b.screen()));

    view! {
        <div class="container">
            <DateHeader />

            {move || match screen.get() {
                Screen::EmailEntry => view! { <EmailForm /> }.into_any(),
                Screen::Board => view! {
                    <ProgressBar />
                    <TaskTable editing=editing />
                }.into_any(),
            }}

            <NoteModal editing=editing />
            <ToastHost />
        </div>
    }
}
