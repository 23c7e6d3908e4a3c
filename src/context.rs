//! Application Context
//!
//! Board signal and controller shared with every component via the Leptos
//! Context API. Each action runs on `spawn_local` and reports to the toast store.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::board::Board;
use crate::commands::ScriptBridge;
use crate::controller::{Controller, EditSession};
use crate::models::TaskKey;
use crate::store::{store_report, UiStore};

pub type BoardController = Controller<ScriptBridge, RwSignal<Board>>;

#[derive(Clone)]
pub struct AppContext {
    /// Last authoritative table, screen and in-flight rows
    pub board: RwSignal<Board>,
    controller: BoardController,
    ui: UiStore,
}

impl AppContext {
    pub fn new(bridge: ScriptBridge, board: RwSignal<Board>, ui: UiStore) -> Self {
        Self {
            board,
            controller: Controller::new(bridge, board),
            ui,
        }
    }

    /// Load today's tasks
    pub fn fetch(&self) {
        let ctl = self.controller.clone();
        let ui = self.ui;
        spawn_local(async move {
            let outcome = ctl.fetch_todays_tasks().await;
            store_report(&ui, &outcome);
        });
    }

    pub fn toggle(&self, key: TaskKey, new_status: &'static str) {
        let ctl = self.controller.clone();
        let ui = self.ui;
        spawn_local(async move {
            let outcome = ctl.toggle_status(&key, new_status).await;
            store_report(&ui, &outcome);
        });
    }

    /// Save a note; `done` learns whether the modal may close
    pub fn save_note(&self, session: EditSession, note: String, done: impl FnOnce(bool) + 'static) {
        let ctl = self.controller.clone();
        let ui = self.ui;
        spawn_local(async move {
            let outcome = ctl.save_note(&session, &note).await;
            store_report(&ui, &outcome);
            done(outcome.is_ok());
        });
    }

    pub fn submit_email(&self, email: String) {
        let ctl = self.controller.clone();
        let ui = self.ui;
        spawn_local(async move {
            let outcome = ctl.submit_email(&email).await;
            store_report(&ui, &outcome);
        });
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
