//! Task Board Controller
//!
//! The board's user actions. Each one talks to the bridge, settles the
//! result against the `Board`, and reports what the user should see.

use leptos::prelude::*;

use crate::board::{Applied, Board, RowChange};
use crate::commands::TaskBridge;
use crate::error::{BoardError, Notice};
use crate::models::TaskKey;

/// Somewhere the board lives (a signal in the app, a plain cell in tests)
pub trait BoardCell: Clone {
    /// `None` once the owner has been disposed
    fn with_board<R>(&self, f: impl FnOnce(&mut Board) -> R) -> Option<R>;
}

impl BoardCell for RwSignal<Board> {
    fn with_board<R>(&self, f: impl FnOnce(&mut Board) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Note being edited in the modal. Owned by the modal, handed to `save_note`.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub key: TaskKey,
    pub original: String,
}

impl EditSession {
    pub fn open(key: TaskKey, current_note: impl Into<String>) -> Self {
        Self { key, original: current_note.into() }
    }
}

/// What an action leaves for the user: an optional success toast, or an error
pub type Outcome = Result<Option<Notice>, BoardError>;

#[derive(Clone)]
pub struct Controller<B, C> {
    bridge: B,
    board: C,
}

impl<B: TaskBridge, C: BoardCell> Controller<B, C> {
    pub fn new(bridge: B, board: C) -> Self {
        Self { bridge, board }
    }

    pub fn board(&self) -> &C {
        &self.board
    }

    pub async fn fetch_todays_tasks(&self) -> Outcome {
        let Some(ticket) = self.board.with_board(Board::begin_read) else {
            return Ok(None);
        };
        let result = self.bridge.todays_tasks().await;
        if let Err(e) = &result {
            crate::log::error("FETCH", &e.to_string());
        }
        self.settle(&ticket, result)?;
        Ok(None)
    }

    pub async fn toggle_status(&self, key: &TaskKey, new_status: &str) -> Outcome {
        let change = RowChange::Status(new_status.to_string());
        let Some(ticket) = self.board.with_board(|b| b.begin_mutation(key, change)) else {
            return Ok(None);
        };
        let ticket = ticket?;
        let index = ticket.target.as_ref().map(|t| t.index).unwrap_or_default();

        crate::log::info("TOGGLE", &format!("{} (row {}) -> {}", key, index, new_status));
        let result = self.bridge.update_status(index, new_status).await;
        self.settle(&ticket, result)?;
        Ok(Some(Notice::success(format!("タスクを{}に更新しました", new_status))))
    }

    pub async fn save_note(&self, session: &EditSession, note: &str) -> Outcome {
        let change = RowChange::Note(note.to_string());
        let Some(ticket) = self.board.with_board(|b| b.begin_mutation(&session.key, change)) else {
            return Ok(None);
        };
        let ticket = ticket?;
        let index = ticket.target.as_ref().map(|t| t.index).unwrap_or_default();

        crate::log::info("NOTE", &format!("{} (row {}) saving {} chars", session.key, index, note.chars().count()));
        let result = self.bridge.update_note(index, note).await;
        self.settle(&ticket, result)?;
        Ok(Some(Notice::success("メモを更新しました")))
    }

    /// Whitespace-only input is rejected; anything else is sent as typed
    pub async fn submit_email(&self, email: &str) -> Outcome {
        if email.trim().is_empty() {
            return Err(BoardError::Validation("メールアドレスを入力してください".to_string()));
        }

        let Some(ticket) = self.board.with_board(Board::begin_read) else {
            return Ok(None);
        };
        let result = self.bridge.tasks_by_email(email).await;
        self.settle(&ticket, result)?;
        self.board.with_board(Board::show_board);
        Ok(None)
    }

    fn settle(
        &self,
        ticket: &crate::board::Ticket,
        result: Result<crate::models::TaskTable, BoardError>,
    ) -> Result<(), BoardError> {
        match self.board.with_board(|b| b.finish(ticket, result)) {
            Some(Ok(Applied::Stale)) => {
                crate::log::warn("BOARD", &format!("dropped stale response #{}", ticket.seq));
                Ok(())
            }
            Some(Ok(Applied::Rendered)) | None => Ok(()),
            Some(Err(e)) => Err(e),
        }
    }
}
