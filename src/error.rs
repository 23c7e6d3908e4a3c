//! Board Errors and Notices
//!
//! Every failure is caught at the action that caused it and shown as a toast.

use thiserror::Error;

use crate::config::{ERROR_CLASS, SUCCESS_CLASS};
use crate::models::TaskKey;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    /// Network failure or non-success response
    #[error("{0}")]
    Transport(String),

    /// Body was not a task table
    #[error("{0}")]
    Parse(String),

    /// Required input missing
    #[error("{0}")]
    Validation(String),

    #[error("「{}」は更新中です", .0.name)]
    Busy(TaskKey),

    #[error("タスク「{}」が見つかりません", .0.name)]
    UnknownTask(TaskKey),

    #[error("タスク「{}」の行位置が変わりました。最新の表を表示しています", .0.name)]
    RowMoved(TaskKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => SUCCESS_CLASS,
            NoticeKind::Error => ERROR_CLASS,
        }
    }
}

/// Transient user-visible notification
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }
}

impl From<&BoardError> for Notice {
    fn from(err: &BoardError) -> Self {
        match err {
            // Validation messages are already phrased for the user
            BoardError::Validation(msg) => Notice::error(msg.clone()),
            other => Notice::error(format!("エラーが発生しました: {}", other)),
        }
    }
}

impl From<BoardError> for Notice {
    fn from(err: BoardError) -> Self {
        Notice::from(&err)
    }
}
