//! Table Rendering
//!
//! Derives everything the task table shows from a `TaskTable`. The Leptos
//! component only lays this out, so two renders of the same table are equal.

use crate::config::{
    ACTION_COLUMN_LABEL, COMPLETED_STATUS, ERROR_CLASS, INCOMPLETE_STATUS, MARK_COMPLETE_LABEL,
    MARK_INCOMPLETE_LABEL, SUCCESS_CLASS,
};
use crate::models::{TaskKey, TaskTable};
use crate::progress::Progress;

#[derive(Debug, Clone, PartialEq)]
pub struct ToggleView {
    pub label: &'static str,
    pub color: &'static str,
    /// Status to send when clicked
    pub target_status: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub key: TaskKey,
    pub row_class: &'static str,
    pub task: String,
    pub status: String,
    pub completion_time: String,
    pub note: String,
    pub toggle: ToggleView,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<RowView>,
    pub progress: Progress,
}

impl TableView {
    pub fn build(table: &TaskTable) -> Self {
        let mut headers = table.headers.clone();
        headers.push(ACTION_COLUMN_LABEL.to_string());

        let rows = table
            .rows
            .iter()
            .map(|row| {
                let done = row.is_completed();
                let toggle = if done {
                    ToggleView {
                        label: MARK_INCOMPLETE_LABEL,
                        color: ERROR_CLASS,
                        target_status: INCOMPLETE_STATUS,
                    }
                } else {
                    ToggleView {
                        label: MARK_COMPLETE_LABEL,
                        color: SUCCESS_CLASS,
                        target_status: COMPLETED_STATUS,
                    }
                };
                RowView {
                    key: row.key.clone(),
                    row_class: if done { "completed" } else { "" },
                    task: row.task.clone(),
                    status: row.status.clone(),
                    completion_time: row.completion_time.clone(),
                    note: row.note.clone(),
                    toggle,
                }
            })
            .collect();

        Self {
            headers,
            rows,
            progress: Progress::from_rows(&table.rows),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PENDING: &str = r#"[["Task","Status","Time","Note"],["Water plants","未完了","",""]]"#;
    const DONE: &str = r#"[["Task","Status","Time","Note"],["Water plants","完了","09:00","done"]]"#;

    #[test]
    fn test_pending_row() {
        let view = TableView::build(&TaskTable::parse_json(PENDING).unwrap());

        assert_eq!(view.headers, vec!["Task", "Status", "Time", "Note", "アクション"]);
        assert_eq!(view.rows.len(), 1);
        let row = &view.rows[0];
        assert_eq!(row.status, "未完了");
        assert_eq!(row.row_class, "");
        assert_eq!(row.toggle.label, "完了にする");
        assert_eq!(row.toggle.color, "green");
        assert_eq!(row.toggle.target_status, "完了");
        assert_eq!(view.progress.label(), "完了: 0/1 タスク (0%)");
    }

    #[test]
    fn test_completed_row() {
        let view = TableView::build(&TaskTable::parse_json(DONE).unwrap());

        let row = &view.rows[0];
        assert_eq!(row.row_class, "completed");
        assert_eq!(row.toggle.label, "未完了に戻す");
        assert_eq!(row.toggle.color, "red");
        assert_eq!(row.toggle.target_status, "未完了");
        assert_eq!(row.completion_time, "09:00");
        assert_eq!(row.note, "done");
        assert_eq!(view.progress.label(), "完了: 1/1 タスク (100%)");
    }

    #[test]
    fn test_build_is_idempotent() {
        let table = TaskTable::parse_json(
            r#"[["Task","Status","Time","Note"],["A","完了","08:00","x"],["B","未完了","",""],["A","未完了","","<b>y</b>"]]"#,
        )
        .unwrap();
        assert_eq!(TableView::build(&table), TableView::build(&table));
    }
}
