//! Board State
//!
//! Holds the last authoritative table and orders responses against requests.
//! Rows with a mutation in flight are locked until their response lands, and
//! a table older than the one already shown is dropped.

use std::collections::BTreeSet;

use crate::error::BoardError;
use crate::models::{TaskKey, TaskRow, TaskTable};
use crate::render::TableView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    EmailEntry,
    Board,
}

/// Change a mutation asks the backend to make
#[derive(Debug, Clone, PartialEq)]
pub enum RowChange {
    Status(String),
    Note(String),
}

impl RowChange {
    fn applied_to(&self, row: &TaskRow) -> bool {
        match self {
            RowChange::Status(status) => &row.status == status,
            RowChange::Note(note) => &row.note == note,
        }
    }
}

/// Row addressed by a mutation and its wire index at send time
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub key: TaskKey,
    pub index: usize,
    pub change: RowChange,
}

/// Handle for one table-producing request
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub seq: u64,
    pub target: Option<Target>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Rendered,
    /// A newer table was already shown
    Stale,
}

#[derive(Debug, Clone)]
pub struct Board {
    table: Option<TaskTable>,
    view: Option<TableView>,
    screen: Screen,
    in_flight: BTreeSet<TaskKey>,
    next_seq: u64,
    applied_seq: u64,
}

impl Board {
    pub fn new(screen: Screen) -> Self {
        Self {
            table: None,
            view: None,
            screen,
            in_flight: BTreeSet::new(),
            next_seq: 1,
            applied_seq: 0,
        }
    }

    pub fn table(&self) -> Option<&TaskTable> {
        self.table.as_ref()
    }

    pub fn view(&self) -> Option<&TableView> {
        self.view.as_ref()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn show_board(&mut self) {
        self.screen = Screen::Board;
    }

    pub fn is_busy(&self, key: &TaskKey) -> bool {
        self.in_flight.contains(key)
    }

    fn take_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Start a read (today's tasks or email lookup)
    pub fn begin_read(&mut self) -> Ticket {
        Ticket { seq: self.take_seq(), target: None }
    }

    /// Start a mutation on one row. Rejects rows already in flight.
    pub fn begin_mutation(&mut self, key: &TaskKey, change: RowChange) -> Result<Ticket, BoardError> {
        if self.in_flight.contains(key) {
            return Err(BoardError::Busy(key.clone()));
        }
        let index = self
            .table
            .as_ref()
            .and_then(|table| table.index_of(key))
            .ok_or_else(|| BoardError::UnknownTask(key.clone()))?;

        self.in_flight.insert(key.clone());
        Ok(Ticket {
            seq: self.take_seq(),
            target: Some(Target { key: key.clone(), index, change }),
        })
    }

    /// Settle a request. Failures leave the shown table as it was.
    pub fn finish(
        &mut self,
        ticket: &Ticket,
        result: Result<TaskTable, BoardError>,
    ) -> Result<Applied, BoardError> {
        if let Some(target) = &ticket.target {
            self.in_flight.remove(&target.key);
        }

        let table = result?;
        if ticket.seq < self.applied_seq {
            return Ok(Applied::Stale);
        }

        let moved = ticket.target.as_ref().and_then(|target| moved_row(&table, target));

        self.view = Some(TableView::build(&table));
        self.table = Some(table);
        self.applied_seq = ticket.seq;

        match moved {
            Some(key) => Err(BoardError::RowMoved(key)),
            None => Ok(Applied::Rendered),
        }
    }
}

/// The backend may reorder rows after a mutation (e.g. finished tasks last).
/// Only a keyed row that lacks the requested change counts as misaddressed.
fn moved_row(table: &TaskTable, target: &Target) -> Option<TaskKey> {
    let landed = table.rows.get(target.index).map(|row| &row.key);
    if landed == Some(&target.key) {
        return None;
    }
    match table.index_of(&target.key) {
        Some(now) if target.change.applied_to(&table.rows[now]) => {
            crate::log::warn(
                "BOARD",
                &format!("{} moved from row {} to row {}", target.key, target.index, now),
            );
            None
        }
        _ => Some(target.key.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, &str)]) -> TaskTable {
        let mut grid = vec![vec![
            serde_json::json!("Task"),
            serde_json::json!("Status"),
            serde_json::json!("Time"),
            serde_json::json!("Note"),
        ]];
        for (task, status) in rows {
            grid.push(vec![
                serde_json::json!(task),
                serde_json::json!(status),
                serde_json::json!(""),
                serde_json::json!(""),
            ]);
        }
        TaskTable::from_grid(grid).unwrap()
    }

    fn loaded(rows: &[(&str, &str)]) -> Board {
        let mut board = Board::new(Screen::Board);
        let ticket = board.begin_read();
        board.finish(&ticket, Ok(table(rows))).unwrap();
        board
    }

    fn key(name: &str) -> TaskKey {
        TaskKey { name: name.to_string(), ordinal: 0 }
    }

    fn done() -> RowChange {
        RowChange::Status("完了".to_string())
    }

    #[test]
    fn test_failed_read_keeps_previous_table() {
        let mut board = loaded(&[("Walk", "未完了")]);
        let before = board.view().cloned();

        let ticket = board.begin_read();
        let result = board.finish(&ticket, Err(BoardError::Transport("HTTPエラー: 500".into())));

        assert!(result.is_err());
        assert_eq!(board.view().cloned(), before);
    }

    #[test]
    fn test_mutation_resolves_index_and_locks_row() {
        let mut board = loaded(&[("Walk", "未完了"), ("Read", "未完了")]);

        let ticket = board.begin_mutation(&key("Read"), done()).unwrap();
        assert_eq!(
            ticket.target,
            Some(Target { key: key("Read"), index: 1, change: done() })
        );
        assert!(board.is_busy(&key("Read")));
        assert_eq!(
            board.begin_mutation(&key("Read"), done()),
            Err(BoardError::Busy(key("Read")))
        );

        // other rows stay usable
        assert!(board.begin_mutation(&key("Walk"), done()).is_ok());
    }

    #[test]
    fn test_failed_mutation_unlocks_row() {
        let mut board = loaded(&[("Walk", "未完了")]);
        let ticket = board.begin_mutation(&key("Walk"), done()).unwrap();

        let _ = board.finish(&ticket, Err(BoardError::Transport("offline".into())));

        assert!(!board.is_busy(&key("Walk")));
        assert_eq!(board.table().unwrap().rows[0].status, "未完了");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let mut board = loaded(&[("Walk", "未完了")]);
        assert_eq!(
            board.begin_mutation(&key("Swim"), done()),
            Err(BoardError::UnknownTask(key("Swim")))
        );
        assert!(Board::new(Screen::Board).begin_mutation(&key("Walk"), done()).is_err());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut board = loaded(&[("Walk", "未完了"), ("Read", "未完了")]);
        let first = board.begin_mutation(&key("Walk"), done()).unwrap();
        let second = board.begin_mutation(&key("Read"), done()).unwrap();

        // second answers first and already reflects both changes
        let newest = table(&[("Walk", "完了"), ("Read", "完了")]);
        assert_eq!(board.finish(&second, Ok(newest)), Ok(Applied::Rendered));

        let older = table(&[("Walk", "完了"), ("Read", "未完了")]);
        assert_eq!(board.finish(&first, Ok(older)), Ok(Applied::Stale));

        assert_eq!(board.view().unwrap().progress.completed, 2);
        assert!(!board.is_busy(&key("Walk")));
    }

    #[test]
    fn test_misaddressed_row_is_reported_but_rendered() {
        let mut board = loaded(&[("Walk", "未完了"), ("Read", "未完了")]);
        let ticket = board.begin_mutation(&key("Read"), done()).unwrap();

        // backend inserted a row above and completed whatever sat at index 1
        let shifted = table(&[("Stretch", "未完了"), ("Walk", "完了"), ("Read", "未完了")]);
        assert_eq!(board.finish(&ticket, Ok(shifted)), Err(BoardError::RowMoved(key("Read"))));
        assert_eq!(board.table().unwrap().rows.len(), 3);
    }

    #[test]
    fn test_backend_sorting_finished_rows_last_is_success() {
        let mut board = loaded(&[("Walk", "未完了"), ("Read", "未完了")]);
        let ticket = board.begin_mutation(&key("Walk"), done()).unwrap();

        let sorted = table(&[("Read", "未完了"), ("Walk", "完了")]);
        assert_eq!(board.finish(&ticket, Ok(sorted)), Ok(Applied::Rendered));
        assert_eq!(board.view().unwrap().progress.label(), "完了: 1/2 タスク (50%)");
        assert!(!board.is_busy(&key("Walk")));
    }

    #[test]
    fn test_moved_note_counts_when_text_matches() {
        let mut board = loaded(&[("Walk", "未完了"), ("Read", "未完了")]);
        let change = RowChange::Note("30分".to_string());
        let ticket = board.begin_mutation(&key("Walk"), change).unwrap();

        let mut grid = table(&[("Read", "未完了"), ("Walk", "未完了")]);
        grid.rows[1].note = "30分".to_string();
        assert_eq!(board.finish(&ticket, Ok(grid)), Ok(Applied::Rendered));
    }
}
