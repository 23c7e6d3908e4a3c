//! Checklist Models
//!
//! The day's task table as delivered by the backend: a header row followed by
//! `[task, status, completionTime, note]` rows.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::config::COMPLETED_STATUS;

/// Durable client-side row identity: task name plus its ordinal among
/// rows sharing that name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskKey {
    pub name: String,
    pub ordinal: usize,
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.ordinal)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub key: TaskKey,
    pub task: String,
    pub status: String,
    pub completion_time: String,
    pub note: String,
}

impl TaskRow {
    pub fn is_completed(&self) -> bool {
        self.status == COMPLETED_STATUS
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskTable {
    pub headers: Vec<String>,
    pub rows: Vec<TaskRow>,
}

impl TaskTable {
    /// Parse a response body (JSON 2D array)
    pub fn parse_json(body: &str) -> Result<Self, String> {
        let grid: Vec<Vec<Value>> =
            serde_json::from_str(body).map_err(|e| format!("JSONの解析に失敗しました: {}", e))?;
        Self::from_grid(grid)
    }

    /// Split a 2D array into header + rows, assigning keys in order
    pub fn from_grid(grid: Vec<Vec<Value>>) -> Result<Self, String> {
        let mut grid = grid.into_iter();
        let headers = grid
            .next()
            .ok_or_else(|| "ヘッダー行がありません".to_string())?
            .iter()
            .map(cell_text)
            .collect();

        let mut seen: HashMap<String, usize> = HashMap::new();
        let rows = grid
            .map(|cells| {
                let mut cells = cells.iter().map(cell_text);
                let task = cells.next().unwrap_or_default();
                let status = cells.next().unwrap_or_default();
                let completion_time = cells.next().unwrap_or_default();
                let note = cells.next().unwrap_or_default();

                let ordinal = seen.entry(task.clone()).or_insert(0);
                let key = TaskKey { name: task.clone(), ordinal: *ordinal };
                *ordinal += 1;

                TaskRow { key, task, status, completion_time, note }
            })
            .collect();

        Ok(Self { headers, rows })
    }

    /// Wire index of a row
    pub fn index_of(&self, key: &TaskKey) -> Option<usize> {
        self.rows.iter().position(|row| &row.key == key)
    }
}

/// Backend cells are usually strings; anything else is shown as its JSON text.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
