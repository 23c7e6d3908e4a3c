//! Checklist Backend Bridge
//!
//! The Apps Script backend answers four calls, each returning the full task
//! table. Today's tasks are read over HTTP; mutations and the email lookup go
//! through `google.script.run` when the page is hosted by Apps Script and
//! fall back to HTTP actions otherwise.

mod http;
mod script_run;

use serde_json::Value;

use crate::error::BoardError;
use crate::models::TaskTable;

use self::http::action_url;

/// Remote procedure call bridge
#[allow(async_fn_in_trait)]
pub trait TaskBridge {
    async fn todays_tasks(&self) -> Result<TaskTable, BoardError>;
    async fn update_status(&self, row_index: usize, new_status: &str) -> Result<TaskTable, BoardError>;
    async fn update_note(&self, row_index: usize, note: &str) -> Result<TaskTable, BoardError>;
    async fn tasks_by_email(&self, email: &str) -> Result<TaskTable, BoardError>;
}

/// Browser implementation talking to the Apps Script web app
#[derive(Debug, Clone)]
pub struct ScriptBridge {
    endpoint: String,
}

impl ScriptBridge {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    async fn http_table(&self, action: &str, params: &[(&str, &str)]) -> Result<TaskTable, BoardError> {
        let url = action_url(&self.endpoint, action, params);
        let body = http::fetch_text(&url).await.map_err(BoardError::Transport)?;
        crate::log::info("BRIDGE", &format!("{} raw response: {}", action, body));
        let table = TaskTable::parse_json(&body).map_err(BoardError::Parse)?;
        crate::log::info("BRIDGE", &format!("{} parsed {} rows", action, table.rows.len()));
        Ok(table)
    }

    /// Call a server function, via `google.script.run` when present
    async fn call(
        &self,
        function: &str,
        args: Vec<Value>,
        params: &[(&str, &str)],
    ) -> Result<TaskTable, BoardError> {
        if !script_run::available() {
            crate::log::info("BRIDGE", &format!("google.script.run unavailable, {} over HTTP", function));
            return self.http_table(function, params).await;
        }

        let result = script_run::call(function, &args).await.map_err(BoardError::Transport)?;
        let grid: Vec<Vec<Value>> = serde_wasm_bindgen::from_value(result)
            .map_err(|e| BoardError::Parse(e.to_string()))?;
        let table = TaskTable::from_grid(grid).map_err(BoardError::Parse)?;
        crate::log::info("BRIDGE", &format!("{} returned {} rows", function, table.rows.len()));
        Ok(table)
    }
}

impl TaskBridge for ScriptBridge {
    async fn todays_tasks(&self) -> Result<TaskTable, BoardError> {
        self.http_table("getTodaysTasks", &[]).await
    }

    async fn update_status(&self, row_index: usize, new_status: &str) -> Result<TaskTable, BoardError> {
        let index = row_index.to_string();
        self.call(
            "updateTaskStatus",
            vec![Value::from(row_index), Value::from(new_status)],
            &[("rowIndex", index.as_str()), ("newStatus", new_status)],
        )
        .await
    }

    async fn update_note(&self, row_index: usize, note: &str) -> Result<TaskTable, BoardError> {
        let index = row_index.to_string();
        self.call(
            "updateTaskNote",
            vec![Value::from(row_index), Value::from(note)],
            &[("rowIndex", index.as_str()), ("note", note)],
        )
        .await
    }

    async fn tasks_by_email(&self, email: &str) -> Result<TaskTable, BoardError> {
        self.call("getTasksByEmail", vec![Value::from(email)], &[("email", email)])
            .await
    }
}
