//! Completion Progress
//!
//! Counts finished rows and formats the progress bar label.

use crate::models::TaskRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percentage: u32,
}

impl Progress {
    pub fn from_rows(rows: &[TaskRow]) -> Self {
        let total = rows.len();
        let completed = rows.iter().filter(|row| row.is_completed()).count();
        let percentage = if total > 0 {
            ((completed as f64 / total as f64) * 100.0).round() as u32
        } else {
            0
        };
        Self { completed, total, percentage }
    }

    /// CSS width for the bar
    pub fn bar_width(&self) -> String {
        format!("{}%", self.percentage)
    }

    pub fn label(&self) -> String {
        format!("完了: {}/{} タスク ({}%)", self.completed, self.total, self.percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskKey;

    fn rows(statuses: &[&str]) -> Vec<TaskRow> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, status)| TaskRow {
                key: TaskKey { name: format!("Task {}", i), ordinal: 0 },
                task: format!("Task {}", i),
                status: status.to_string(),
                completion_time: String::new(),
                note: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_empty_rows_are_zero_percent() {
        let progress = Progress::from_rows(&[]);
        assert_eq!(progress.percentage, 0);
        assert_eq!(progress.label(), "完了: 0/0 タスク (0%)");
        assert_eq!(progress.bar_width(), "0%");
    }

    #[test]
    fn test_rounding_matches_formula() {
        for total in 1..=12usize {
            for completed in 0..=total {
                let mut statuses = vec!["完了"; completed];
                statuses.extend(vec!["未完了"; total - completed]);
                let progress = Progress::from_rows(&rows(&statuses));

                let expected = (100.0 * completed as f64 / total as f64).round() as u32;
                assert_eq!(progress.percentage, expected, "{}/{}", completed, total);
                assert!(progress.completed <= progress.total);
            }
        }
    }

    #[test]
    fn test_only_exact_literal_counts() {
        let progress = Progress::from_rows(&rows(&["完了", "完了 ", "done", "未完了"]));
        assert_eq!(progress.completed, 1);
        assert_eq!(progress.label(), "完了: 1/4 タスク (25%)");
    }

    #[test]
    fn test_two_of_three_rounds_up() {
        let progress = Progress::from_rows(&rows(&["完了", "完了", "未完了"]));
        assert_eq!(progress.percentage, 67);
        assert_eq!(progress.bar_width(), "67%");
    }
}
