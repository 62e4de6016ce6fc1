use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::time;

/// One completed study task, as recorded by the external activity log.
///
/// Records are immutable observations; the scheduler only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActivityRecord {
    /// Opaque identifier of the task that was attempted.
    pub task_id: String,
    /// Short topic label, e.g. `"Grammar"`.
    pub category: String,
    /// Whether the attempt was answered correctly.
    pub correct: bool,
    /// Completion time, epoch milliseconds UTC.
    #[ts(type = "number")]
    pub timestamp_millis: i64,
    /// Time spent on the task.
    pub minutes_spent: u32,
}

impl ActivityRecord {
    pub fn new(
        task_id: impl Into<String>,
        category: impl Into<String>,
        correct: bool,
        timestamp_millis: i64,
        minutes_spent: u32,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            category: category.into(),
            correct,
            timestamp_millis,
            minutes_spent,
        }
    }

    /// Completion time as a UTC date-time, if representable.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        time::utc_from_millis(self.timestamp_millis)
    }

    /// 1.0 for a correct attempt, 0.0 otherwise.
    pub fn score(&self) -> f64 {
        if self.correct {
            1.0
        } else {
            0.0
        }
    }
}
