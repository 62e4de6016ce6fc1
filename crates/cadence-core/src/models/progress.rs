use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Aggregate progress owned by the caller.
///
/// Passed through to the analyzer and the suggestion strategies unchanged;
/// none of the current algorithms read it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct ProgressSnapshot {
    pub total_tasks: u64,
    pub correct_tasks: u64,
    pub current_streak_days: u32,
    pub total_minutes: u64,
}
