use chrono::{DateTime, Utc};

use crate::models::{ActivityRecord, ProgressSnapshot, StudyPattern, Suggestion};

/// Turns a pattern plus the raw activity log into ranked suggestions.
pub trait ISuggestionGenerator: Send + Sync {
    /// Generate suggestions sorted ascending by priority. `now` is never read from a clock.
    fn generate(
        &self,
        pattern: &StudyPattern,
        records: &[ActivityRecord],
        progress: &ProgressSnapshot,
        now: DateTime<Utc>,
    ) -> Vec<Suggestion>;
}
