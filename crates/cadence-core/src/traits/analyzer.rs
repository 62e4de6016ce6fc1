use chrono::{DateTime, Utc};

use crate::models::{ActivityRecord, ProgressSnapshot, StudyPattern};

/// Reduces an activity log to a behavioral summary.
pub trait IPatternAnalyzer: Send + Sync {
    /// Analyze `records` relative to an explicit `now`.
    fn analyze_at(
        &self,
        records: &[ActivityRecord],
        progress: &ProgressSnapshot,
        now: DateTime<Utc>,
    ) -> StudyPattern;

    /// Analyze `records` relative to the wall clock, read once per call.
    fn analyze(&self, records: &[ActivityRecord], progress: &ProgressSnapshot) -> StudyPattern {
        self.analyze_at(records, progress, Utc::now())
    }
}
