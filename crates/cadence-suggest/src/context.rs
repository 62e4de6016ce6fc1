use cadence_core::{ActivityRecord, ProgressSnapshot, StudyPattern, SuggestionConfig};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Everything a strategy may read. Built once per `generate` call.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionContext<'a> {
    pub pattern: &'a StudyPattern,
    /// The full, unwindowed activity log.
    pub records: &'a [ActivityRecord],
    pub progress: &'a ProgressSnapshot,
    pub now: DateTime<Utc>,
    /// Timezone that defines "today".
    pub tz: Tz,
    pub config: &'a SuggestionConfig,
}

impl SuggestionContext<'_> {
    pub fn now_millis(&self) -> i64 {
        self.now.timestamp_millis()
    }
}
