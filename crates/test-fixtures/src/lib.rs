//! Test fixtures for the Cadence workspace: activity-log JSON scenarios and
//! small record builders shared by every crate's tests.

use std::path::PathBuf;

use cadence_core::ActivityRecord;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the fixture files shipped with this crate.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// An activity-log scenario with the pattern it should produce.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityScenario {
    pub description: String,
    pub now_millis: i64,
    pub records: Vec<ActivityRecord>,
    pub expected: ExpectedPattern,
}

impl ActivityScenario {
    /// The scenario's reference "now".
    ///
    /// # Panics
    /// Panics if `now_millis` is out of range.
    pub fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.now_millis).expect("fixture now_millis in range")
    }
}

/// Expected pattern fields, in the fixture's plain-JSON form.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedPattern {
    /// Slot start times as `HH:MM`, in ranked order.
    pub slot_starts: Vec<String>,
    pub average_session_duration: u32,
    /// Weekday labels such as `"Mon"`.
    pub strong_days: Vec<String>,
    pub weak_categories: Vec<String>,
    pub consistency_score: f64,
    pub optimal_break_interval: u32,
}

/// Load a scenario from `fixtures/activity/<name>.json`.
pub fn load_scenario(name: &str) -> ActivityScenario {
    load_fixture(&format!("activity/{name}.json"))
}

// ── Builders ──────────────────────────────────────────────────────────────

/// A fixed reference instant: Friday 2024-06-14 15:00 UTC.
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 14, 15, 0, 0)
        .single()
        .expect("valid reference date")
}

/// A record completed at `at`.
pub fn record_at(category: &str, correct: bool, at: DateTime<Utc>, minutes: u32) -> ActivityRecord {
    let millis = at.timestamp_millis();
    ActivityRecord::new(format!("{category}-{millis}"), category, correct, millis, minutes)
}

/// A record completed `minutes` before `now`.
pub fn minutes_ago(now: DateTime<Utc>, minutes: i64, category: &str, correct: bool) -> ActivityRecord {
    record_at(category, correct, now - Duration::minutes(minutes), 15)
}

/// A record completed `days` before `now`.
pub fn days_ago(now: DateTime<Utc>, days: i64, category: &str, correct: bool) -> ActivityRecord {
    record_at(category, correct, now - Duration::days(days), 15)
}

/// `count` records one minute apart ending at `now`, all with the same outcome.
pub fn streak(now: DateTime<Utc>, count: usize, category: &str, correct: bool) -> Vec<ActivityRecord> {
    (0..count as i64)
        .rev()
        .map(|i| minutes_ago(now, i, category, correct))
        .collect()
}
