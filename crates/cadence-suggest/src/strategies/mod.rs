//! Suggestion strategies and priority ranking.
//!
//! Each strategy is independent: it reads the shared [`SuggestionContext`](crate::SuggestionContext)
//! and returns zero or more suggestions with ids namespaced by strategy.

pub mod break_reminder;
pub mod consistency;
pub mod difficulty;
pub mod optimal_time;
pub mod review;
pub mod weak_area;

pub use break_reminder::BreakReminderStrategy;
pub use consistency::ConsistencyStrategy;
pub use difficulty::DifficultyStrategy;
pub use optimal_time::OptimalTimeStrategy;
pub use review::ReviewStrategy;
pub use weak_area::WeakAreaStrategy;

use cadence_core::Suggestion;

/// Stable sort by ascending priority; equal priorities keep input order.
pub fn rank(mut suggestions: Vec<Suggestion>) -> Vec<Suggestion> {
    suggestions.sort_by_key(|s| s.priority);
    suggestions
}

/// Percentage for display, rounded to the nearest integer.
pub(crate) fn percent(ratio: f64) -> u32 {
    (ratio.clamp(0.0, 1.0) * 100.0).round() as u32
}
