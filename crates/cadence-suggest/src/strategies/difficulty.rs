use cadence_core::{ActivityRecord, Suggestion, SuggestionKind};

use super::percent;
use crate::context::SuggestionContext;

const INCREASE_ID: &str = "increase_difficulty";
const REDUCE_ID: &str = "reduce_difficulty";
const INCREASE_PRIORITY: u8 = 3;
const REDUCE_PRIORITY: u8 = 1;

/// Difficulty strategy.
///
/// Judges accuracy over the most recent records. Strictly above the high
/// threshold suggests harder material; strictly below the low threshold
/// suggests easier material; anything in between, boundaries included,
/// emits nothing. An empty log emits nothing.
pub struct DifficultyStrategy;

impl DifficultyStrategy {
    pub fn suggest(ctx: &SuggestionContext<'_>) -> Vec<Suggestion> {
        let Some(performance) = recent_performance(ctx.records, ctx.config.recent_window) else {
            return Vec::new();
        };
        let shown = percent(performance);

        if performance > ctx.config.high_performance_threshold {
            vec![Suggestion::new(
                INCREASE_ID,
                SuggestionKind::DifficultyAdjustment,
                "Try harder material",
                format!("You got {shown}% of your recent tasks right. Step up the difficulty."),
                performance,
            )
            .with_priority(INCREASE_PRIORITY)]
        } else if performance < ctx.config.low_performance_threshold {
            vec![Suggestion::new(
                REDUCE_ID,
                SuggestionKind::DifficultyAdjustment,
                "Ease the difficulty",
                format!(
                    "You got {shown}% of your recent tasks right. Easier tasks will rebuild confidence."
                ),
                1.0 - performance,
            )
            .with_priority(REDUCE_PRIORITY)]
        } else {
            Vec::new()
        }
    }
}

/// Mean correctness of the `window` latest records by timestamp.
///
/// Records sharing a timestamp keep their input order. `None` when empty.
pub fn recent_performance(records: &[ActivityRecord], window: usize) -> Option<f64> {
    if records.is_empty() || window == 0 {
        return None;
    }
    let mut ordered: Vec<&ActivityRecord> = records.iter().collect();
    ordered.sort_by_key(|r| r.timestamp_millis);
    let recent = &ordered[ordered.len().saturating_sub(window)..];
    let correct: f64 = recent.iter().map(|r| r.score()).sum();
    Some(correct / recent.len() as f64)
}
