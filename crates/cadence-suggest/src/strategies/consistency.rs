use cadence_core::{Suggestion, SuggestionKind};

use super::percent;
use crate::context::SuggestionContext;

const ID: &str = "consistency_boost";
const PRIORITY: u8 = 1;

/// Consistency strategy.
///
/// Nudges toward a daily habit when the consistency score is below threshold.
pub struct ConsistencyStrategy;

impl ConsistencyStrategy {
    pub fn suggest(ctx: &SuggestionContext<'_>) -> Vec<Suggestion> {
        let score = ctx.pattern.consistency_score;
        if score >= ctx.config.consistency_threshold {
            return Vec::new();
        }

        let minutes = ctx.config.consistency_duration_minutes;
        vec![Suggestion::new(
            ID,
            SuggestionKind::ConsistencyBoost,
            "Build a daily habit",
            format!(
                "You studied on {}% of recent days. Even {minutes} minutes a day keeps the momentum going.",
                percent(score)
            ),
            1.0 - score,
        )
        .with_duration(minutes)
        .with_priority(PRIORITY)]
    }
}
