use cadence_core::constants::MILLIS_PER_DAY;
use cadence_core::{Suggestion, SuggestionKind};

use crate::context::SuggestionContext;
use crate::history;

const PRIORITY: u8 = 3;
const STRUGGLING_CONFIDENCE: f64 = 0.9;
const ROUTINE_CONFIDENCE: f64 = 0.6;

/// Review strategy.
///
/// Flags categories whose latest record is older than the review threshold.
/// Candidates are taken in first-seen category order, not by staleness.
pub struct ReviewStrategy;

impl ReviewStrategy {
    pub fn suggest(ctx: &SuggestionContext<'_>) -> Vec<Suggestion> {
        let now = ctx.now_millis();
        let threshold = i64::from(ctx.config.review_after_days) * MILLIS_PER_DAY;

        history::by_category(ctx.records)
            .into_iter()
            .filter(|h| now.saturating_sub(h.last_seen_millis) > threshold)
            .take(ctx.config.max_reviews)
            .map(|h| {
                let days = now.saturating_sub(h.last_seen_millis) / MILLIS_PER_DAY;
                let confidence = if h.accuracy() < ctx.config.review_struggling_threshold {
                    STRUGGLING_CONFIDENCE
                } else {
                    ROUTINE_CONFIDENCE
                };
                Suggestion::new(
                    format!("review_{}", h.category),
                    SuggestionKind::ReviewSession,
                    format!("Review {}", h.category),
                    format!(
                        "It has been {days} days since you practiced {}. A quick review keeps it fresh.",
                        h.category
                    ),
                    confidence,
                )
                .with_duration(ctx.config.review_duration_minutes)
                .with_category(h.category)
                .with_priority(PRIORITY)
            })
            .collect()
    }
}
