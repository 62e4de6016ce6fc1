use cadence_core::{Suggestion, SuggestionKind};

use super::percent;
use crate::context::SuggestionContext;
use crate::history;

const PRIORITY: u8 = 1;

/// Weak-area strategy.
///
/// For the worst categories in the pattern, re-measures the error rate over
/// the full log and uses it as confidence.
pub struct WeakAreaStrategy;

impl WeakAreaStrategy {
    pub fn suggest(ctx: &SuggestionContext<'_>) -> Vec<Suggestion> {
        ctx.pattern
            .weak_categories
            .iter()
            .take(ctx.config.max_weak_areas)
            .map(|category| {
                let error_rate = history::for_category(ctx.records, category).error_rate();
                Suggestion::new(
                    format!("weak_area_{category}"),
                    SuggestionKind::WeakAreaFocus,
                    format!("Focus on {category}"),
                    format!(
                        "You miss {}% of {category} tasks. A short focused session will help.",
                        percent(error_rate)
                    ),
                    error_rate,
                )
                .with_duration(ctx.config.weak_area_duration_minutes)
                .with_category(category.as_str())
                .with_priority(PRIORITY)
            })
            .collect()
    }
}
