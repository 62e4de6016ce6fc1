use cadence_core::{Suggestion, SuggestionKind};
use chrono::{TimeZone, Utc};

use super::percent;
use crate::context::SuggestionContext;

const PRIORITY: u8 = 2;

/// Optimal-time strategy.
///
/// Proposes today's occurrence of the best preferred slots, skipping any
/// whose start has already passed. Slot starts that fall into a DST gap are
/// skipped as well.
pub struct OptimalTimeStrategy;

impl OptimalTimeStrategy {
    pub fn suggest(ctx: &SuggestionContext<'_>) -> Vec<Suggestion> {
        let today = ctx.now.with_timezone(&ctx.tz).date_naive();

        ctx.pattern
            .preferred_time_slots
            .iter()
            .take(ctx.config.max_optimal_slots)
            .filter_map(|slot| {
                let start = ctx
                    .tz
                    .from_local_datetime(&today.and_time(slot.start_time))
                    .earliest()?
                    .with_timezone(&Utc);
                if start <= ctx.now {
                    return None;
                }
                let label = slot.start_time.format("%H:%M").to_string();
                let accuracy = percent(slot.performance_score);
                Some(
                    Suggestion::new(
                        format!("optimal_time_{label}"),
                        SuggestionKind::OptimalTime,
                        format!("Study at {label}"),
                        format!(
                            "You answer {accuracy}% of tasks correctly around {label}. \
                             Plan your next session for then."
                        ),
                        slot.performance_score,
                    )
                    .with_scheduled_time(start)
                    .with_priority(PRIORITY),
                )
            })
            .collect()
    }
}
