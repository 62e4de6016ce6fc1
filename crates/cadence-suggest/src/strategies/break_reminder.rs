use cadence_core::constants::MILLIS_PER_MINUTE;
use cadence_core::{Suggestion, SuggestionKind};

use crate::context::SuggestionContext;

const ID: &str = "break_reminder";
const PRIORITY: u8 = 2;

/// Break-reminder strategy.
///
/// Fires once when the minutes elapsed since the latest record exceed the
/// pattern's optimal break interval.
pub struct BreakReminderStrategy;

impl BreakReminderStrategy {
    pub fn suggest(ctx: &SuggestionContext<'_>) -> Vec<Suggestion> {
        let Some(latest) = ctx.records.iter().map(|r| r.timestamp_millis).max() else {
            return Vec::new();
        };
        let elapsed_minutes = ctx.now_millis().saturating_sub(latest) / MILLIS_PER_MINUTE;
        if elapsed_minutes <= i64::from(ctx.pattern.optimal_break_interval) {
            return Vec::new();
        }

        vec![Suggestion::new(
            ID,
            SuggestionKind::BreakReminder,
            "Take a break",
            format!(
                "{elapsed_minutes} minutes have passed since your last task. \
                 Your accuracy peaks in sessions of about {} minutes, so rest before starting again.",
                ctx.pattern.optimal_break_interval
            ),
            ctx.config.break_reminder_confidence,
        )
        .with_priority(PRIORITY)]
    }
}
