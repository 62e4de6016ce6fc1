use cadence_core::constants::DEFAULT_SESSION_MINUTES;

use crate::window::ActivityWindow;

/// Mean minutes spent per windowed record, truncated toward zero.
pub fn average_minutes(window: &ActivityWindow<'_>) -> u32 {
    if window.is_empty() {
        return DEFAULT_SESSION_MINUTES;
    }
    let total: u64 = window
        .records()
        .iter()
        .map(|r| u64::from(r.record.minutes_spent))
        .sum();
    (total / window.len() as u64) as u32
}
