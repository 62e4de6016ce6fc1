use std::collections::BTreeMap;

use cadence_core::constants::DEFAULT_BREAK_INTERVAL_MINUTES;

use super::Tally;
use crate::window::ActivityWindow;

/// Session length (minutes) whose bucket has the best mean correctness.
///
/// Records are bucketed by `minutes_spent / bucket_minutes`. On a tie the
/// shorter bucket wins. An empty window yields the 45-minute default.
pub fn calculate(window: &ActivityWindow<'_>, bucket_minutes: u32) -> u32 {
    let width = bucket_minutes.max(1);
    let mut buckets: BTreeMap<u32, Tally> = BTreeMap::new();
    for entry in window.records() {
        buckets
            .entry(entry.record.minutes_spent / width)
            .or_default()
            .push(entry.record.score());
    }

    let mut best: Option<(u32, f64)> = None;
    for (&index, tally) in &buckets {
        let mean = tally.mean();
        match best {
            Some((_, best_mean)) if mean <= best_mean => {}
            _ => best = Some((index, mean)),
        }
    }

    best.map(|(index, _)| index.saturating_mul(width))
        .unwrap_or(DEFAULT_BREAK_INTERVAL_MINUTES)
}
