use chrono::{Datelike, Weekday};

use super::Tally;
use crate::window::ActivityWindow;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Weekdays with the highest mean correctness, best first, at most `limit`.
///
/// Only days with at least one record are ranked; ties keep Monday-first order.
pub fn calculate(window: &ActivityWindow<'_>, limit: usize) -> Vec<Weekday> {
    let mut days = [Tally::default(); 7];
    for entry in window.records() {
        let index = entry.local.weekday().num_days_from_monday() as usize;
        days[index].push(entry.record.score());
    }

    let mut ranked: Vec<(Weekday, f64)> = WEEK
        .iter()
        .zip(days.iter())
        .filter(|(_, tally)| tally.count > 0)
        .map(|(day, tally)| (*day, tally.mean()))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(limit);
    ranked.into_iter().map(|(day, _)| day).collect()
}
