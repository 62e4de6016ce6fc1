use std::collections::HashMap;

use super::Tally;
use crate::window::ActivityWindow;

/// Categories with the highest error rate, worst first, at most `limit`.
///
/// Ties keep the order in which categories first appear in the window.
pub fn calculate(window: &ActivityWindow<'_>, limit: usize) -> Vec<String> {
    let mut order: Vec<(&str, Tally)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in window.records() {
        let category = entry.record.category.as_str();
        let slot = *index.entry(category).or_insert_with(|| {
            order.push((category, Tally::default()));
            order.len() - 1
        });
        order[slot].1.push(1.0 - entry.record.score());
    }

    order.sort_by(|a, b| {
        b.1.mean()
            .partial_cmp(&a.1.mean())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
        .into_iter()
        .take(limit)
        .map(|(category, _)| category.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::ActivityRecord;
    use chrono::{TimeZone, Utc};
    use chrono_tz::Tz;

    fn rec(category: &str, correct: bool) -> ActivityRecord {
        let ts = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        ActivityRecord::new("t", category, correct, ts.timestamp_millis(), 10)
    }

    #[test]
    fn worst_first_with_first_seen_tiebreak() {
        let now = Utc.with_ymd_and_hms(2024, 5, 11, 0, 0, 0).unwrap();
        let records = vec![
            rec("Vocabulary", true),
            rec("Grammar", false),
            rec("Listening", false),
            rec("Reading", true),
            rec("Reading", false),
            rec("Vocabulary", true),
        ];
        let window = ActivityWindow::collect(&records, now, 30, Tz::UTC);
        assert_eq!(
            calculate(&window, 3),
            vec!["Grammar", "Listening", "Reading"]
        );
        assert_eq!(calculate(&window, 10).last().map(String::as_str), Some("Vocabulary"));
    }
}
