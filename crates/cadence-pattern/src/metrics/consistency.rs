use std::collections::HashSet;

use cadence_core::constants::NEUTRAL_CONSISTENCY;
use chrono::NaiveDate;

use crate::window::ActivityWindow;

/// Share of the lookback window's days that had any activity, capped at 1.0.
///
/// With fewer than `min_records` windowed records the score is the neutral 0.5.
pub fn calculate(window: &ActivityWindow<'_>, min_records: usize) -> f64 {
    if window.len() < min_records || window.lookback_days() == 0 {
        return NEUTRAL_CONSISTENCY;
    }
    let active_days: HashSet<NaiveDate> = window
        .records()
        .iter()
        .map(|entry| entry.local.date_naive())
        .collect();
    (active_days.len() as f64 / f64::from(window.lookback_days())).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::ActivityRecord;
    use chrono::{Duration, TimeZone, Utc};
    use chrono_tz::Tz;

    #[test]
    fn too_few_records_is_neutral() {
        let now = Utc.with_ymd_and_hms(2024, 5, 31, 12, 0, 0).unwrap();
        let records: Vec<_> = (0..6)
            .map(|d| {
                let ts = (now - Duration::days(d)).timestamp_millis();
                ActivityRecord::new("t", "Math", true, ts, 10)
            })
            .collect();
        let window = ActivityWindow::collect(&records, now, 30, Tz::UTC);
        assert_eq!(calculate(&window, 7), 0.5);
    }

    #[test]
    fn counts_distinct_days() {
        let now = Utc.with_ymd_and_hms(2024, 5, 31, 12, 0, 0).unwrap();
        // 9 records over 6 distinct days.
        let offsets = [0, 0, 1, 2, 2, 3, 10, 20, 20];
        let records: Vec<_> = offsets
            .iter()
            .map(|&d| {
                let ts = (now - Duration::days(d)).timestamp_millis();
                ActivityRecord::new("t", "Math", true, ts, 10)
            })
            .collect();
        let window = ActivityWindow::collect(&records, now, 30, Tz::UTC);
        assert!((calculate(&window, 7) - 6.0 / 30.0).abs() < 1e-12);
    }

    #[test]
    fn capped_at_one() {
        let now = Utc.with_ymd_and_hms(2024, 5, 31, 12, 0, 0).unwrap();
        // 31 distinct calendar days fit inside a 30-day lookback when the
        // oldest record sits exactly on the cutoff.
        let records: Vec<_> = (0..=30)
            .map(|d| {
                let ts = (now - Duration::days(d)).timestamp_millis();
                ActivityRecord::new("t", "Math", true, ts, 10)
            })
            .collect();
        let window = ActivityWindow::collect(&records, now, 30, Tz::UTC);
        assert_eq!(calculate(&window, 7), 1.0);
    }
}
