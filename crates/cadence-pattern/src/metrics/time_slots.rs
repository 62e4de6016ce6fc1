use cadence_core::TimeSlot;
use chrono::Timelike;

use super::Tally;
use crate::window::ActivityWindow;

/// Bucket records into `width_hours`-wide slots by local hour.
///
/// Returns only non-empty slots, sorted descending by score × frequency.
/// The sort is stable, so ties keep ascending start-hour order.
pub fn calculate(window: &ActivityWindow<'_>, width_hours: u32) -> Vec<TimeSlot> {
    let width = width_hours.max(1);
    let slot_count = 24_u32.div_ceil(width) as usize;
    let mut buckets = vec![Tally::default(); slot_count];

    for entry in window.records() {
        let index = (entry.local.hour() / width) as usize;
        if let Some(bucket) = buckets.get_mut(index) {
            bucket.push(entry.record.score());
        }
    }

    let mut slots: Vec<TimeSlot> = buckets
        .iter()
        .enumerate()
        .filter(|(_, tally)| tally.count > 0)
        .map(|(index, tally)| {
            TimeSlot::from_hours(index as u32 * width, width, tally.mean(), tally.count)
        })
        .collect();

    slots.sort_by(|a, b| {
        b.weight()
            .partial_cmp(&a.weight())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::ActivityRecord;
    use chrono::{NaiveTime, TimeZone, Utc};
    use chrono_tz::Tz;

    fn record(hour: u32, correct: bool) -> ActivityRecord {
        let ts = Utc.with_ymd_and_hms(2024, 5, 10, hour, 30, 0).unwrap();
        ActivityRecord::new("t", "Math", correct, ts.timestamp_millis(), 10)
    }

    fn hm(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn buckets_by_two_hours_and_ranks_by_weight() {
        let now = Utc.with_ymd_and_hms(2024, 5, 11, 0, 0, 0).unwrap();
        let records = vec![
            record(9, true),
            record(10, true),
            record(10, false),
            record(14, true),
            record(23, true),
            record(22, true),
            record(22, true),
        ];
        let window = ActivityWindow::collect(&records, now, 30, Tz::UTC);
        let slots = calculate(&window, 2);

        // 22:00 holds three correct records, weight 3.0.
        let summary: Vec<_> = slots
            .iter()
            .map(|s| (s.start_time, s.frequency, s.performance_score))
            .collect();
        assert_eq!(summary[0], (hm(22), 3, 1.0));
        assert_eq!(summary.len(), 4);
        // The remaining slots all weigh 1.0 and keep hour order.
        assert_eq!(summary[1].0, hm(8));
        assert_eq!(summary[2].0, hm(10));
        assert_eq!(summary[3].0, hm(14));
        assert_eq!(slots[0].end_time, hm(0));
    }

    #[test]
    fn empty_window_has_no_slots() {
        let now = Utc.with_ymd_and_hms(2024, 5, 11, 0, 0, 0).unwrap();
        let window = ActivityWindow::collect(&[], now, 30, Tz::UTC);
        assert!(calculate(&window, 2).is_empty());
    }
}
