//! The lookback window: records recent enough to analyze, paired with their
//! local date-time in the analyzer's timezone.

use cadence_core::ActivityRecord;
use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

/// A windowed record and its local completion time.
#[derive(Debug, Clone)]
pub struct LocalRecord<'a> {
    pub record: &'a ActivityRecord,
    pub local: DateTime<Tz>,
}

/// Records completed no earlier than `now - lookback_days`.
#[derive(Debug, Clone)]
pub struct ActivityWindow<'a> {
    records: Vec<LocalRecord<'a>>,
    lookback_days: u32,
}

impl<'a> ActivityWindow<'a> {
    /// Select the records inside the window, preserving input order.
    ///
    /// Records whose timestamp cannot be represented are dropped. A lookback
    /// reaching past the earliest representable instant keeps every record.
    pub fn collect(
        records: &'a [ActivityRecord],
        now: DateTime<Utc>,
        lookback_days: u32,
        tz: Tz,
    ) -> Self {
        let cutoff = now
            .checked_sub_signed(Duration::days(i64::from(lookback_days)))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let records = records
            .iter()
            .filter_map(|record| {
                let at = record.timestamp()?;
                (at >= cutoff).then(|| LocalRecord {
                    record,
                    local: at.with_timezone(&tz),
                })
            })
            .collect();
        Self {
            records,
            lookback_days,
        }
    }

    pub fn records(&self) -> &[LocalRecord<'a>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn lookback_days(&self) -> u32 {
        self.lookback_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn at(days_ago: i64, now: DateTime<Utc>) -> ActivityRecord {
        let ts = (now - Duration::days(days_ago)).timestamp_millis();
        ActivityRecord::new(format!("t{days_ago}"), "Math", true, ts, 10)
    }

    #[test]
    fn drops_records_older_than_lookback() {
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
        let records = vec![at(0, now), at(29, now), at(30, now), at(31, now), at(90, now)];
        let window = ActivityWindow::collect(&records, now, 30, Tz::UTC);
        let ids: Vec<_> = window.records().iter().map(|r| r.record.task_id.as_str()).collect();
        assert_eq!(ids, vec!["t0", "t29", "t30"]);
    }

    #[test]
    fn drops_unrepresentable_timestamps() {
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
        let records = vec![ActivityRecord::new("bad", "Math", true, i64::MAX, 5)];
        assert!(ActivityWindow::collect(&records, now, 30, Tz::UTC).is_empty());
    }

    #[test]
    fn lookback_past_representable_range_keeps_everything() {
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
        let records = vec![at(0, now), at(90, now), at(100_000, now)];
        let window = ActivityWindow::collect(&records, now, 200_000_000, Tz::UTC);
        assert_eq!(window.len(), 3);
        assert_eq!(window.lookback_days(), 200_000_000);
    }

    #[test]
    fn local_time_follows_timezone() {
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
        let records = vec![ActivityRecord::new("a", "Math", true, now.timestamp_millis(), 5)];
        let window = ActivityWindow::collect(&records, now, 30, Tz::Asia__Tokyo);
        assert_eq!(window.records()[0].local.hour(), 21);
    }
}
