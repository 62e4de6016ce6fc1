//! Per-category accuracy and recency over the full activity log.

use std::collections::HashMap;

use cadence_core::ActivityRecord;

/// Aggregate outcome of every record in one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryHistory<'a> {
    pub category: &'a str,
    pub attempts: u32,
    pub correct: u32,
    /// Latest completion time, epoch milliseconds.
    pub last_seen_millis: i64,
}

impl<'a> CategoryHistory<'a> {
    fn empty(category: &'a str) -> Self {
        Self {
            category,
            attempts: 0,
            correct: 0,
            last_seen_millis: i64::MIN,
        }
    }

    fn push(&mut self, record: &ActivityRecord) {
        self.attempts += 1;
        if record.correct {
            self.correct += 1;
        }
        self.last_seen_millis = self.last_seen_millis.max(record.timestamp_millis);
    }

    /// Share of correct attempts; 0.0 with no attempts.
    pub fn accuracy(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        f64::from(self.correct) / f64::from(self.attempts)
    }

    /// Share of incorrect attempts; 0.0 with no attempts.
    pub fn error_rate(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        1.0 - self.accuracy()
    }
}

/// Group records by category in first-seen order.
pub fn by_category(records: &[ActivityRecord]) -> Vec<CategoryHistory<'_>> {
    let mut groups: Vec<CategoryHistory<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for record in records {
        let category = record.category.as_str();
        let slot = *index.entry(category).or_insert_with(|| {
            groups.push(CategoryHistory::empty(category));
            groups.len() - 1
        });
        groups[slot].push(record);
    }
    groups
}

/// History of a single category; zero attempts if it never appears.
pub fn for_category<'a>(records: &[ActivityRecord], category: &'a str) -> CategoryHistory<'a> {
    let mut history = CategoryHistory::empty(category);
    for record in records.iter().filter(|r| r.category == category) {
        history.push(record);
    }
    history
}
