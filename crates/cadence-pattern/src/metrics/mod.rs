//! One module per [`StudyPattern`](cadence_core::StudyPattern) field.
//!
//! Each metric is a pure function of the [`ActivityWindow`](crate::ActivityWindow).

pub mod break_interval;
pub mod consistency;
pub mod session;
pub mod strong_days;
pub mod time_slots;
pub mod weak_categories;

/// Running sum and count for a zero-safe mean.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tally {
    pub sum: f64,
    pub count: u32,
}

impl Tally {
    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// Mean of the pushed values; 0.0 when empty.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum / f64::from(self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::Tally;

    #[test]
    fn empty_tally_has_zero_mean() {
        assert_eq!(Tally::default().mean(), 0.0);
    }

    #[test]
    fn tally_mean() {
        let mut t = Tally::default();
        t.push(1.0);
        t.push(0.0);
        t.push(1.0);
        t.push(1.0);
        assert_eq!(t.count, 4);
        assert!((t.mean() - 0.75).abs() < 1e-12);
    }
}
