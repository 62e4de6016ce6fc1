use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants;

/// A window of the day with its historical accuracy and usage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TimeSlot {
    #[ts(type = "string")]
    pub start_time: NaiveTime,
    #[ts(type = "string")]
    pub end_time: NaiveTime,
    /// Mean correctness of records in the slot (0.0–1.0).
    pub performance_score: f64,
    /// Number of records observed in the slot.
    pub frequency: u32,
}

impl TimeSlot {
    /// Create a slot, clamping the score to [0.0, 1.0].
    pub fn new(
        start_time: NaiveTime,
        end_time: NaiveTime,
        performance_score: f64,
        frequency: u32,
    ) -> Self {
        Self {
            start_time,
            end_time,
            performance_score: performance_score.clamp(0.0, 1.0),
            frequency,
        }
    }

    /// A slot covering `[start_hour, start_hour + width_hours)`; the end wraps past midnight.
    pub fn from_hours(start_hour: u32, width_hours: u32, performance_score: f64, frequency: u32) -> Self {
        let start = NaiveTime::from_hms_opt(start_hour % 24, 0, 0).unwrap_or_default();
        let end = NaiveTime::from_hms_opt((start_hour + width_hours) % 24, 0, 0).unwrap_or_default();
        Self::new(start, end, performance_score, frequency)
    }

    /// Ranking weight: score × frequency.
    pub fn weight(&self) -> f64 {
        self.performance_score * f64::from(self.frequency)
    }
}

/// Behavioral summary derived from a window of activity records.
///
/// Recomputed on every analysis; never persisted by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StudyPattern {
    /// Most useful slots first.
    pub preferred_time_slots: Vec<TimeSlot>,
    /// Mean session length in minutes, truncated.
    pub average_session_duration: u32,
    /// Best-performing weekdays first, at most three by default.
    #[ts(type = "Array<string>")]
    pub strong_days: Vec<Weekday>,
    /// Highest error-rate categories first, at most three by default.
    pub weak_categories: Vec<String>,
    /// Share of recent days with any activity (0.0–1.0).
    pub consistency_score: f64,
    /// Session length (minutes) after which accuracy historically peaks.
    pub optimal_break_interval: u32,
}

impl StudyPattern {
    /// The pattern reported when there is no history at all.
    pub fn default_pattern() -> Self {
        Self {
            preferred_time_slots: constants::DEFAULT_SLOTS
                .iter()
                .map(|&(hour, score)| {
                    TimeSlot::from_hours(
                        hour,
                        constants::DEFAULT_SLOT_WIDTH_HOURS,
                        score,
                        constants::DEFAULT_SLOT_FREQUENCY,
                    )
                })
                .collect(),
            average_session_duration: constants::DEFAULT_SESSION_MINUTES,
            strong_days: constants::DEFAULT_STRONG_DAYS.to_vec(),
            weak_categories: Vec::new(),
            consistency_score: constants::NEUTRAL_CONSISTENCY,
            optimal_break_interval: constants::DEFAULT_BREAK_INTERVAL_MINUTES,
        }
    }

    /// Whether this is exactly the no-history pattern.
    pub fn is_default(&self) -> bool {
        *self == Self::default_pattern()
    }

    /// The highest-ranked slot, if any.
    pub fn best_time_slot(&self) -> Option<&TimeSlot> {
        self.preferred_time_slots.first()
    }
}

impl Default for StudyPattern {
    fn default() -> Self {
        Self::default_pattern()
    }
}
