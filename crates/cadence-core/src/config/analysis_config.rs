use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::{defaults, ensure_positive};
use crate::errors::ConfigError;
use crate::time;

/// Pattern analysis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// IANA timezone used for hour-of-day, weekday, and calendar-day grouping.
    pub timezone: String,
    /// Only records this many days old or newer are analyzed.
    pub lookback_days: u32,
    /// Width of a time-of-day slot in hours. Must divide 24.
    pub slot_width_hours: u32,
    /// Below this many windowed records the consistency score is neutral.
    pub min_records_for_consistency: usize,
    pub max_strong_days: usize,
    pub max_weak_categories: usize,
    /// Session-length bucket width used to find the best break interval.
    pub break_bucket_minutes: u32,
}

impl AnalysisConfig {
    /// Resolve the configured timezone.
    pub fn tz(&self) -> Result<Tz, ConfigError> {
        time::parse_timezone(&self.timezone)
    }

    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tz()?;
        ensure_positive("analysis.lookback_days", self.lookback_days)?;
        ensure_positive("analysis.slot_width_hours", self.slot_width_hours)?;
        ensure_positive("analysis.break_bucket_minutes", self.break_bucket_minutes)?;
        if 24 % self.slot_width_hours != 0 {
            return Err(ConfigError::InvalidValue {
                field: "analysis.slot_width_hours",
                reason: format!("{} does not divide 24", self.slot_width_hours),
            });
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            timezone: defaults::DEFAULT_TIMEZONE.to_string(),
            lookback_days: defaults::DEFAULT_LOOKBACK_DAYS,
            slot_width_hours: defaults::DEFAULT_SLOT_WIDTH_HOURS,
            min_records_for_consistency: defaults::DEFAULT_MIN_RECORDS_FOR_CONSISTENCY,
            max_strong_days: defaults::DEFAULT_MAX_STRONG_DAYS,
            max_weak_categories: defaults::DEFAULT_MAX_WEAK_CATEGORIES,
            break_bucket_minutes: defaults::DEFAULT_BREAK_BUCKET_MINUTES,
        }
    }
}
