use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::{defaults, ensure_positive, ensure_unit};
use crate::errors::ConfigError;
use crate::time;

/// Suggestion generation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// IANA timezone that defines "today" when scheduling optimal-time suggestions.
    pub timezone: String,
    pub max_optimal_slots: usize,
    pub max_weak_areas: usize,
    pub weak_area_duration_minutes: u32,
    pub break_reminder_confidence: f64,
    /// Consistency scores strictly below this trigger a boost suggestion.
    pub consistency_threshold: f64,
    pub consistency_duration_minutes: u32,
    /// Number of most recent records used to judge difficulty.
    pub recent_window: usize,
    /// Recent accuracy strictly above this suggests harder material.
    pub high_performance_threshold: f64,
    /// Recent accuracy strictly below this suggests easier material.
    pub low_performance_threshold: f64,
    /// A category unseen for strictly longer than this is due for review.
    pub review_after_days: u32,
    pub max_reviews: usize,
    pub review_duration_minutes: u32,
    /// Review confidence is raised when category accuracy is below this.
    pub review_struggling_threshold: f64,
}

impl SuggestionConfig {
    /// Resolve the configured timezone.
    pub fn tz(&self) -> Result<Tz, ConfigError> {
        time::parse_timezone(&self.timezone)
    }

    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tz()?;
        ensure_unit(
            "suggestions.break_reminder_confidence",
            self.break_reminder_confidence,
        )?;
        ensure_unit("suggestions.consistency_threshold", self.consistency_threshold)?;
        ensure_unit(
            "suggestions.high_performance_threshold",
            self.high_performance_threshold,
        )?;
        ensure_unit(
            "suggestions.low_performance_threshold",
            self.low_performance_threshold,
        )?;
        ensure_unit(
            "suggestions.review_struggling_threshold",
            self.review_struggling_threshold,
        )?;
        ensure_positive("suggestions.recent_window", self.recent_window)?;
        if self.low_performance_threshold > self.high_performance_threshold {
            return Err(ConfigError::InvalidValue {
                field: "suggestions.low_performance_threshold",
                reason: format!(
                    "{} exceeds high_performance_threshold {}",
                    self.low_performance_threshold, self.high_performance_threshold
                ),
            });
        }
        Ok(())
    }
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            timezone: defaults::DEFAULT_TIMEZONE.to_string(),
            max_optimal_slots: defaults::DEFAULT_MAX_OPTIMAL_SLOTS,
            max_weak_areas: defaults::DEFAULT_MAX_WEAK_AREAS,
            weak_area_duration_minutes: defaults::DEFAULT_WEAK_AREA_DURATION_MINUTES,
            break_reminder_confidence: defaults::DEFAULT_BREAK_REMINDER_CONFIDENCE,
            consistency_threshold: defaults::DEFAULT_CONSISTENCY_THRESHOLD,
            consistency_duration_minutes: defaults::DEFAULT_CONSISTENCY_DURATION_MINUTES,
            recent_window: defaults::DEFAULT_RECENT_WINDOW,
            high_performance_threshold: defaults::DEFAULT_HIGH_PERFORMANCE_THRESHOLD,
            low_performance_threshold: defaults::DEFAULT_LOW_PERFORMANCE_THRESHOLD,
            review_after_days: defaults::DEFAULT_REVIEW_AFTER_DAYS,
            max_reviews: defaults::DEFAULT_MAX_REVIEWS,
            review_duration_minutes: defaults::DEFAULT_REVIEW_DURATION_MINUTES,
            review_struggling_threshold: defaults::DEFAULT_REVIEW_STRUGGLING_THRESHOLD,
        }
    }
}
