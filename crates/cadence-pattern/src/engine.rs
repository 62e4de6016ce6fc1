//! PatternAnalyzer — windows the activity log and runs every metric.
//!
//! Implements `IPatternAnalyzer` from cadence-core.

use cadence_core::errors::CadenceResult;
use cadence_core::traits::IPatternAnalyzer;
use cadence_core::{ActivityRecord, AnalysisConfig, ProgressSnapshot, StudyPattern};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::{debug, debug_span};

use crate::metrics;
use crate::window::ActivityWindow;

/// Stateless pattern analyzer. Holds only its configuration.
#[derive(Debug, Clone)]
pub struct PatternAnalyzer {
    config: AnalysisConfig,
    tz: Tz,
}

impl PatternAnalyzer {
    /// Create an analyzer with the default configuration (UTC, 30-day window).
    pub fn new() -> Self {
        Self {
            config: AnalysisConfig::default(),
            tz: Tz::UTC,
        }
    }

    /// Create an analyzer from a validated configuration.
    pub fn from_config(config: AnalysisConfig) -> CadenceResult<Self> {
        config.validate()?;
        let tz = config.tz()?;
        Ok(Self { config, tz })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Compute every pattern field over an already-collected window.
    pub fn analyze_window(&self, window: &ActivityWindow<'_>) -> StudyPattern {
        StudyPattern {
            preferred_time_slots: metrics::time_slots::calculate(
                window,
                self.config.slot_width_hours,
            ),
            average_session_duration: metrics::session::average_minutes(window),
            strong_days: metrics::strong_days::calculate(window, self.config.max_strong_days),
            weak_categories: metrics::weak_categories::calculate(
                window,
                self.config.max_weak_categories,
            ),
            consistency_score: metrics::consistency::calculate(
                window,
                self.config.min_records_for_consistency,
            ),
            optimal_break_interval: metrics::break_interval::calculate(
                window,
                self.config.break_bucket_minutes,
            ),
        }
    }
}

impl Default for PatternAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl IPatternAnalyzer for PatternAnalyzer {
    fn analyze_at(
        &self,
        records: &[ActivityRecord],
        _progress: &ProgressSnapshot,
        now: DateTime<Utc>,
    ) -> StudyPattern {
        let _span = debug_span!("cadence.analysis", record_count = records.len()).entered();

        if records.is_empty() {
            debug!("no activity history, using default pattern");
            return StudyPattern::default_pattern();
        }

        let window = ActivityWindow::collect(records, now, self.config.lookback_days, self.tz);
        debug!(
            windowed = window.len(),
            lookback_days = self.config.lookback_days,
            "analysis window collected"
        );

        let pattern = self.analyze_window(&window);
        debug!(
            slots = pattern.preferred_time_slots.len(),
            weak_categories = pattern.weak_categories.len(),
            consistency = pattern.consistency_score,
            "pattern analysis complete"
        );
        pattern
    }
}
