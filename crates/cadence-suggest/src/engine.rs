//! SuggestionEngine — runs all 6 strategies and ranks the result.
//!
//! Implements `ISuggestionGenerator` from cadence-core.

use cadence_core::errors::CadenceResult;
use cadence_core::traits::ISuggestionGenerator;
use cadence_core::{ActivityRecord, ProgressSnapshot, StudyPattern, Suggestion, SuggestionConfig};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::{debug, debug_span, trace};

use crate::context::SuggestionContext;
use crate::strategies::{
    self, BreakReminderStrategy, ConsistencyStrategy, DifficultyStrategy, OptimalTimeStrategy,
    ReviewStrategy, WeakAreaStrategy,
};

/// Stateless suggestion engine. Holds only its configuration.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    config: SuggestionConfig,
    tz: Tz,
}

impl SuggestionEngine {
    /// Create an engine with the default configuration (UTC).
    pub fn new() -> Self {
        Self {
            config: SuggestionConfig::default(),
            tz: Tz::UTC,
        }
    }

    /// Create an engine from a validated configuration.
    pub fn from_config(config: SuggestionConfig) -> CadenceResult<Self> {
        config.validate()?;
        let tz = config.tz()?;
        Ok(Self { config, tz })
    }

    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Run every strategy over a prepared context, in fixed order, then rank.
    pub fn generate_with_context(&self, ctx: &SuggestionContext<'_>) -> Vec<Suggestion> {
        let mut all: Vec<Suggestion> = Vec::new();

        // Strategy 1: Optimal time
        let optimal = OptimalTimeStrategy::suggest(ctx);
        trace!(count = optimal.len(), "optimal-time suggestions");
        all.extend(optimal);

        // Strategy 2: Weak area
        let weak = WeakAreaStrategy::suggest(ctx);
        trace!(count = weak.len(), "weak-area suggestions");
        all.extend(weak);

        // Strategy 3: Break reminder
        let breaks = BreakReminderStrategy::suggest(ctx);
        trace!(count = breaks.len(), "break-reminder suggestions");
        all.extend(breaks);

        // Strategy 4: Consistency
        let consistency = ConsistencyStrategy::suggest(ctx);
        trace!(count = consistency.len(), "consistency suggestions");
        all.extend(consistency);

        // Strategy 5: Difficulty
        let difficulty = DifficultyStrategy::suggest(ctx);
        trace!(count = difficulty.len(), "difficulty suggestions");
        all.extend(difficulty);

        // Strategy 6: Review
        let review = ReviewStrategy::suggest(ctx);
        trace!(count = review.len(), "review suggestions");
        all.extend(review);

        strategies::rank(all)
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ISuggestionGenerator for SuggestionEngine {
    fn generate(
        &self,
        pattern: &StudyPattern,
        records: &[ActivityRecord],
        progress: &ProgressSnapshot,
        now: DateTime<Utc>,
    ) -> Vec<Suggestion> {
        let _span = debug_span!("cadence.suggestions", record_count = records.len()).entered();

        let ctx = SuggestionContext {
            pattern,
            records,
            progress,
            now,
            tz: self.tz,
            config: &self.config,
        };
        let suggestions = self.generate_with_context(&ctx);
        debug!(count = suggestions.len(), "suggestions generated");
        suggestions
    }
}
