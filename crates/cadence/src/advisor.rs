//! StudyAdvisor — analyze, then generate, with a single `now`.

use std::path::Path;

use cadence_core::errors::CadenceResult;
use cadence_core::traits::{IPatternAnalyzer, ISuggestionGenerator};
use cadence_core::{ActivityRecord, CadenceConfig, ProgressSnapshot, StudyPattern, Suggestion};
use cadence_pattern::PatternAnalyzer;
use cadence_suggest::SuggestionEngine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A pattern and the suggestions derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub pattern: StudyPattern,
    /// Sorted ascending by priority.
    pub suggestions: Vec<Suggestion>,
    pub generated_at: DateTime<Utc>,
}

impl Advice {
    /// The `n` most urgent suggestions.
    pub fn top(&self, n: usize) -> &[Suggestion] {
        &self.suggestions[..n.min(self.suggestions.len())]
    }

    pub fn to_json(&self) -> CadenceResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Runs an analyzer and a generator over the same inputs.
pub struct StudyAdvisor<A = PatternAnalyzer, G = SuggestionEngine> {
    analyzer: A,
    generator: G,
}

impl StudyAdvisor {
    /// Advisor with default analysis and suggestion settings (UTC).
    pub fn new() -> Self {
        Self::with_components(PatternAnalyzer::new(), SuggestionEngine::new())
    }

    /// Build both engines from one validated configuration.
    pub fn from_config(config: &CadenceConfig) -> CadenceResult<Self> {
        let analyzer = PatternAnalyzer::from_config(config.analysis.clone())?;
        let generator = SuggestionEngine::from_config(config.suggestions.clone())?;
        Ok(Self::with_components(analyzer, generator))
    }

    /// Load a TOML configuration file and build both engines from it.
    pub fn from_config_file(path: impl AsRef<Path>) -> CadenceResult<Self> {
        let config = CadenceConfig::from_file(path)?;
        Self::from_config(&config)
    }
}

impl Default for StudyAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: IPatternAnalyzer, G: ISuggestionGenerator> StudyAdvisor<A, G> {
    pub fn with_components(analyzer: A, generator: G) -> Self {
        Self {
            analyzer,
            generator,
        }
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Analyze `records` and generate suggestions, both relative to `now`.
    pub fn advise(
        &self,
        records: &[ActivityRecord],
        progress: &ProgressSnapshot,
        now: DateTime<Utc>,
    ) -> Advice {
        let pattern = self.analyzer.analyze_at(records, progress, now);
        let suggestions = self.generator.generate(&pattern, records, progress, now);
        info!(
            records = records.len(),
            suggestions = suggestions.len(),
            "study advice generated"
        );
        Advice {
            pattern,
            suggestions,
            generated_at: now,
        }
    }
}
