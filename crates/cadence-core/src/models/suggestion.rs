use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{PRIORITY_LOWEST, PRIORITY_URGENT};

/// Which strategy produced a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    OptimalTime,
    BreakReminder,
    WeakAreaFocus,
    ConsistencyBoost,
    DifficultyAdjustment,
    ReviewSession,
}

impl SuggestionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OptimalTime => "optimal_time",
            Self::BreakReminder => "break_reminder",
            Self::WeakAreaFocus => "weak_area_focus",
            Self::ConsistencyBoost => "consistency_boost",
            Self::DifficultyAdjustment => "difficulty_adjustment",
            Self::ReviewSession => "review_session",
        }
    }
}

impl std::fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ranked, confidence-scored recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Suggestion {
    /// Namespaced by strategy, e.g. `weak_area_Grammar`.
    pub id: String,
    pub kind: SuggestionKind,
    pub title: String,
    pub description: String,
    /// Confidence in this suggestion (0.0–1.0).
    pub confidence: f64,
    #[ts(type = "string | null")]
    pub scheduled_time: Option<DateTime<Utc>>,
    pub estimated_duration_minutes: Option<u32>,
    pub category: Option<String>,
    /// 1 is most urgent, 5 least urgent.
    pub priority: u8,
}

impl Suggestion {
    /// Create a suggestion with the most urgent priority and no optional fields.
    ///
    /// Confidence is clamped to [0.0, 1.0]; NaN becomes 0.0.
    pub fn new(
        id: impl Into<String>,
        kind: SuggestionKind,
        title: impl Into<String>,
        description: impl Into<String>,
        confidence: f64,
    ) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            description: description.into(),
            confidence,
            scheduled_time: None,
            estimated_duration_minutes: None,
            category: None,
            priority: PRIORITY_URGENT,
        }
    }

    /// Set the priority band, clamped to 1–5.
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority.clamp(PRIORITY_URGENT, PRIORITY_LOWEST);
        self
    }

    pub fn with_scheduled_time(mut self, at: DateTime<Utc>) -> Self {
        self.scheduled_time = Some(at);
        self
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.estimated_duration_minutes = Some(minutes);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}
