//! # cadence
//!
//! Adaptive study scheduling. Runs the pattern analyzer and the suggestion
//! engine in dependency order over one activity log and one injected clock.
//!
//! ```
//! use cadence::{ActivityRecord, ProgressSnapshot, StudyAdvisor};
//! use chrono::{TimeZone, Utc};
//!
//! let now = Utc.with_ymd_and_hms(2024, 6, 14, 15, 0, 0).unwrap();
//! let records = vec![ActivityRecord::new("t1", "Grammar", false, now.timestamp_millis(), 20)];
//!
//! let advice = StudyAdvisor::new().advise(&records, &ProgressSnapshot::default(), now);
//! assert_eq!(advice.pattern.weak_categories, vec!["Grammar"]);
//! assert!(advice.suggestions.iter().any(|s| s.id == "weak_area_Grammar"));
//! ```

pub mod advisor;

pub use advisor::{Advice, StudyAdvisor};
pub use cadence_core::{
    ActivityRecord, CadenceConfig, CadenceError, CadenceResult, ProgressSnapshot, StudyPattern,
    Suggestion, SuggestionKind, TimeSlot,
};
pub use cadence_pattern::PatternAnalyzer;
pub use cadence_suggest::SuggestionEngine;
