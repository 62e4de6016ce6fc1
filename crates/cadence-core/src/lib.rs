//! # cadence-core
//!
//! Foundation crate for the Cadence adaptive study scheduler.
//! Defines the activity/pattern/suggestion data model, engine traits,
//! errors, config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod time;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{AnalysisConfig, CadenceConfig, SuggestionConfig};
pub use errors::{CadenceError, CadenceResult, ConfigError};
pub use models::{
    ActivityRecord, ProgressSnapshot, StudyPattern, Suggestion, SuggestionKind, TimeSlot,
};
pub use traits::{IPatternAnalyzer, ISuggestionGenerator};
