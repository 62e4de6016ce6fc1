//! # cadence-pattern
//!
//! Reduces an activity log to a [`StudyPattern`](cadence_core::StudyPattern).
//!
//! ## Metrics
//!
//! | Metric | Module | Grouping |
//! |--------|--------|----------|
//! | Preferred time slots | `metrics::time_slots` | local hour, fixed-width slots |
//! | Average session duration | `metrics::session` | all windowed records |
//! | Strong days | `metrics::strong_days` | local weekday |
//! | Weak categories | `metrics::weak_categories` | category, first-seen order |
//! | Consistency | `metrics::consistency` | distinct local calendar days |
//! | Optimal break interval | `metrics::break_interval` | session-length buckets |
//!
//! Every metric sees only records inside the lookback window (30 days by default).

pub mod engine;
pub mod metrics;
pub mod window;

pub use engine::PatternAnalyzer;
pub use window::ActivityWindow;
