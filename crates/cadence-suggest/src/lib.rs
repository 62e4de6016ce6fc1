//! # cadence-suggest
//!
//! Turns a [`StudyPattern`](cadence_core::StudyPattern) and the raw activity
//! log into ranked [`Suggestion`](cadence_core::Suggestion)s.
//!
//! ## 6 Suggestion Strategies
//!
//! | Strategy | Signal | Priority |
//! |----------|--------|----------|
//! | Optimal time | Top preferred slots still ahead today | 2 |
//! | Weak area | Highest error-rate categories | 1 |
//! | Break reminder | Minutes since the latest record vs. break interval | 2 |
//! | Consistency | Low consistency score | 1 |
//! | Difficulty | Accuracy over the 10 most recent records | 1 or 3 |
//! | Review | Categories untouched for more than 3 days | 3 |
//!
//! ## Ranking
//!
//! Outputs are concatenated in the order above, then stable-sorted by
//! ascending priority, so equal priorities keep strategy order.

pub mod context;
pub mod engine;
pub mod history;
pub mod strategies;

pub use context::SuggestionContext;
pub use engine::SuggestionEngine;
