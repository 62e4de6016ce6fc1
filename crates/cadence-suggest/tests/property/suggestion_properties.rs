//! Property tests for cadence-suggest: bounds, caps, ranking, determinism.

use std::collections::HashSet;

use proptest::prelude::*;

use cadence_core::traits::{IPatternAnalyzer, ISuggestionGenerator};
use cadence_core::{ActivityRecord, ProgressSnapshot, Suggestion, SuggestionKind};
use cadence_pattern::PatternAnalyzer;
use cadence_suggest::SuggestionEngine;
use chrono::Duration;
use test_fixtures::reference_now;

fn arb_records() -> impl Strategy<Value = Vec<ActivityRecord>> {
    let now_ms = reference_now().timestamp_millis();
    let twenty_days_ms = 20 * 24 * 60 * 60 * 1000_i64;
    prop::collection::vec(
        (
            prop::sample::select(vec!["Grammar", "Reading", "Listening", "Vocabulary"]),
            any::<bool>(),
            0..twenty_days_ms,
            0u32..90,
        ),
        0..50,
    )
    .prop_map(move |items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (category, correct, age, minutes))| {
                ActivityRecord::new(format!("t{i}"), category, correct, now_ms - age, minutes)
            })
            .collect()
    })
}

fn run(records: &[ActivityRecord], offset_minutes: i64) -> Vec<Suggestion> {
    let now = reference_now() + Duration::minutes(offset_minutes);
    let progress = ProgressSnapshot::default();
    let pattern = PatternAnalyzer::new().analyze_at(records, &progress, now);
    SuggestionEngine::new().generate(&pattern, records, &progress, now)
}

fn count(suggestions: &[Suggestion], kind: SuggestionKind) -> usize {
    suggestions.iter().filter(|s| s.kind == kind).count()
}

proptest! {
    #[test]
    fn prop_confidence_in_unit_range(records in arb_records(), offset in 0i64..2880) {
        for s in run(&records, offset) {
            prop_assert!((0.0..=1.0).contains(&s.confidence), "{} has {}", s.id, s.confidence);
        }
    }
}

proptest! {
    #[test]
    fn prop_sorted_by_priority(records in arb_records(), offset in 0i64..2880) {
        let suggestions = run(&records, offset);
        for pair in suggestions.windows(2) {
            prop_assert!(pair[0].priority <= pair[1].priority);
        }
        prop_assert!(suggestions.iter().all(|s| (1..=5).contains(&s.priority)));
    }
}

proptest! {
    #[test]
    fn prop_strategy_caps(records in arb_records(), offset in 0i64..2880) {
        let suggestions = run(&records, offset);
        prop_assert!(count(&suggestions, SuggestionKind::OptimalTime) <= 2);
        prop_assert!(count(&suggestions, SuggestionKind::WeakAreaFocus) <= 2);
        prop_assert!(count(&suggestions, SuggestionKind::BreakReminder) <= 1);
        prop_assert!(count(&suggestions, SuggestionKind::ConsistencyBoost) <= 1);
        prop_assert!(count(&suggestions, SuggestionKind::DifficultyAdjustment) <= 1);
        prop_assert!(count(&suggestions, SuggestionKind::ReviewSession) <= 2);
    }
}

proptest! {
    #[test]
    fn prop_ids_unique(records in arb_records(), offset in 0i64..2880) {
        let suggestions = run(&records, offset);
        let ids: HashSet<&str> = suggestions.iter().map(|s| s.id.as_str()).collect();
        prop_assert_eq!(ids.len(), suggestions.len());
    }
}

proptest! {
    #[test]
    fn prop_deterministic(records in arb_records(), offset in 0i64..2880) {
        prop_assert_eq!(run(&records, offset), run(&records, offset));
    }
}
