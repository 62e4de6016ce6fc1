//! Property tests for cadence-pattern: bounds, caps, ordering, determinism.

use proptest::prelude::*;

use cadence_core::traits::IPatternAnalyzer;
use cadence_core::{ActivityRecord, ProgressSnapshot};
use cadence_pattern::PatternAnalyzer;
use test_fixtures::reference_now;

fn arb_records() -> impl Strategy<Value = Vec<ActivityRecord>> {
    let now_ms = reference_now().timestamp_millis();
    let forty_days_ms = 40 * 24 * 60 * 60 * 1000_i64;
    prop::collection::vec(
        (
            prop::sample::select(vec!["Grammar", "Reading", "Listening", "Vocabulary", "Math"]),
            any::<bool>(),
            0..forty_days_ms,
            0u32..120,
        ),
        0..60,
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

proptest! {
    #[test]
    fn prop_scores_in_unit_range(records in arb_records()) {
        let p = PatternAnalyzer::new().analyze_at(&records, &ProgressSnapshot::default(), reference_now());
        prop_assert!((0.0..=1.0).contains(&p.consistency_score));
        for slot in &p.preferred_time_slots {
            prop_assert!((0.0..=1.0).contains(&slot.performance_score));
            prop_assert!(slot.frequency > 0);
        }
    }
}

proptest! {
    #[test]
    fn prop_lists_are_capped(records in arb_records()) {
        let p = PatternAnalyzer::new().analyze_at(&records, &ProgressSnapshot::default(), reference_now());
        prop_assert!(p.strong_days.len() <= 3);
        prop_assert!(p.weak_categories.len() <= 3);
        prop_assert!(p.preferred_time_slots.len() <= 12);
    }
}

proptest! {
    #[test]
    fn prop_slots_sorted_by_weight(records in arb_records()) {
        let p = PatternAnalyzer::new().analyze_at(&records, &ProgressSnapshot::default(), reference_now());
        for pair in p.preferred_time_slots.windows(2) {
            prop_assert!(pair[0].weight() >= pair[1].weight());
        }
    }
}

proptest! {
    #[test]
    fn prop_deterministic(records in arb_records()) {
        let analyzer = PatternAnalyzer::new();
        let progress = ProgressSnapshot::default();
        let a = analyzer.analyze_at(&records, &progress, reference_now());
        let b = analyzer.analyze_at(&records, &progress, reference_now());
        prop_assert_eq!(a, b);
    }
}

proptest! {
    #[test]
    fn prop_break_interval_is_bucket_multiple(records in arb_records()) {
        let p = PatternAnalyzer::new().analyze_at(&records, &ProgressSnapshot::default(), reference_now());
        prop_assert_eq!(p.optimal_break_interval % 15, 0);
    }
}
