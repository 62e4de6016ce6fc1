//! Property tests for cadence-core model invariants.

use proptest::prelude::*;

use cadence_core::models::{Suggestion, SuggestionKind, TimeSlot};

proptest! {
    #[test]
    fn prop_suggestion_confidence_in_unit_range(raw in prop::num::f64::ANY) {
        let s = Suggestion::new("id", SuggestionKind::ConsistencyBoost, "t", "d", raw);
        prop_assert!((0.0..=1.0).contains(&s.confidence));
    }
}

proptest! {
    #[test]
    fn prop_priority_always_in_band(p in any::<u8>()) {
        let s = Suggestion::new("id", SuggestionKind::ReviewSession, "t", "d", 0.5).with_priority(p);
        prop_assert!((1..=5).contains(&s.priority));
    }
}

proptest! {
    #[test]
    fn prop_slot_score_in_unit_range(hour in 0u32..24, score in -10.0f64..10.0, freq in 0u32..1000) {
        let slot = TimeSlot::from_hours(hour, 2, score, freq);
        prop_assert!((0.0..=1.0).contains(&slot.performance_score));
        prop_assert!(slot.weight() >= 0.0);
    }
}
