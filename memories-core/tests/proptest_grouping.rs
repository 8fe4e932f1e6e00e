//! Property-Based Tests for age bucketing and routing.
//!
//! Uses `proptest` to verify the structural guarantees of the grouping
//! partition under arbitrary age sequences:
//!
//!   - every element of a run shares `(years, months)` with the run's head
//!   - adjacent runs have different buckets (runs are maximal)
//!   - concatenating the runs in order reproduces the input exactly

use proptest::prelude::*;

use chrono::NaiveDate;
use memories_core::types::{Memory, MemoryId};
use memories_core::{group_by_age, Route};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_memories() -> impl Strategy<Value = Vec<Memory>> {
    prop::collection::vec((0u32..4, 0u32..12, 0u32..31), 0..64).prop_map(|ages| {
        ages.into_iter()
            .enumerate()
            .map(|(i, (years, months, days))| Memory {
                id: MemoryId(i as i64),
                date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
                note: format!("note {i}"),
                years,
                months,
                days,
            })
            .collect()
    })
}

// ---------------------------------------------------------------------------
// Property: grouping is a partition into maximal runs
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn every_member_shares_the_run_heads_bucket(memories in arb_memories()) {
        for group in group_by_age(&memories) {
            prop_assert!(!group.memories.is_empty());
            for memory in &group.memories {
                prop_assert_eq!(memory.age(), group.age);
            }
        }
    }

    #[test]
    fn adjacent_runs_differ(memories in arb_memories()) {
        let groups = group_by_age(&memories);
        for pair in groups.windows(2) {
            prop_assert_ne!(pair[0].age, pair[1].age);
        }
    }

    #[test]
    fn concatenation_reproduces_the_input(memories in arb_memories()) {
        let flattened: Vec<Memory> = group_by_age(&memories)
            .into_iter()
            .flat_map(|group| group.memories)
            .collect();
        prop_assert_eq!(flattened, memories);
    }
}

// ---------------------------------------------------------------------------
// Property: route parsing never panics and canonical fragments round-trip
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn route_parsing_is_total(fragment in "\\PC*") {
        let _ = Route::from_fragment(&fragment);
    }

    #[test]
    fn person_fragments_round_trip(name in "[A-Za-z][A-Za-z0-9]{0,12}", id in proptest::option::of(0i64..10_000)) {
        let route = Route::Person {
            name: memories_core::Name::from(name.as_str()),
            memory: id.map(memories_core::MemoryId),
        };
        prop_assert_eq!(Route::from_fragment(&route.fragment()), route);
    }
}
