//! Property-based tests for due selection and progress.
//!
//! Invariants:
//! - Keys that do not resolve to a catalog item never change the due count
//! - Adding learned entries never lowers any lesson's progress or the total

use proptest::prelude::*;

use nihongo_srs::services::progress::progress_report;
use nihongo_srs::srs::{due_count, due_queue, ItemKey, SrsData, SrsStatus};

mod common;
use common::{entry, sample_catalog, NOW};

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_catalog_key() -> impl Strategy<Value = ItemKey> {
    let catalog = sample_catalog();
    let keys = catalog.all_items();
    (0..keys.len()).prop_map(move |i| keys[i].clone())
}

fn arb_next_review() -> impl Strategy<Value = u64> {
    (NOW - 1_000_000)..=(NOW + 1_000_000)
}

fn arb_store() -> impl Strategy<Value = SrsData> {
    proptest::collection::vec((arb_catalog_key(), 0u32..6, arb_next_review()), 0..12).prop_map(
        |entries| {
            let mut data = SrsData::new();
            for (key, streak, next_review) in entries {
                entry(&mut data, key, streak, next_review);
            }
            data
        },
    )
}

/// Ids that never name a catalog item: unknown prefixes, unknown words.
fn arb_garbage_id() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(|s| format!("lesson-{s}")),
        "[a-z]{1,8}".prop_map(|s| format!("vocab-zz{s}")),
        "[a-z]{1,8}".prop_map(|s| format!("grammar-zz{s}")),
        "[a-z]{0,8}",
    ]
}

fn arb_garbage() -> impl Strategy<Value = Vec<(String, u32, u64)>> {
    proptest::collection::vec((arb_garbage_id(), 0u32..10, 0u64..=NOW), 0..8)
}

proptest! {
    #[test]
    fn garbage_keys_never_counted(data in arb_store(), garbage in arb_garbage()) {
        let catalog = sample_catalog();
        let baseline = due_count(&data, &catalog, NOW);

        let mut polluted = data.clone();
        for (id, streak, next_review) in garbage {
            polluted.insert(id.clone(), SrsStatus { id, streak, next_review });
        }

        prop_assert_eq!(due_count(&polluted, &catalog, NOW), baseline);
        prop_assert_eq!(due_queue(&polluted, &catalog, NOW).len(), baseline);
    }

    #[test]
    fn progress_is_monotonic(data in arb_store(), key in arb_catalog_key(), streak in 1u32..6) {
        let catalog = sample_catalog();
        let before = progress_report(&data, &catalog);

        let mut more = data.clone();
        entry(&mut more, key, streak, NOW);
        let after = progress_report(&more, &catalog);

        prop_assert!(after.total >= before.total);
        for (lesson, pct) in &before.lessons {
            prop_assert!(after.lessons[lesson] >= *pct);
        }
        prop_assert!(after.total <= 100);
    }

    #[test]
    fn due_entries_satisfy_predicate(data in arb_store()) {
        let catalog = sample_catalog();
        for item in due_queue(&data, &catalog, NOW) {
            prop_assert!(item.streak > 0);
            prop_assert!(item.next_review <= NOW);
            prop_assert!(catalog.contains(&item.key));
        }
    }
}
