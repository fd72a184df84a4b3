//! Property tests for RRF fusion.

use std::collections::BTreeSet;

use proptest::prelude::*;
use scholar_core::models::RankedHit;
use scholar_retrieval::search::fuse;

/// Strategy: a ranked list with unique documents and 1-based ranks.
fn ranked_list(max_len: usize) -> impl Strategy<Value = Vec<RankedHit>> {
    prop::collection::btree_set(0u32..50, 0..=max_len).prop_map(|ids| {
        ids.into_iter()
            .enumerate()
            .map(|(i, id)| RankedHit::new(format!("doc-{id:02}"), i as u32 + 1, 0.0))
            .collect()
    })
}

proptest! {
    #[test]
    fn output_is_a_subset_of_the_input_union(
        lists in prop::collection::vec(ranked_list(12), 0..4),
        k in 1u32..200,
    ) {
        let fused = fuse(&lists, &[], k);
        let union: BTreeSet<&str> = lists
            .iter()
            .flatten()
            .map(|h| h.document_id.as_str())
            .collect();
        prop_assert_eq!(fused.len(), union.len());
        for f in &fused {
            prop_assert!(union.contains(f.document_id.as_str()));
        }
    }

    #[test]
    fn scores_never_increase_down_the_ranking(
        lists in prop::collection::vec(ranked_list(12), 0..4),
        k in 1u32..200,
    ) {
        let fused = fuse(&lists, &[], k);
        for pair in fused.windows(2) {
            prop_assert!(pair[0].fused_score >= pair[1].fused_score);
        }
    }

    #[test]
    fn fusion_is_order_stable_for_identical_inputs(
        lists in prop::collection::vec(ranked_list(12), 0..4),
        k in 1u32..200,
    ) {
        let first = fuse(&lists, &[], k);
        let second = fuse(&lists, &[], k);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_score_is_positive_and_bounded(
        lists in prop::collection::vec(ranked_list(12), 1..4),
        k in 1u32..200,
    ) {
        let n_lists = lists.len() as f64;
        let fused = fuse(&lists, &[], k);
        for f in &fused {
            prop_assert!(f.fused_score > 0.0);
            // Best case: rank 1 in every list.
            prop_assert!(f.fused_score <= n_lists / (k as f64 + 1.0) + 1e-12);
        }
    }
}
