//! Reciprocal Rank Fusion: score = Σ weight_i / (k + rank_i)
//!
//! Combines multiple ranked lists into a single fused ranking without
//! requiring score normalization across different retrieval signals.
//! Absence from a list contributes 0, not a penalty.

use std::collections::HashMap;

use scholar_core::models::{FusedHit, RankedHit};

/// Per-document accumulator while folding over the input lists.
struct Accumulator {
    score: f64,
    lists_hit: u32,
    min_rank: u32,
}

/// Fuse multiple ranked result lists using weighted Reciprocal Rank Fusion.
///
/// `k` is the smoothing constant (default 60). Higher k reduces the
/// influence of high-ranking items from any single list. `weights` pairs
/// with `lists` by index; missing entries default to 1.0.
///
/// Ties in fused score break by appearance in more lists, then lowest
/// minimum rank across lists, then lexical document id, so output order
/// is total and identical inputs always fuse identically.
pub fn fuse(lists: &[Vec<RankedHit>], weights: &[f64], k: u32) -> Vec<FusedHit> {
    let mut scores: HashMap<&str, Accumulator> = HashMap::new();

    for (i, list) in lists.iter().enumerate() {
        let weight = weights.get(i).copied().unwrap_or(1.0);
        for hit in list {
            let contribution = weight / (k as f64 + hit.rank as f64);
            let entry = scores.entry(hit.document_id.as_str()).or_insert(Accumulator {
                score: 0.0,
                lists_hit: 0,
                min_rank: u32::MAX,
            });
            entry.score += contribution;
            entry.lists_hit += 1;
            entry.min_rank = entry.min_rank.min(hit.rank);
        }
    }

    let mut fused: Vec<(&str, Accumulator)> = scores.into_iter().collect();
    fused.sort_by(|(a_id, a), (b_id, b)| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(b.lists_hit.cmp(&a.lists_hit))
            .then(a.min_rank.cmp(&b.min_rank))
            .then(a_id.cmp(b_id))
    });

    fused
        .into_iter()
        .map(|(id, acc)| FusedHit {
            document_id: id.to_string(),
            fused_score: acc.score,
        })
        .collect()
}
