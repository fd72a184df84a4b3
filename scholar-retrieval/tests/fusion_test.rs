//! RRF fusion unit tests: golden values, tie-breaks, determinism.

use scholar_core::models::RankedHit;
use scholar_retrieval::search::fuse;

fn hit(id: &str, rank: u32) -> RankedHit {
    RankedHit::new(id, rank, 1.0 / rank as f64)
}

#[test]
fn shared_top_document_scores_two_over_sixty_one() {
    let lists = vec![vec![hit("doc-a", 1)], vec![hit("doc-a", 1)]];
    let fused = fuse(&lists, &[1.0, 1.0], 60);
    assert_eq!(fused.len(), 1);
    assert_eq!(fused[0].document_id, "doc-a");
    assert!((fused[0].fused_score - 2.0 / 61.0).abs() < 1e-12);
}

#[test]
fn output_never_exceeds_union_of_input_documents() {
    let lists = vec![
        vec![hit("a", 1), hit("b", 2), hit("c", 3)],
        vec![hit("b", 1), hit("c", 2), hit("d", 3)],
    ];
    let fused = fuse(&lists, &[1.0, 1.0], 60);
    assert_eq!(fused.len(), 4); // union {a, b, c, d}
}

#[test]
fn absence_from_a_list_is_not_a_penalty() {
    // b appears in both lists at middling rank, a only once at rank 1.
    let lists = vec![vec![hit("a", 1), hit("b", 2)], vec![hit("b", 1)]];
    let fused = fuse(&lists, &[1.0, 1.0], 60);
    let score = |id: &str| {
        fused
            .iter()
            .find(|f| f.document_id == id)
            .unwrap()
            .fused_score
    };
    assert!((score("a") - 1.0 / 61.0).abs() < 1e-12);
    assert!((score("b") - (1.0 / 62.0 + 1.0 / 61.0)).abs() < 1e-12);
    assert_eq!(fused[0].document_id, "b");
}

#[test]
fn scores_are_monotone_down_the_ranking() {
    let lists = vec![
        vec![hit("a", 1), hit("b", 2), hit("c", 3), hit("d", 4)],
        vec![hit("c", 1), hit("a", 2)],
    ];
    let fused = fuse(&lists, &[1.0, 1.0], 60);
    for pair in fused.windows(2) {
        assert!(pair[0].fused_score >= pair[1].fused_score);
    }
}

#[test]
fn per_list_weights_scale_contributions() {
    let lists = vec![vec![hit("a", 1)], vec![hit("b", 1)]];
    let fused = fuse(&lists, &[2.0, 1.0], 60);
    assert_eq!(fused[0].document_id, "a");
    assert!((fused[0].fused_score - 2.0 / 61.0).abs() < 1e-12);
    assert!((fused[1].fused_score - 1.0 / 61.0).abs() < 1e-12);
}

#[test]
fn missing_weights_default_to_one() {
    let lists = vec![vec![hit("a", 1)], vec![hit("b", 1)]];
    let fused = fuse(&lists, &[], 60);
    assert!((fused[0].fused_score - fused[1].fused_score).abs() < 1e-12);
}

#[test]
fn score_tie_breaks_by_list_count_then_min_rank_then_id() {
    // a and b land at ranks {5, 7} in mirrored lists: identical scores,
    // list counts, and min ranks, so lexical order decides.
    let lists = vec![
        vec![hit("b", 5), hit("a", 7)],
        vec![hit("a", 5), hit("b", 7)],
    ];
    let fused = fuse(&lists, &[1.0, 1.0], 60);
    assert_eq!(fused[0].document_id, "a");
    assert_eq!(fused[1].document_id, "b");
}

#[test]
fn equal_scores_prefer_document_in_more_lists() {
    // x: rank 30 in one list with k=60 → 1/90.
    // y: ranks 120 in two lists → 2/180 = 1/90. Same score, y in more lists.
    let lists = vec![
        vec![hit("x", 30), hit("y", 120)],
        vec![hit("y", 120)],
    ];
    let fused = fuse(&lists, &[1.0, 1.0], 60);
    assert!((fused[0].fused_score - fused[1].fused_score).abs() < 1e-12);
    assert_eq!(fused[0].document_id, "y");
}

#[test]
fn fusion_is_deterministic() {
    let lists = vec![
        vec![hit("m", 1), hit("n", 2), hit("o", 3)],
        vec![hit("o", 1), hit("n", 2), hit("p", 3)],
        vec![hit("p", 1), hit("m", 2)],
    ];
    let first = fuse(&lists, &[1.0, 0.5, 0.25], 60);
    let second = fuse(&lists, &[1.0, 0.5, 0.25], 60);
    assert_eq!(first, second);
}

#[test]
fn empty_input_fuses_to_empty() {
    assert!(fuse(&[], &[], 60).is_empty());
    assert!(fuse(&[vec![]], &[1.0], 60).is_empty());
}
