//! Fusion hot-path benchmark over synthetic ranked lists.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scholar_core::models::RankedHit;
use scholar_retrieval::search::fuse;

fn synthetic_lists(n_lists: usize, list_len: u32) -> Vec<Vec<RankedHit>> {
    (0..n_lists)
        .map(|l| {
            (1..=list_len)
                .map(|rank| {
                    // Overlapping but shuffled document populations per list.
                    let doc = (rank * 7 + l as u32 * 13) % (list_len * 2);
                    RankedHit::new(format!("doc-{doc:04}"), rank, 1.0 / rank as f64)
                })
                .collect()
        })
        .collect()
}

fn bench_fuse(c: &mut Criterion) {
    let small = synthetic_lists(2, 10);
    let large = synthetic_lists(3, 200);

    c.bench_function("fuse_2x10", |b| {
        b.iter(|| fuse(black_box(&small), &[1.0, 1.0], 60))
    });
    c.bench_function("fuse_3x200", |b| {
        b.iter(|| fuse(black_box(&large), &[1.0, 1.0, 1.0], 60))
    });
}

criterion_group!(benches, bench_fuse);
criterion_main!(benches);
