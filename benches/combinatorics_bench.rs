//! Combinatorial generator benchmarks.
//!
//! Measures full enumeration of `combinations`, `permutations` and `product`
//! over pools of increasing size. Every tuple is a fresh `Vec`, so these
//! numbers are dominated by per-tuple allocation.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use serpentine::iter::{combinations, combinations_with_replacement, permutations, product};
use std::hint::black_box;

const POOL_SIZES: [usize; 3] = [8, 12, 16];

fn benchmark_combinations(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("combinations");

    for size in POOL_SIZES {
        let pool: Vec<usize> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("choose_4", size), &pool, |bencher, pool| {
            bencher.iter(|| black_box(combinations(black_box(pool.iter().copied()), 4).count()));
        });
        group.bench_with_input(
            BenchmarkId::new("with_replacement_3", size),
            &pool,
            |bencher, pool| {
                bencher.iter(|| {
                    black_box(combinations_with_replacement(black_box(pool.iter().copied()), 3).count())
                });
            },
        );
    }

    group.finish();
}

fn benchmark_permutations(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("permutations");

    for size in [6_usize, 7, 8] {
        let pool: Vec<usize> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("full", size), &pool, |bencher, pool| {
            bencher.iter(|| black_box(permutations(black_box(pool.iter().copied()), None).count()));
        });
    }

    group.finish();
}

fn benchmark_product(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("product");

    for repeat in [4_usize, 8, 12] {
        group.bench_with_input(BenchmarkId::new("binary_repeat", repeat), &repeat, |bencher, &repeat| {
            bencher.iter(|| black_box(product(black_box(repeat), [[false, true]]).count()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_combinations,
    benchmark_permutations,
    benchmark_product
);
criterion_main!(benches);
