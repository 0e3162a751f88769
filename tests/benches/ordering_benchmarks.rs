//! # Fox-Names Ordering Benchmarks
//!
//! | Stage | Complexity | Input |
//! |-------|------------|-------|
//! | Constraint derivation | O(total symbols) | sorted random word lists |
//! | Kahn's sort | O(V + E) | chain over the whole alphabet |
//! | Full solve | derivation + sort + completion | sorted and shuffled lists |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::Duration;

use fox_ordering::algorithms::{derive_constraints, kahns_topological_sort};
use fox_ordering::{
    ConstraintSet, LexicalOrderingApi, LexicalOrderingService, PrecedenceGraph, Word,
};

const LATIN: &str = "abcdefghijklmnopqrstuvwxyz";

/// `count` random words sorted under a random hidden alphabet order
fn sorted_word_list(rng: &mut StdRng, count: usize, max_len: usize) -> Vec<Word> {
    let mut hidden: Vec<char> = LATIN.chars().collect();
    hidden.shuffle(rng);

    let mut keyed: Vec<Vec<usize>> = (0..count)
        .map(|_| {
            let len = rng.gen_range(1..=max_len);
            (0..len).map(|_| rng.gen_range(0..hidden.len())).collect()
        })
        .collect();
    keyed.sort();

    keyed
        .into_iter()
        .map(|ranks| {
            let text: String = ranks.into_iter().map(|r| hidden[r]).collect();
            Word::from(text.as_str())
        })
        .collect()
}

// ============================================================================
// Constraint derivation
// ============================================================================

fn bench_derive_constraints(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive-constraints");
    group.measurement_time(Duration::from_secs(5));

    let mut rng = StdRng::seed_from_u64(7);
    for size in [100, 1_000, 10_000] {
        let words = sorted_word_list(&mut rng, size, 12);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("sorted_words", size), &words, |b, words| {
            b.iter(|| black_box(derive_constraints(words).map(|set| set.len())))
        });
    }

    group.finish();
}

// ============================================================================
// Kahn's sort
// ============================================================================

fn bench_kahns_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("kahns-sort");

    let symbols: Vec<char> = LATIN.chars().collect();
    let mut constraints = ConstraintSet::new();
    for pair in symbols.windows(2) {
        constraints.insert(pair[0], pair[1]);
    }
    let graph = PrecedenceGraph::from_constraints(&constraints);

    group.bench_function("latin_chain", |b| {
        b.iter(|| black_box(kahns_topological_sort(&graph).map(|sorted| sorted.len())))
    });

    group.finish();
}

// ============================================================================
// Full solve
// ============================================================================

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.measurement_time(Duration::from_secs(5));

    let service = LexicalOrderingService::new();
    let mut rng = StdRng::seed_from_u64(11);

    for size in [100, 1_000, 10_000] {
        let sorted = sorted_word_list(&mut rng, size, 12);
        let mut shuffled = sorted.clone();
        shuffled.shuffle(&mut rng);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("orderable", size), &sorted, |b, words| {
            b.iter(|| black_box(service.solve(words).map(|o| o.is_impossible())))
        });
        group.bench_with_input(BenchmarkId::new("shuffled", size), &shuffled, |b, words| {
            b.iter(|| black_box(service.solve(words).map(|o| o.is_impossible())))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_derive_constraints,
    bench_kahns_chain,
    bench_solve
);
criterion_main!(benches);
