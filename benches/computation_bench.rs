//! Benchmark for computation evaluation.
//!
//! Measures the evaluator on long chains over each built-in effect, and the
//! cost of short-circuiting early in a long chain.

use bailout::computation::Computation;
use bailout::effect::{IO, IoEffect};
use bailout::typeclass::{Identity, IdentityEffect, OptionEffect};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const CHAIN_LENGTHS: [u64; 3] = [100, 1_000, 10_000];

// =============================================================================
// Pure chains
// =============================================================================

fn benchmark_map_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("computation_map_chain");

    for length in CHAIN_LENGTHS {
        group.bench_with_input(BenchmarkId::new("identity", length), &length, |bencher, &length| {
            bencher.iter(|| {
                let computation = (0..length).fold(
                    Computation::<IdentityEffect, u64, u64>::intermediate(black_box(0)),
                    |computation, _| computation.map(|n| n + 1),
                );
                black_box(computation.evaluate().into_inner())
            });
        });
    }

    group.finish();
}

fn benchmark_short_circuit(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("computation_short_circuit");

    for length in CHAIN_LENGTHS {
        let id = BenchmarkId::new("outcome_first", length);
        group.bench_with_input(id, &length, |bencher, &length| {
            bencher.iter(|| {
                let computation = (0..length).fold(
                    Computation::<IdentityEffect, u64, u64>::intermediate(black_box(0))
                        .ensure(|n| *n > 0, u64::MAX),
                    |computation, _| computation.map(|n| n + 1),
                );
                black_box(computation.evaluate().into_inner())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Effectful chains
// =============================================================================

fn benchmark_semiflat_map_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("computation_semiflat_map_chain");

    for length in CHAIN_LENGTHS {
        group.bench_with_input(BenchmarkId::new("identity", length), &length, |bencher, &length| {
            bencher.iter(|| {
                let computation = (0..length).fold(
                    Computation::<IdentityEffect, u64, u64>::intermediate(black_box(0)),
                    |computation, _| computation.semiflat_map(|n| Identity(n + 1)),
                );
                black_box(computation.evaluate().into_inner())
            });
        });

        group.bench_with_input(BenchmarkId::new("option", length), &length, |bencher, &length| {
            bencher.iter(|| {
                let computation = (0..length).fold(
                    Computation::<OptionEffect, u64, u64>::intermediate(black_box(0)),
                    |computation, _| computation.semiflat_map(|n| Some(n + 1)),
                );
                black_box(computation.evaluate())
            });
        });

        group.bench_with_input(BenchmarkId::new("io", length), &length, |bencher, &length| {
            bencher.iter(|| {
                let computation = (0..length).fold(
                    Computation::<IoEffect, u64, u64>::intermediate(black_box(0)),
                    |computation, _| computation.semiflat_map(|n| IO::pure(n + 1)),
                );
                black_box(computation.evaluate().run_unsafe())
            });
        });
    }

    group.finish();
}

#[cfg(feature = "async")]
fn benchmark_async_chain(criterion: &mut Criterion) {
    use bailout::effect::AsyncEffect;
    use futures::FutureExt;

    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let mut group = criterion.benchmark_group("computation_async_chain");

    for length in CHAIN_LENGTHS {
        let id = BenchmarkId::new("semiflat_map", length);
        group.bench_with_input(id, &length, |bencher, &length| {
            bencher.to_async(&runtime).iter(|| async move {
                let computation = (0..length).fold(
                    Computation::<AsyncEffect, u64, u64>::intermediate(black_box(0)),
                    |computation, _| computation.semiflat_map(|n| async move { n + 1 }.boxed()),
                );
                black_box(computation.evaluate().await)
            });
        });
    }

    group.finish();
}

#[cfg(not(feature = "async"))]
fn benchmark_async_chain(_criterion: &mut Criterion) {}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_map_chain,
    benchmark_short_circuit,
    benchmark_semiflat_map_chain,
    benchmark_async_chain
);

criterion_main!(benches);
