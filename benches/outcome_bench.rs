//! Benchmarks for container pipelines.
//!
//! # Benchmark Categories
//!
//! 1. **Sync pipelines**: `Result` validation chains, success and failure paths
//! 2. **Ready async chains**: synchronous steps on a ready `ResultAsync`
//! 3. **Pending async chains**: the same steps after an asynchronous source
//! 4. **Combine**: keyed aggregation over growing input sizes
//!
//! Async groups use `criterion::to_async()` so the runtime is entered once
//! per sample rather than once per iteration.

#![cfg(feature = "async")]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use outcomes::{Result, ResultAsync, pipe};
use outcomes::operators::result::{ensure, map};
use std::hint::black_box;

// =============================================================================
// Sync Pipelines
// =============================================================================

fn validate(age: i32) -> Result<i32, String> {
    Result::success(age)
        .ensure(|age| *age >= 0, "negative".to_string())
        .ensure(|age| *age <= 130, "implausible".to_string())
        .map(|age| age + 1)
}

fn benchmark_sync_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("result_sync_pipeline");

    group.bench_function("methods_success", |bencher| {
        bencher.iter(|| validate(black_box(42)));
    });

    group.bench_function("methods_failure", |bencher| {
        bencher.iter(|| validate(black_box(-1)));
    });

    group.bench_function("pipe_operators", |bencher| {
        bencher.iter(|| {
            pipe!(
                Result::<i32, String>::success(black_box(42)),
                ensure(|age: &i32| *age >= 0, "negative".to_string()),
                map(|age: i32| age + 1),
            )
        });
    });

    group.finish();
}

// =============================================================================
// Async Chains
// =============================================================================

fn benchmark_async_chain(criterion: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut group = criterion.benchmark_group("result_async_chain");

    for depth in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::new("ready", depth), &depth, |bencher, &depth| {
            bencher.to_async(&runtime).iter(|| async move {
                let mut chain = ResultAsync::<i32, String>::success(0);
                for _ in 0..depth {
                    chain = chain.map(|n| n + 1);
                }
                black_box(chain.await)
            });
        });

        group.bench_with_input(BenchmarkId::new("pending", depth), &depth, |bencher, &depth| {
            bencher.to_async(&runtime).iter(|| async move {
                let mut chain =
                    ResultAsync::<i32, String>::from_future(async { Result::success(0) });
                for _ in 0..depth {
                    chain = chain.map(|n| n + 1);
                }
                black_box(chain.await)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Combine
// =============================================================================

fn benchmark_combine(criterion: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut group = criterion.benchmark_group("result_async_combine");

    for size in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("all_success", size), &size, |bencher, &size| {
            bencher.to_async(&runtime).iter(|| async move {
                let combined = ResultAsync::combine((0..size).map(|index| {
                    (index, ResultAsync::<i32, String>::from_future(async move { Result::success(index) }))
                }));
                black_box(combined.await)
            });
        });

        group.bench_with_input(BenchmarkId::new("all_failure", size), &size, |bencher, &size| {
            bencher.to_async(&runtime).iter(|| async move {
                let combined = ResultAsync::combine(
                    (0..size).map(|index| (index, Result::<i32, String>::failure(index.to_string()))),
                );
                black_box(combined.await)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_sync_pipeline,
    benchmark_async_chain,
    benchmark_combine
);

criterion_main!(benches);
