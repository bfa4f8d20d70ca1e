//! Benchmarks for individual combinators.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use seqext_core::prelude::*;

fn benchmark_windows(c: &mut Criterion) {
    let mut group = c.benchmark_group("windows");

    let data: Vec<i32> = (0..1000).collect();

    for window_size in [2, 5, 10, 20] {
        group.bench_with_input(
            BenchmarkId::new("to_vec", window_size),
            &window_size,
            |b, &window_size| {
                b.iter(|| data.iter().copied().into_seq().windows(window_size).to_vec());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("count", window_size),
            &window_size,
            |b, &window_size| {
                b.iter(|| data.iter().copied().into_seq().windows(window_size).count());
            },
        );
    }

    group.finish();
}

fn benchmark_chunks(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunks");

    let data: Vec<i32> = (0..1000).collect();

    for chunk_size in [10, 50, 100, 200] {
        group.bench_with_input(
            BenchmarkId::new("to_vec", chunk_size),
            &chunk_size,
            |b, &chunk_size| {
                b.iter(|| data.iter().copied().into_seq().chunks(chunk_size).to_vec());
            },
        );

        group.bench_with_input(
            BenchmarkId::new("flatten", chunk_size),
            &chunk_size,
            |b, &chunk_size| {
                b.iter(|| {
                    data.iter()
                        .copied()
                        .into_seq()
                        .chunks(chunk_size)
                        .flat_map(|chunk| chunk)
                        .count()
                });
            },
        );
    }

    group.finish();
}

fn benchmark_group_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("group");

    for run in [1, 8, 64] {
        let data: Vec<i64> = range(0, 4096).map(|n| n / run).to_vec();
        group.bench_with_input(BenchmarkId::new("runs", run), &data, |b, data| {
            b.iter(|| data.iter().into_seq().group(|a, b| a == b).count());
        });
    }

    group.finish();
}

fn benchmark_multi_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_source");

    let left: Vec<i64> = range(0, 1000).to_vec();
    let right: Vec<i64> = range(0, 1000).map(|n| n * 3).to_vec();

    group.bench_function("zip_with", |b| {
        b.iter(|| {
            left.iter()
                .into_seq()
                .zip_with(&right, |a, b| a + b)
                .reduce(0, |acc, x| acc + x)
        });
    });

    group.bench_function("chain", |b| {
        b.iter(|| left.iter().into_seq().chain(&right).count());
    });

    group.bench_function("product_32x32", |b| {
        b.iter(|| range(0, 32).product(range(0, 32).to_vec()).count());
    });

    group.bench_function("cycle_take", |b| {
        b.iter(|| left.iter().into_seq().cycle().take(black_box(5000)).count());
    });

    group.finish();
}

fn benchmark_against_std(c: &mut Criterion) {
    let mut group = c.benchmark_group("against_std");

    let data: Vec<i32> = (0..10000).collect();

    group.bench_function("std_filter_map", |b| {
        b.iter(|| {
            let result: Vec<_> = data.iter().filter(|&&x| x % 2 == 0).map(|x| x * 3).collect();
            result
        });
    });

    group.bench_function("seq_filter_map", |b| {
        b.iter(|| data.iter().into_seq().filter(|&&x| x % 2 == 0).map(|x| x * 3).to_vec());
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_windows,
    benchmark_chunks,
    benchmark_group_runs,
    benchmark_multi_source,
    benchmark_against_std
);
criterion_main!(benches);
