//! Benchmarks for the lazy combinators.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use seqweave_core::prelude::*;

fn benchmark_windows(c: &mut Criterion) {
    let mut group = c.benchmark_group("windows");

    let data: Vec<i32> = (0..1000).collect();

    for size in [2, 5, 10, 20].iter() {
        group.bench_with_input(BenchmarkId::new("each_cons", size), size, |b, &size| {
            let cons = (&data).each_cons(size).unwrap();
            b.iter(|| black_box(cons.cursor().count()));
        });

        group.bench_with_input(BenchmarkId::new("each_slice", size), size, |b, &size| {
            let slices = (&data).each_slice(size).unwrap();
            b.iter(|| black_box(total_len(slices.cursor())));
        });
    }

    group.finish();
}

fn total_len<I: Iterator<Item = Vec<i32>>>(iter: I) -> usize {
    iter.map(|bucket| bucket.len()).sum()
}

fn benchmark_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping");

    let data: Vec<i32> = (0..10_000).map(|n| n / 7 + n % 3).collect();

    group.bench_function("chunk_while", |b| {
        let runs = (&data).chunk_while(|a: &i32, b: &i32| a <= b);
        b.iter(|| black_box(runs.cursor().count()));
    });

    group.bench_function("chunk", |b| {
        let runs = (&data).chunk(|n: &i32| n % 2 == 0);
        b.iter(|| black_box(runs.cursor().count()));
    });

    group.bench_function("slice_before", |b| {
        let sections = (&data).slice_before(|n: &i32| n % 100 == 0);
        b.iter(|| black_box(sections.cursor().count()));
    });

    group.finish();
}

fn benchmark_chained(c: &mut Criterion) {
    let mut group = c.benchmark_group("chained");

    let data: Vec<i32> = (0..10_000).collect();

    group.bench_function("filter_step_window", |b| {
        let chain = (&data)
            .find_all(|n: &i32| n % 3 != 0)
            .step(2)
            .unwrap()
            .each_cons(4)
            .unwrap()
            .transform(|window| window.iter().sum::<i32>());
        b.iter(|| black_box(chain.cursor().max()));
    });

    group.bench_function("grep", |b| {
        let matching = (&data).grep("7$").unwrap();
        b.iter(|| black_box(matching.cursor().count()));
    });

    group.bench_function("zip_ragged", |b| {
        let short: Vec<i32> = (0..5000).collect();
        let rows = (&data).zip(vec![&short]);
        b.iter(|| black_box(rows.cursor().filter(|row| row[1].is_none()).count()));
    });

    group.finish();
}

criterion_group!(benches, benchmark_windows, benchmark_grouping, benchmark_chained);
criterion_main!(benches);
