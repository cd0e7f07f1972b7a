use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use pullseq::prelude::*;

#[derive(Clone)]
struct Reading {
    sensor: u32,
    value: f64,
}

fn make_readings(rows: usize) -> Collection<Reading> {
    (0..rows)
        .map(|i| Reading {
            sensor: (i % 16) as u32,
            value: ((i * 7919) % 1000) as f64 / 10.0,
        })
        .collect()
}

fn bench_top_k(c: &mut Criterion) {
    let readings = make_readings(100_000);
    c.bench_function("top_k_100k_k10", |b| {
        b.iter(|| {
            let top = readings.top_k(|r| r.value, black_box(10));
            black_box(top);
        })
    });
}

fn bench_filter_map_chain(c: &mut Criterion) {
    let readings = make_readings(100_000);
    let pipeline = (&readings)
        .filter(|r: &Reading| r.sensor % 2 == 0)
        .map(|r: &Reading| r.value * 1.8 + 32.0);
    c.bench_function("filter_map_find_100k", |b| {
        b.iter(|| black_box(pipeline.find_index(|f| *f > 211.0)))
    });
}

fn bench_group_by(c: &mut Criterion) {
    let readings = make_readings(100_000);
    c.bench_function("group_by_100k", |b| {
        b.iter(|| {
            let groups = readings.group_by(|r| r.sensor);
            black_box(groups.len());
        })
    });
}

fn bench_generate_take(c: &mut Criterion) {
    c.bench_function("generate_take_1m", |b| {
        b.iter(|| {
            let total: i64 = count_from(0).cursor().take(black_box(1_000_000)).values().sum();
            black_box(total);
        })
    });
}

criterion_group!(
    benches,
    bench_top_k,
    bench_filter_map_chain,
    bench_group_by,
    bench_generate_take
);
criterion_main!(benches);
