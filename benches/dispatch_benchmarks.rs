//! Criterion benchmarks for hierlog dispatch

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use hierlog::prelude::*;
use std::sync::Arc;

fn bench_registry_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_lookup");
    group.throughput(Throughput::Elements(1));

    let registry = Registry::new();
    registry.get_or_create("app.server.http").unwrap();

    group.bench_function("existing_name", |b| {
        b.iter(|| {
            let logger = registry.get_or_create(black_box("app.server.http")).unwrap();
            black_box(logger)
        });
    });

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let registry = Registry::new();
    let gated = registry.get_or_create("gated").unwrap();
    gated.set_level(Level::Error);

    group.bench_function("below_level", |b| {
        b.iter(|| {
            gated.debug(black_box("discarded cheaply"));
        });
    });

    let delivering = registry.get_or_create("delivering").unwrap();
    delivering.set_level(Level::Trace);
    let sink = Arc::new(MemorySink::new());
    delivering.add_sink(sink.clone());

    group.bench_function("delivered_to_memory", |b| {
        b.iter(|| {
            delivering.info(black_box("delivered message"));
        });
    });

    group.finish();
}

fn bench_deep_hierarchy(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_hierarchy");
    group.throughput(Throughput::Elements(1));

    let registry = Registry::new();
    let root_sink = Arc::new(MemorySink::new());
    let coarse = registry.get_or_create("a").unwrap();
    coarse.set_level(Level::Trace);
    coarse.add_sink(root_sink);
    coarse.add_filter(|record: &Record| !record.message.is_empty());

    let leaf = registry.get_or_create("a.b.c.d.e.f").unwrap();

    group.bench_function("six_level_resolution", |b| {
        b.iter(|| {
            leaf.info(black_box("walked up six levels"));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_registry_lookup,
    bench_dispatch,
    bench_deep_hierarchy
);
criterion_main!(benches);
