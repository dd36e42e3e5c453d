//! Benchmarks for the decode-and-dispatch path

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;
use seraph_dispatch::dispatcher::{decode_arguments, encode_arguments};
use seraph_dispatch::Dispatcher;
use std::hint::black_box;

/// Benchmark the double JSON decode for growing argument lists
fn bench_decode_arguments(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_arguments");

    for size in [1usize, 8, 64] {
        let values: Vec<_> = (0..size)
            .map(|i| json!({"index": i, "name": format!("item-{i}"), "tags": ["a", "b"]}))
            .collect();
        let raw = encode_arguments(&values);

        group.bench_with_input(BenchmarkId::from_parameter(size), &raw, |b, raw| {
            b.iter(|| black_box(decode_arguments(raw)));
        });
    }

    group.finish();
}

/// Benchmark full evaluation through the default registry
fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let dispatcher = Dispatcher::with_defaults();

    group.bench_function("mathlib_add", |b| {
        b.iter(|| black_box(dispatcher.evaluate(&["mathlib", "add", r#"["1", "2"]"#])));
    });

    group.bench_function("greetings_greet", |b| {
        b.iter(|| black_box(dispatcher.evaluate(&["greetings", "greet", r#"["\"world\""]"#])));
    });

    group.bench_function("unknown_namespace", |b| {
        b.iter(|| black_box(dispatcher.evaluate(&["missing", "add", "[]"])));
    });

    group.finish();
}

criterion_group!(benches, bench_decode_arguments, bench_evaluate);
criterion_main!(benches);
