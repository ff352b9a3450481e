//! Benchmarks for metadata extraction and search message building

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use eventmeta::{default_registry, summarize};
use serde_json::{json, Value};
use std::time::Duration;

fn error_payload(depth: usize) -> Value {
    let values: Vec<Value> = (0..depth)
        .map(|i| json!({"type": format!("Error{i}"), "value": format!("failure {i}\nwith context")}))
        .collect();
    json!({"exception": {"values": values}})
}

/// Benchmark metadata extraction per event kind
fn bench_get_metadata(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_metadata");
    group.measurement_time(Duration::from_secs(5));
    group.throughput(Throughput::Elements(1));

    let default_payload = json!({"logentry": {"formatted": "x".repeat(500)}});
    let error = error_payload(10);
    let transaction = json!({
        "contexts": {"trace": {"description": "/api/version"}},
        "transaction": "api_version",
        "start_timestamp": 1_600_000_000.25,
        "timestamp": 1_600_000_002.25
    });

    let registry = default_registry();
    group.bench_function("default", |b| {
        b.iter(|| black_box(registry.get("default").get_metadata(black_box(&default_payload))));
    });
    group.bench_function("error", |b| {
        b.iter(|| black_box(registry.get("error").get_metadata(black_box(&error))));
    });
    group.bench_function("transaction", |b| {
        b.iter(|| black_box(registry.get("transaction").get_metadata(black_box(&transaction))));
    });

    group.finish();
}

/// Benchmark the full summarize flow, including the search message
fn bench_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize");
    group.measurement_time(Duration::from_secs(5));

    let error = error_payload(3);
    let event_type = default_registry().get("error");
    group.bench_function("error_with_seed", |b| {
        b.iter(|| black_box(summarize(event_type, black_box(&error), "failure 2")));
    });

    group.finish();
}

criterion_group!(benches, bench_get_metadata, bench_summarize);
criterion_main!(benches);
