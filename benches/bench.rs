// Criterion benchmarks for BMI Meter

use bmi_meter::core::{indicator_offset, parse_float, parse_int};
use bmi_meter::models::BmiRequest;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_indicator_offset(c: &mut Criterion) {
    c.bench_function("indicator_offset", |b| {
        b.iter(|| indicator_offset(black_box(22.9), black_box(300.0)));
    });
}

fn bench_coercion(c: &mut Criterion) {
    let mut group = c.benchmark_group("coercion");

    for input in ["70", "1.75", "  72.5kg", "1e3", "", "abc"] {
        group.bench_with_input(BenchmarkId::new("parse_float", input), &input, |b, s| {
            b.iter(|| parse_float(black_box(s)));
        });
    }

    for input in ["30", "0x1E", "30.5", ""] {
        group.bench_with_input(BenchmarkId::new("parse_int", input), &input, |b, s| {
            b.iter(|| parse_int(black_box(s)));
        });
    }

    group.finish();
}

fn bench_request_encoding(c: &mut Criterion) {
    let request = BmiRequest::from_fields("70", "1.75", "male", "30");

    c.bench_function("request_encoding", |b| {
        b.iter(|| serde_json::to_vec(black_box(&request)));
    });
}

criterion_group!(benches, bench_indicator_offset, bench_coercion, bench_request_encoding);
criterion_main!(benches);
