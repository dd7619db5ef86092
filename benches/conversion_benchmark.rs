// ============================================================================
// Check Writer Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. String conversion - plain, grouped and long inputs
// 2. Float conversion - includes the float-to-text hop
// 3. Rendering only - pre-parsed amounts
// ============================================================================

use check_writer::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// ============================================================================
// String Conversion
// ============================================================================

fn benchmark_string_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_str");
    let writer = CheckWriter::default();

    let inputs = [
        ("small", "45"),
        ("cents", "123.46"),
        ("grouped", "7,456,123.46"),
        ("max", "999,999,999,999,999,999.99"),
    ];

    for (name, input) in inputs.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| black_box(writer.convert(black_box(*input))))
        });
    }

    group.finish();
}

// ============================================================================
// Float Conversion
// ============================================================================

fn benchmark_float_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_f64");
    let writer = CheckWriter::default();

    for value in [0.995, -102_234.0, 8_999_999_999_999_999.0].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(value), value, |b, &value| {
            b.iter(|| black_box(writer.convert(black_box(value))))
        });
    }

    group.finish();
}

// ============================================================================
// Rendering Only
// ============================================================================

fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for dollars in [1u128, 1_001, 7_456_123, 999_999_999_999_999_999].iter() {
        let Some(amount) = CheckAmount::new(Sign::Positive, *dollars, 46) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::from_parameter(dollars), &amount, |b, amount| {
            b.iter(|| black_box(render(amount)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_string_conversion,
    benchmark_float_conversion,
    benchmark_render
);
criterion_main!(benches);
