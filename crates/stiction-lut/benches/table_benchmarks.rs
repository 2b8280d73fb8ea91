//! Benchmark tests for table construction and lookup.
//!
//! Run with: cargo bench --bench table_benchmarks

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use stiction_lut::{LookUpTable, OutOfBoundsPolicy};

fn bench_build_exp_table(c: &mut Criterion) {
    c.bench_function("build_exp_1k", |b| {
        b.iter(|| {
            std::hint::black_box(LookUpTable::build(0.0, 1.0, 0.001, f64::exp))
        });
    });
}

fn bench_evaluate_in_domain(c: &mut Criterion) {
    let Ok(table) = LookUpTable::build(0.0, 1.0, 0.001, f64::exp) else {
        return;
    };
    let inputs: Vec<f64> = (0..=1000).map(|i| f64::from(i) / 1000.0).collect();

    let mut group = c.benchmark_group("evaluate");
    group.throughput(Throughput::Elements(inputs.len() as u64));
    group.bench_function("in_domain", |b| {
        b.iter(|| {
            for &input in &inputs {
                std::hint::black_box(table.evaluate(std::hint::black_box(input)).unwrap_or(0.0));
            }
        });
    });
    group.finish();
}

fn bench_evaluate_out_of_domain(c: &mut Criterion) {
    let Ok(table) = LookUpTable::build(0.0, 1.0, 0.001, f64::exp) else {
        return;
    };
    let table = table.with_out_of_bounds(OutOfBoundsPolicy::ClampToBound);
    let inputs: Vec<f64> = (0..=1000).map(|i| 2.0 + f64::from(i)).collect();

    c.bench_function("evaluate_clamped", |b| {
        b.iter(|| {
            for &input in &inputs {
                std::hint::black_box(table.evaluate(std::hint::black_box(input)).unwrap_or(0.0));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_build_exp_table,
    bench_evaluate_in_domain,
    bench_evaluate_out_of_domain
);
criterion_main!(benches);
