//! Friction Model Benchmarks
//!
//! Criterion benchmarks for table construction and the per-step update.
//!
//! Run with: cargo bench --bench friction_benchmarks

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use stiction_friction::lambert::lambert_w0;
use stiction_friction::prelude::*;

fn bench_lambert_w0(c: &mut Criterion) {
    let inputs: Vec<f64> = (1..=1000).map(|i| -0.367 * f64::from(i) / 1000.0).collect();

    let mut group = c.benchmark_group("lambert_w0");
    group.throughput(Throughput::Elements(inputs.len() as u64));
    group.bench_function("principal_negative", |b| {
        b.iter(|| {
            for &x in &inputs {
                std::hint::black_box(lambert_w0(std::hint::black_box(x)).unwrap_or(0.0));
            }
        });
    });
    group.finish();
}

fn bench_build_curve(c: &mut Criterion) {
    let params = FrictionParams::default();
    c.bench_function("build_dry_friction_curve", |b| {
        b.iter(|| std::hint::black_box(DryFrictionCurve::build(std::hint::black_box(&params))));
    });
}

fn bench_step(c: &mut Criterion) {
    let Ok(mut model) = FrictionModel::new(FrictionParams::default()) else {
        return;
    };
    if model.build_table().is_err() {
        return;
    }

    // Slow oscillation crossing stick and both slip regimes.
    let trajectory: Vec<f64> = (0..1000)
        .map(|i| 0.05 * (f64::from(i) * 0.01).sin())
        .collect();

    let mut group = c.benchmark_group("step");
    group.throughput(Throughput::Elements(trajectory.len() as u64));
    group.bench_function("oscillation", |b| {
        b.iter(|| {
            for &position in &trajectory {
                model.set_torque(0.0);
                std::hint::black_box(model.step(std::hint::black_box(position)).unwrap_or(0.0));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_lambert_w0, bench_build_curve, bench_step);
criterion_main!(benches);
