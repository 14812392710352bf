use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rayleigh::form::{self, FormFields};
use rayleigh::{RayleighSolver, SolverConfig, solve};

/// Period pairs spanning short and long structures.
fn period_pairs(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let t1 = 0.2 + 4.0 * (i as f64 / n as f64);
            (t1, t1 * 0.35)
        })
        .collect()
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    group.bench_function("default", |b| {
        b.iter(|| solve(black_box(0.75), black_box(0.54), black_box(0.05)))
    });

    let exact = RayleighSolver::new(SolverConfig::exact()).expect("exact config is valid");
    group.bench_function("exact_check", |b| {
        b.iter(|| exact.solve(black_box(0.75), black_box(0.54), black_box(0.05)))
    });

    let pairs = period_pairs(1000);
    group.bench_function("batch_1000", |b| {
        b.iter(|| {
            pairs
                .iter()
                .filter_map(|&(t1, t2)| solve(t1, t2, 0.05).ok())
                .map(|r| r.alpha() + r.beta())
                .sum::<f64>()
        })
    });

    group.finish();
}

fn bench_form(c: &mut Criterion) {
    let solver = RayleighSolver::default();
    let fields = FormFields::new("0.75", "0.54", "0.05");
    c.bench_function("form_submit", |b| {
        b.iter(|| form::submit(black_box(&fields), &solver))
    });
}

criterion_group!(benches, bench_solve, bench_form);
criterion_main!(benches);
