//! Criterion micro-benchmarks for the voxel deposit hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kerma_bench::reference_geometry;
use kerma_core::Vec3;
use kerma_score::{DoseGrid, ScoringMode};

/// Deterministic deposit sites spread across the reference grid.
fn make_sites(n: usize) -> Vec<Vec3> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            Vec3::new(70.0 * t.sin(), 70.0 * (1.7 * t).cos(), -25.0 + 24.0 * (0.3 * t).sin())
        })
        .collect()
}

/// Benchmark: 10K dose-mode deposits into the water-tank grid.
fn bench_deposit_10k(c: &mut Criterion) {
    let sites = make_sites(10_000);

    c.bench_function("grid_deposit_10k", |b| {
        b.iter(|| {
            let mut grid = DoseGrid::new(reference_geometry(), ScoringMode::Dose);
            for &site in &sites {
                grid.deposit(site, 0.05, 1.0, 1.0);
            }
            black_box(grid.deposits());
        });
    });
}

/// Benchmark: resetting the grids between runs.
fn bench_reset(c: &mut Criterion) {
    let mut grid = DoseGrid::new(reference_geometry(), ScoringMode::Dose);
    for &site in &make_sites(1000) {
        grid.deposit(site, 0.05, 1.0, 1.0);
    }

    c.bench_function("grid_reset", |b| {
        b.iter(|| {
            grid.reset();
            black_box(grid.deposits());
        });
    });
}

criterion_group!(benches, bench_deposit_10k, bench_reset);
criterion_main!(benches);
