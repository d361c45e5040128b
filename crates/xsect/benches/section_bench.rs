//! Criterion benchmarks for boundary integration and summaries.
//! Focus sizes: vertex counts n in {4, 64, 1024, 8192}.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use xsect::section::{inertias, multi_section_summary, section_summary, Boundary, SectionCfg};
use xsect::shapes::{round_points, RoundArc};

/// Star-shaped polygon with jittered radii around a random center.
fn random_boundary(n: usize, seed: u64) -> Boundary {
    let mut rng = StdRng::seed_from_u64(seed);
    let center = Vector2::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
    let pts = (0..n)
        .map(|i| {
            let theta = std::f64::consts::TAU * i as f64 / n as f64;
            let r = rng.gen_range(0.5..1.5);
            center + Vector2::new(theta.cos(), theta.sin()) * r
        })
        .collect();
    Boundary::new(pts).expect("non-empty")
}

fn bench_single(c: &mut Criterion) {
    let cfg = SectionCfg::default();
    let mut group = c.benchmark_group("section");
    for &n in &[4usize, 64, 1024, 8192] {
        group.bench_with_input(BenchmarkId::new("inertias", n), &n, |b, &n| {
            b.iter_batched(
                || random_boundary(n, 41),
                |bd| {
                    let _t = inertias(&bd, None);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("section_summary", n), &n, |b, &n| {
            b.iter_batched(
                || random_boundary(n, 42),
                |bd| {
                    let _s = section_summary(&bd, &cfg).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_composite(c: &mut Criterion) {
    let cfg = SectionCfg::default();
    let pipe = round_points(26.0, Some(0.5), RoundArc::default()).unwrap();
    let mut group = c.benchmark_group("composite");
    for &k in &[1usize, 4, 16] {
        group.bench_with_input(BenchmarkId::new("pipes", k), &k, |b, &k| {
            let add: Vec<Boundary> = (0..k)
                .map(|i| pipe.translated(Vector2::new(30.0 * i as f64, 0.0)))
                .collect();
            b.iter(|| {
                let _s = multi_section_summary(&add, &[], &cfg).unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single, bench_composite);
criterion_main!(benches);
