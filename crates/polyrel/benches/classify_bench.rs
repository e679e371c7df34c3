//! Criterion benchmarks for polygon pair classification.
//! Focus sizes: n in {4, 16, 64, 256} vertices per polygon.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use polyrel::geom::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
use polyrel::geom::{GeomCfg, Poly2};
use polyrel::relation::classify;

fn random_pair(n: usize, seed: u64) -> (Poly2, Poly2) {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RadialCfg::default()
    };
    let a = draw_polygon_radial(cfg, ReplayToken { seed, index: 0 });
    // Partial offset so every decision branch stays reachable.
    let b = draw_polygon_radial(cfg, ReplayToken { seed, index: 1 })
        .translated(Vector2::new(0.5, 0.0));
    (a, b)
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("relation");
    for &n in &[4usize, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("classify", n), &n, |b, &n| {
            b.iter_batched(
                || random_pair(n, 43),
                |(p, q)| {
                    let _rel = classify(&p, &q, GeomCfg::default());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("contains", n), &n, |b, &n| {
            b.iter_batched(
                || random_pair(n, 44).0,
                |p| {
                    let _inside = p.contains_eps(Vector2::new(0.1, 0.1), 1e-6);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
