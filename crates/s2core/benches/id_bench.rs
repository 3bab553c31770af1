//! Criterion benchmarks for cell-id construction and decomposition.
//! Inputs: 1k seeded random lon/lat points.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p s2core

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use s2core::coords::lon_lat_to_xyz;
use s2core::{CellId, VectorPoint};
use std::hint::black_box;

fn random_points(n: usize, seed: u64) -> Vec<VectorPoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let lon = rng.gen_range(-180.0..180.0);
            let lat = rng.gen_range(-90.0..90.0);
            lon_lat_to_xyz(&VectorPoint::new_2d(lon, lat))
        })
        .collect()
}

fn bench_id(c: &mut Criterion) {
    let points = random_points(1_000, 7);
    let leaves: Vec<CellId> = points
        .iter()
        .map(|p| CellId::from_s2_point(p, None))
        .collect();

    let mut group = c.benchmark_group("id");
    group.bench_function("from_s2_point", |b| {
        b.iter(|| {
            for p in &points {
                black_box(CellId::from_s2_point(black_box(p), None));
            }
        })
    });
    group.bench_function("to_ij", |b| {
        b.iter(|| {
            for id in &leaves {
                black_box(black_box(*id).to_ij(None));
            }
        })
    });
    for &level in &[5u8, 15, 25] {
        let cells: Vec<CellId> = leaves.iter().map(|id| id.parent_at(level)).collect();
        group.bench_with_input(BenchmarkId::new("neighbors", level), &cells, |b, cells| {
            b.iter(|| {
                for id in cells {
                    black_box(id.neighbors());
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("vertices_edges", level), &cells, |b, cells| {
            b.iter(|| {
                for id in cells {
                    black_box(id.get_vertices());
                    black_box(id.get_edges());
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_id);
criterion_main!(benches);
