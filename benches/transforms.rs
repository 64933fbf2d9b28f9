//! Benchmarks for flat and tiled elementwise transforms
//!
//! Author: Moroya Sakamoto

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vectile::harness::{generate_gradient_vectors, generate_index_vectors};
use vectile::tile::TileEngine;
use vectile::transform::{
    apply_flat, ComponentSum, CrossProduct, DotProduct, ElementwiseTransform,
};

fn bench_flat_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat");

    for &size in &[4096usize, 262_144] {
        let a = generate_gradient_vectors(size);
        let b = generate_gradient_vectors(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("dot", size), &size, |bench, _| {
            let mut out = vec![0.0f32; size];
            bench.iter(|| {
                apply_flat(&DotProduct, black_box(&a), black_box(&b), &mut out);
                black_box(out[size - 1])
            })
        });

        group.bench_with_input(BenchmarkId::new("cross", size), &size, |bench, _| {
            let mut out = vec![glam::Vec3::ZERO; size];
            bench.iter(|| {
                apply_flat(&CrossProduct, black_box(&a), black_box(&b), &mut out);
                black_box(out[size - 1])
            })
        });
    }

    group.finish();
}

fn bench_tiled_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("tiled_sum");

    let size = 262_144usize;
    let input = generate_index_vectors(size);
    group.throughput(Throughput::Elements(size as u64));

    // Direct map without staging, as the baseline the tiling competes with
    group.bench_function("direct", |bench| {
        bench.iter(|| {
            let out: Vec<f32> = black_box(&input)
                .iter()
                .map(|&v| ComponentSum.apply(v))
                .collect();
            black_box(out[size - 1])
        })
    });

    for &tile_size in &[64usize, 256, 1024, 4096] {
        group.bench_with_input(
            BenchmarkId::new("tiled", tile_size),
            &tile_size,
            |bench, &tile_size| {
                let mut engine = TileEngine::new(tile_size).unwrap();
                bench.iter(|| {
                    let out = engine.run(black_box(&input), &ComponentSum);
                    black_box(out[size - 1])
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_flat_kernels, bench_tiled_sum);
criterion_main!(benches);
