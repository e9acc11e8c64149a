//! # Location Evaluation Benchmark
//!
//! ARCHITECT'S REQUIREMENTS:
//! - Fixed work per event, independent of world size
//! - Every movement event evaluates at least three points
//!
//! Run with: `cargo bench --package warden_core`

// Benchmarks don't need docs
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use warden_core::{BlockTypeTable, ChunkedWorld, ClassicCatalog, LocationEvaluator};
use warden_shared::{block_ids, Vec3};

/// A lake on a stone bed with a fence line and a ladder wall.
fn build_world(radius: i32) -> ChunkedWorld {
    let mut world = ChunkedWorld::new();
    world
        .fill((-radius, 58, -radius), (radius, 58, radius), block_ids::STONE, 0)
        .expect("bed inside height range");
    world
        .fill((-radius, 59, -radius), (radius, 62, radius), block_ids::STATIONARY_WATER, 0)
        .expect("lake inside height range");
    world
        .fill((-radius, 63, 0), (radius, 63, 0), block_ids::FENCE, 0)
        .expect("fence inside height range");
    world
}

fn bench_table_build(c: &mut Criterion) {
    c.bench_function("block_table_build", |b| {
        b.iter(|| black_box(BlockTypeTable::build(&ClassicCatalog)));
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let table = BlockTypeTable::build(&ClassicCatalog);
    let evaluator = LocationEvaluator::new(&table);
    let mut group = c.benchmark_group("evaluate_point");

    for radius in [8, 64, 256] {
        let world = build_world(radius);
        group.bench_with_input(BenchmarkId::from_parameter(radius), &world, |b, world| {
            let mut step = 0.0_f64;
            b.iter(|| {
                step = (step + 0.37) % 8.0;
                let point = Vec3::new(step, 62.2, -step);
                black_box(evaluator.evaluate(world, black_box(point)))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_table_build, bench_evaluate);
criterion_main!(benches);
