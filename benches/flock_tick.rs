//! Benchmarks for perception queries and full ticks.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flocksim::perception::neighbors;
use flocksim::prelude::*;

fn populated(count: u32, mode: UpdateMode) -> (Simulation, RecordingCanvas) {
    let mut canvas = RecordingCanvas::new(800.0, 600.0);
    let mut sim = Simulation::new(SimConfig::default())
        .unwrap()
        .with_seed(42)
        .with_update_mode(mode);
    sim.spawn_random(count, &mut canvas);
    (sim, canvas)
}

fn bench_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbors");

    for count in [40u32, 200, 1000] {
        let (sim, _) = populated(count, UpdateMode::Sequential);
        group.bench_with_input(BenchmarkId::new("one_boid", count), &sim, |b, sim| {
            let flock = sim.registry().all();
            b.iter(|| black_box(neighbors(&flock[0], flock).len()))
        });
    }

    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for count in [40u32, 200, 1000] {
        group.bench_function(BenchmarkId::new("sequential", count), |b| {
            let (mut sim, mut canvas) = populated(count, UpdateMode::Sequential);
            b.iter(|| black_box(sim.tick(&mut canvas)))
        });
        group.bench_function(BenchmarkId::new("snapshot", count), |b| {
            let (mut sim, mut canvas) = populated(count, UpdateMode::Snapshot);
            b.iter(|| black_box(sim.tick(&mut canvas)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_neighbors, bench_tick);
criterion_main!(benches);
