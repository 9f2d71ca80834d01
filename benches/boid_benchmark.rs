/*
 * Boid Simulation Benchmark
 *
 * Measures one full simulation tick for several flock sizes, comparing
 * brute-force and grid neighbor queries, sequential and parallel.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use boids3d::neighbors;
use boids3d::{
    NeighborQuery, NeighborStrategy, Simulation, SimulationParameters, SpatialGrid, TickOptions,
};

const SIZES: [usize; 4] = [100, 500, 1000, 2000];

fn simulation(num_boids: usize, options: TickOptions) -> Simulation {
    let params = SimulationParameters {
        num_boids,
        ..Default::default()
    };
    let mut sim = Simulation::new(params, options, Some(7));
    // Let the flock form before measuring
    for _ in 0..20 {
        sim.tick();
    }
    sim
}

// Benchmark the full tick under every combination of options
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for &num_boids in SIZES.iter() {
        for neighbor_strategy in [NeighborStrategy::BruteForce, NeighborStrategy::Grid] {
            for parallel in [false, true] {
                let options = TickOptions {
                    parallel,
                    neighbor_strategy,
                };
                let label = format!(
                    "{:?}/{}",
                    neighbor_strategy,
                    if parallel { "parallel" } else { "sequential" }
                );

                group.bench_with_input(BenchmarkId::new(label, num_boids), &num_boids, |b, &n| {
                    let mut sim = simulation(n, options);
                    b.iter(|| black_box(sim.tick()));
                });
            }
        }
    }

    group.finish();
}

// Benchmark neighbor queries alone: a full scan per boid vs a grid rebuild plus lookups
fn bench_neighbor_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbor_queries");

    for &num_boids in SIZES.iter() {
        let sim = simulation(num_boids, TickOptions::default());
        let boids = sim.boids();
        let radius = sim.params().neighbor_radius();

        group.bench_with_input(BenchmarkId::new("brute_force", num_boids), &num_boids, |b, _| {
            b.iter(|| {
                let links: usize = (0..boids.len())
                    .map(|i| neighbors::neighbors(i, boids, radius).len())
                    .sum();
                black_box(links)
            });
        });

        group.bench_with_input(BenchmarkId::new("grid", num_boids), &num_boids, |b, _| {
            let mut grid = SpatialGrid::new(sim.params().boundary_size);
            b.iter(|| {
                grid.prepare(boids, radius);
                let links: usize = (0..boids.len())
                    .map(|i| grid.neighbors(i, boids, radius).len())
                    .sum();
                black_box(links)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tick, bench_neighbor_queries);
criterion_main!(benches);
