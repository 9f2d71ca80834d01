/*
 * Physics Module
 *
 * This module runs one simulation tick over a population of boids.
 *
 * Every boid reads its neighbors from a snapshot taken at the start of the
 * tick and writes only its own state, so the result for each boid does not
 * depend on the order boids are processed in. That makes the sequential and
 * the parallel (rayon) paths produce identical results.
 */

use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::boid::Boid;
use crate::integrator::Integrator;
use crate::neighbors::{BruteForce, NeighborQuery};
use crate::params::SimulationParameters;

// Summary of one tick, for logging and the debug overlay
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickStats {
    pub boids: usize,
    // Sum over boids of the neighbor-set size
    pub neighbor_links: usize,
    pub mean_speed: f64,
    pub chunk_size: Option<usize>,
    pub elapsed: Duration,
}

// Advance every boid by one step using brute-force neighbor scans
pub fn tick(boids: &mut [Boid], params: &SimulationParameters) -> TickStats {
    tick_with(boids, params, &mut BruteForce, false)
}

// Advance every boid by one step with the given neighbor query,
// optionally spreading the work over the rayon thread pool
pub fn tick_with<Q>(
    boids: &mut [Boid],
    params: &SimulationParameters,
    query: &mut Q,
    parallel: bool,
) -> TickStats
where
    Q: NeighborQuery + Sync + ?Sized,
{
    let start = Instant::now();

    // Read-only view of the population as it was at the start of the tick
    let snapshot: Vec<Boid> = boids.to_vec();
    let radius = params.neighbor_radius();
    query.prepare(&snapshot, radius);

    let query = &*query;
    let integrator = Integrator::new(params);

    // Compute forces from the snapshot, then integrate; returns the neighbor count
    let update_boid = |index: usize, boid: &mut Boid| -> usize {
        let neighbors = query.neighbors(index, &snapshot, radius);
        boid.flock(&neighbors, params);
        integrator.step(boid);
        neighbors.len()
    };

    let (neighbor_links, chunk_size) = if parallel && !boids.is_empty() {
        // Process boids in chunks to reduce synchronization overhead
        let chunk_size = std::cmp::max(boids.len() / rayon::current_num_threads(), 1);

        let links = boids
            .par_chunks_mut(chunk_size)
            .enumerate()
            .map(|(chunk_idx, boid_chunk)| {
                boid_chunk
                    .iter_mut()
                    .enumerate()
                    .map(|(i_in_chunk, boid)| {
                        update_boid(chunk_idx * chunk_size + i_in_chunk, boid)
                    })
                    .sum::<usize>()
            })
            .sum::<usize>();

        (links, Some(chunk_size))
    } else {
        let links = boids
            .iter_mut()
            .enumerate()
            .map(|(i, boid)| update_boid(i, boid))
            .sum::<usize>();

        (links, None)
    };

    TickStats {
        boids: boids.len(),
        neighbor_links,
        mean_speed: mean_speed(boids),
        chunk_size,
        elapsed: start.elapsed(),
    }
}

pub fn mean_speed(boids: &[Boid]) -> f64 {
    if boids.is_empty() {
        return 0.0;
    }
    boids.iter().map(Boid::speed).sum::<f64>() / boids.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial_grid::SpatialGrid;
    use crate::vector::Vector3;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    fn random_flock(n: usize, seed: u64) -> Vec<Boid> {
        let mut rng = ChaCha12Rng::seed_from_u64(seed);
        (0..n).map(|_| Boid::spawn(&mut rng, 60.0)).collect()
    }

    #[test]
    fn empty_population_is_a_no_op() {
        let mut boids: Vec<Boid> = Vec::new();
        let stats = tick(&mut boids, &SimulationParameters::default());
        assert_eq!(stats.boids, 0);
        assert_eq!(stats.neighbor_links, 0);
        assert_eq!(stats.mean_speed, 0.0);

        let stats = tick_with(&mut boids, &SimulationParameters::default(), &mut BruteForce, true);
        assert_eq!(stats.chunk_size, None);
    }

    #[test]
    fn every_boid_reads_the_start_of_tick_snapshot() {
        let params = SimulationParameters::default();
        let mut boids = random_flock(40, 11);
        let snapshot = boids.clone();

        tick(&mut boids, &params);

        // Recompute each boid in isolation from the untouched snapshot
        for (i, after) in boids.iter().enumerate() {
            let mut expected = snapshot[i];
            let neighbors = crate::neighbors::neighbors(i, &snapshot, params.neighbor_radius());
            expected.flock(&neighbors, &params);
            expected.update(&params);
            assert_eq!(*after, expected, "boid {i}");
        }
    }

    #[test]
    fn parallel_matches_sequential_exactly() {
        let params = SimulationParameters::default();
        let mut sequential = random_flock(257, 12);
        let mut parallel = sequential.clone();

        for _ in 0..10 {
            tick_with(&mut sequential, &params, &mut BruteForce, false);
            tick_with(&mut parallel, &params, &mut BruteForce, true);
        }
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn grid_matches_brute_force_exactly() {
        let params = SimulationParameters::default();
        let mut brute = random_flock(200, 13);
        let mut gridded = brute.clone();
        let mut grid = SpatialGrid::new(params.boundary_size);

        for _ in 0..10 {
            let a = tick_with(&mut brute, &params, &mut BruteForce, false);
            let b = tick_with(&mut gridded, &params, &mut grid, false);
            assert_eq!(a.neighbor_links, b.neighbor_links);
        }
        assert_eq!(brute, gridded);
    }

    #[test]
    fn reversed_processing_order_gives_the_same_boids() {
        let params = SimulationParameters::default();
        let mut forward = random_flock(80, 14);
        let mut reversed: Vec<Boid> = forward.iter().rev().copied().collect();

        tick(&mut forward, &params);
        tick(&mut reversed, &params);
        reversed.reverse();

        // Neighbor sums run in a different order, so allow rounding noise
        for (a, b) in forward.iter().zip(&reversed) {
            assert!((a.position - b.position).length() < 1e-9);
            assert!((a.velocity - b.velocity).length() < 1e-9);
        }
    }

    #[test]
    fn stats_count_neighbor_links() {
        let params = SimulationParameters::default();
        let mut boids = vec![
            Boid::new(Vector3::ZERO, Vector3::ZERO),
            Boid::new(Vector3::new(5.0, 0.0, 0.0), Vector3::ZERO),
            Boid::new(Vector3::new(0.0, 40.0, 0.0), Vector3::ZERO),
        ];
        let stats = tick(&mut boids, &params);
        assert_eq!(stats.boids, 3);
        assert_eq!(stats.neighbor_links, 2);
    }
}
