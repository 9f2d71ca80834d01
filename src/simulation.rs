/*
 * Simulation Module
 *
 * The explicit simulation state: the ordered population of boids, the
 * parameters every tick reads, the tick options and the RNG used to spawn
 * new boids. A single driver (the viewer or the headless loop) owns it;
 * membership and parameters only change between ticks, through the methods
 * here.
 */

use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use serde::{Deserialize, Serialize};

use crate::boid::Boid;
use crate::neighbors::{BruteForce, NeighborStrategy};
use crate::params::{ParamChanges, SimulationParameters};
use crate::physics::{self, TickStats};
use crate::spatial_grid::SpatialGrid;

// How a tick is executed; does not affect the result
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickOptions {
    pub parallel: bool,
    pub neighbor_strategy: NeighborStrategy,
}

pub struct Simulation {
    boids: Vec<Boid>,
    params: SimulationParameters,
    options: TickOptions,
    rng: ChaCha12Rng,
    grid: SpatialGrid,
    tick_count: u64,
}

impl Simulation {
    // Create a simulation with `params.num_boids` freshly spawned boids.
    // A seed makes the initial population (and later spawns) reproducible.
    pub fn new(params: SimulationParameters, options: TickOptions, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha12Rng::seed_from_u64(seed),
            None => ChaCha12Rng::from_entropy(),
        };

        let mut simulation = Self {
            boids: Vec::with_capacity(params.num_boids),
            params,
            options,
            rng,
            grid: SpatialGrid::new(params.boundary_size),
            tick_count: 0,
        };
        simulation.resize(params.num_boids);
        simulation
    }

    // Create a simulation around an existing population
    pub fn with_boids(
        boids: Vec<Boid>,
        params: SimulationParameters,
        options: TickOptions,
        seed: u64,
    ) -> Self {
        Self {
            boids,
            params,
            options,
            rng: ChaCha12Rng::seed_from_u64(seed),
            grid: SpatialGrid::new(params.boundary_size),
            tick_count: 0,
        }
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn options(&self) -> TickOptions {
        self.options
    }

    pub fn set_options(&mut self, options: TickOptions) {
        self.options = options;
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    // Replace the parameters. A change of `num_boids` grows or shrinks the
    // population at its end; everything else takes effect on the next tick.
    pub fn set_params(&mut self, params: SimulationParameters) -> ParamChanges {
        let changes = params.changes_from(&self.params);
        self.params = params;
        self.grid.set_boundary_size(params.boundary_size);

        if changes.num_boids_changed {
            self.resize(params.num_boids);
        }
        if changes.tuning_changed {
            tracing::debug!(params = ?self.params, "simulation parameters updated");
        }

        changes
    }

    // Spawn one boid at the end of the population
    pub fn spawn(&mut self) -> &Boid {
        let boid = Boid::spawn(&mut self.rng, self.params.boundary_size);
        self.boids.push(boid);
        &self.boids[self.boids.len() - 1]
    }

    pub fn add(&mut self, boid: Boid) {
        self.boids.push(boid);
    }

    // Remove the boid at `index`, keeping the order of the rest
    pub fn remove(&mut self, index: usize) -> Option<Boid> {
        (index < self.boids.len()).then(|| self.boids.remove(index))
    }

    // Grow by spawning at the end, or shrink by removing from the end
    pub fn resize(&mut self, count: usize) {
        let before = self.boids.len();

        while self.boids.len() < count {
            self.spawn();
        }
        self.boids.truncate(count);

        if before != count {
            tracing::info!(from = before, to = count, "resized flock");
        }
    }

    // Discard every boid and spawn `num_boids` new ones
    pub fn reset(&mut self) {
        self.boids.clear();
        self.resize(self.params.num_boids);
        self.tick_count = 0;
        tracing::info!(boids = self.boids.len(), "simulation reset");
    }

    // Advance every boid by one step
    pub fn tick(&mut self) -> TickStats {
        let parallel = self.options.parallel;
        let stats = match self.options.neighbor_strategy {
            NeighborStrategy::BruteForce => {
                physics::tick_with(&mut self.boids, &self.params, &mut BruteForce, parallel)
            }
            NeighborStrategy::Grid => {
                physics::tick_with(&mut self.boids, &self.params, &mut self.grid, parallel)
            }
        };
        self.tick_count += 1;

        tracing::debug!(
            tick = self.tick_count,
            boids = stats.boids,
            neighbor_links = stats.neighbor_links,
            mean_speed = stats.mean_speed,
            elapsed_us = stats.elapsed.as_micros() as u64,
            "tick"
        );

        stats
    }
}
