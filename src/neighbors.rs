/*
 * Neighbor Query Module
 *
 * Finds the boids within a radius of a querying boid. The querying boid is
 * identified by its index in the population and excluded by identity, never
 * by distance, so a second boid sitting at exactly the same point is still
 * returned.
 *
 * `BruteForce` scans the whole population (O(n) per query, O(n^2) per tick).
 * `SpatialGrid` (see spatial_grid.rs) is a drop-in replacement that returns
 * the same set, in the same (index) order.
 */

use serde::{Deserialize, Serialize};

use crate::boid::Boid;

pub trait NeighborQuery {
    // Called once per tick, before any query, with the tick's snapshot
    fn prepare(&mut self, _population: &[Boid], _radius: f64) {}

    // Every boid other than `population[index]` strictly closer than `radius`,
    // in ascending index order
    fn neighbors<'a>(&self, index: usize, population: &'a [Boid], radius: f64) -> Vec<&'a Boid>;
}

// Which neighbor query a simulation uses
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighborStrategy {
    #[default]
    BruteForce,
    Grid,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BruteForce;

impl NeighborQuery for BruteForce {
    fn neighbors<'a>(&self, index: usize, population: &'a [Boid], radius: f64) -> Vec<&'a Boid> {
        neighbors(index, population, radius)
    }
}

// Brute-force neighbor scan
pub fn neighbors(index: usize, population: &[Boid], radius: f64) -> Vec<&Boid> {
    let Some(me) = population.get(index) else {
        return Vec::new();
    };

    population
        .iter()
        .enumerate()
        .filter(|&(j, other)| j != index && me.distance_to(other) < radius)
        .map(|(_, other)| other)
        .collect()
}
