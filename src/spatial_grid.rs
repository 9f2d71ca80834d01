/*
 * Spatial Grid Module
 *
 * This module defines the SpatialGrid struct for faster neighbor lookups.
 * It divides the bounding cube into a uniform grid of cells at least as wide
 * as the query radius, so a query only has to look at the 3x3x3 block of
 * cells around the querying boid.
 *
 * Boids outside the cube (the boundary is soft) are clamped into the outer
 * layer of cells. Clamping never pulls two cell coordinates further apart,
 * so the 3x3x3 block still covers every boid within the radius and the grid
 * returns exactly the set a brute-force scan would.
 */

use crate::boid::Boid;
use crate::neighbors::{self, NeighborQuery};

// Caps memory use when the radius is tiny relative to the cube
const MAX_CELLS_PER_AXIS: usize = 64;

pub struct SpatialGrid {
    pub cell_size: f64,
    pub grid_size: usize,
    pub grid: Vec<Vec<usize>>,
    boundary_size: f64,
    // Number of boids inserted by the last rebuild
    indexed: usize,
}

impl SpatialGrid {
    pub fn new(boundary_size: f64) -> Self {
        Self {
            cell_size: 0.0,
            grid_size: 0,
            grid: Vec::new(),
            boundary_size,
            indexed: 0,
        }
    }

    pub fn set_boundary_size(&mut self, boundary_size: f64) {
        self.boundary_size = boundary_size;
    }

    // Resize the grid for `radius` and insert every boid
    pub fn rebuild(&mut self, population: &[Boid], radius: f64) {
        let cells_per_axis =
            ((self.boundary_size / radius).floor() as usize).clamp(1, MAX_CELLS_PER_AXIS);
        let cell_size = (self.boundary_size / cells_per_axis as f64).max(radius);

        if cells_per_axis != self.grid_size {
            self.grid_size = cells_per_axis;
            self.grid = vec![Vec::new(); cells_per_axis.pow(3)];
        } else {
            self.clear();
        }
        self.cell_size = cell_size;

        for (i, boid) in population.iter().enumerate() {
            let cell = self.cell_coords(boid);
            let index = self.cell_index(cell);
            self.grid[index].push(i);
        }
        self.indexed = population.len();
    }

    // Clear the grid
    pub fn clear(&mut self) {
        for cell in &mut self.grid {
            cell.clear();
        }
        self.indexed = 0;
    }

    // Grid coordinates of the cell holding `boid`, clamped into the grid
    #[inline]
    fn cell_coords(&self, boid: &Boid) -> [usize; 3] {
        let half = self.boundary_size / 2.0;
        let max_cell = (self.grid_size - 1) as f64;
        boid.position
            .to_array()
            .map(|c| ((c + half) / self.cell_size).floor().clamp(0.0, max_cell) as usize)
    }

    #[inline]
    fn cell_index(&self, [x, y, z]: [usize; 3]) -> usize {
        (z * self.grid_size + y) * self.grid_size + x
    }

    // Indices of boids in the cell containing `boid` and the 26 cells around it
    pub fn nearby_indices(&self, boid: &Boid) -> Vec<usize> {
        if self.grid_size == 0 {
            return Vec::new();
        }

        let center = self.cell_coords(boid);
        let mut result = Vec::new();

        // Range of cells to visit on one axis, clipped to the grid
        let span = |c: usize| c.saturating_sub(1)..=(c + 1).min(self.grid_size - 1);

        for z in span(center[2]) {
            for y in span(center[1]) {
                for x in span(center[0]) {
                    result.extend_from_slice(&self.grid[self.cell_index([x, y, z])]);
                }
            }
        }

        result
    }
}

impl NeighborQuery for SpatialGrid {
    fn prepare(&mut self, population: &[Boid], radius: f64) {
        self.rebuild(population, radius);
    }

    fn neighbors<'a>(&self, index: usize, population: &'a [Boid], radius: f64) -> Vec<&'a Boid> {
        // Stale grid or a radius wider than a cell: fall back to a full scan
        if self.grid_size == 0 || self.indexed != population.len() || radius > self.cell_size {
            return neighbors::neighbors(index, population, radius);
        }

        let Some(me) = population.get(index) else {
            return Vec::new();
        };

        let mut candidates = self.nearby_indices(me);
        candidates.sort_unstable();

        candidates
            .into_iter()
            .filter(|&j| j != index && me.distance_to(&population[j]) < radius)
            .map(|j| &population[j])
            .collect()
    }
}
