/*
 * Boid Module
 *
 * This module defines the Boid struct: the kinematic state of one agent.
 * Each tick a boid combines three steering rules computed from its
 * neighbors into its acceleration:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 * and is then advanced by the integrator.
 */

use rand::Rng;

use crate::integrator::Integrator;
use crate::params::SimulationParameters;
use crate::steering;
use crate::vector::{self, Vector3};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Boid {
    pub position: Vector3,
    pub velocity: Vector3,
    pub acceleration: Vector3,
}

impl Boid {
    pub fn new(position: Vector3, velocity: Vector3) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vector3::ZERO,
        }
    }

    // Create a boid at a uniformly random point of the cube centered at the
    // origin, with each velocity component uniform in [-1, 1)
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, boundary_size: f64) -> Self {
        let mut coordinate = || (rng.gen::<f64>() - 0.5) * boundary_size;
        let position = Vector3::new(coordinate(), coordinate(), coordinate());

        let mut component = || (rng.gen::<f64>() - 0.5) * 2.0;
        let velocity = Vector3::new(component(), component(), component());

        Self::new(position, velocity)
    }

    // Apply a force to the boid
    pub fn apply_force(&mut self, force: Vector3) {
        self.acceleration += force;
    }

    // Accumulate the weighted flocking forces for this tick.
    // `neighbors` must not contain this boid itself.
    pub fn flock(&mut self, neighbors: &[&Boid], params: &SimulationParameters) {
        let force = steering::flocking_force(self, neighbors, params);
        self.apply_force(force);
    }

    // Advance velocity and position, then apply the boundary policy
    pub fn update(&mut self, params: &SimulationParameters) {
        Integrator::new(params).step(self);
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    // Direction of travel, if the boid is moving at all
    pub fn heading(&self) -> Option<Vector3> {
        let heading = vector::normalize(self.velocity);
        (heading != Vector3::ZERO).then_some(heading)
    }

    pub fn distance_to(&self, other: &Boid) -> f64 {
        self.position.distance(other.position)
    }
}
