/*
 * Integrator Module
 *
 * Advances one boid by one tick, in this order:
 *   velocity += acceleration
 *   clamp |velocity| to max_speed
 *   position += velocity
 *   acceleration = 0
 *   boundary policy (may change velocity again)
 *
 * The speed limit therefore holds right after the clamp; the boundary push
 * that follows is applied to velocity directly and is not re-clamped.
 */

use crate::boid::Boid;
use crate::boundary::Boundary;
use crate::params::SimulationParameters;
use crate::vector::{self, Vector3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Integrator {
    pub max_speed: f64,
    pub boundary: Boundary,
}

impl Integrator {
    pub fn new(params: &SimulationParameters) -> Self {
        Self {
            max_speed: params.max_speed,
            boundary: Boundary::from_params(params),
        }
    }

    // Kinematic part of the step, without boundary handling
    pub fn advance(&self, boid: &mut Boid) {
        boid.velocity = vector::limit(boid.velocity + boid.acceleration, self.max_speed);
        boid.position += boid.velocity;
        boid.acceleration = Vector3::ZERO;
    }

    pub fn step(&self, boid: &mut Boid) {
        self.advance(boid);
        self.boundary.apply(boid);
    }
}
