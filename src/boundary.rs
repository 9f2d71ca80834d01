/*
 * Boundary Module
 *
 * Soft confinement to the cube centered at the origin. Near a wall two
 * independent effects act directly on velocity:
 * 1. Damping: the whole velocity is scaled down linearly from 1 at the edge
 *    of the buffer zone to `boundary_min_speed` at the wall.
 * 2. Steering: each axis gets a push back towards the inside that grows
 *    polynomially (exponent `boundary_curve`) from 0 at the edge of the
 *    buffer zone to `boundary_force` at the wall.
 *
 * Neither effect clamps position, so a fast boid can overshoot a wall. Past a
 * wall the distance goes negative and the damping factor is left unclamped.
 */

use crate::boid::Boid;
use crate::params::SimulationParameters;
use crate::vector::Vector3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    pub half_size: f64,
    pub buffer_zone: f64,
    pub force: f64,
    pub min_speed: f64,
    pub curve: f64,
}

// Signed distances from a point to the six faces of the cube.
// `positive[axis]` is the distance to the face at +half_size on that axis,
// `negative[axis]` to the face at -half_size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceDistances {
    pub positive: [f64; 3],
    pub negative: [f64; 3],
}

impl FaceDistances {
    pub fn min(&self) -> f64 {
        self.positive
            .iter()
            .chain(self.negative.iter())
            .copied()
            .fold(f64::INFINITY, f64::min)
    }
}

impl Boundary {
    pub fn from_params(params: &SimulationParameters) -> Self {
        let half_size = params.half_size();
        Self {
            half_size,
            buffer_zone: half_size * params.boundary_buffer_zone,
            force: params.boundary_force,
            min_speed: params.boundary_min_speed,
            curve: params.boundary_curve,
        }
    }

    pub fn face_distances(&self, position: Vector3) -> FaceDistances {
        let p = position.to_array();
        FaceDistances {
            positive: p.map(|c| self.half_size - c),
            negative: p.map(|c| c + self.half_size),
        }
    }

    // Velocity multiplier, or None when the boid is outside every buffer zone
    pub fn damping_factor(&self, position: Vector3) -> Option<f64> {
        if !self.is_active() {
            return None;
        }

        let min_dist = self.face_distances(position).min();
        (min_dist < self.buffer_zone)
            .then(|| self.min_speed + (1.0 - self.min_speed) * (min_dist / self.buffer_zone))
    }

    // Push-back to add to velocity. On each axis at most one face contributes,
    // the positive face taking precedence.
    pub fn steering(&self, position: Vector3) -> Vector3 {
        if !self.is_active() {
            return Vector3::ZERO;
        }

        let distances = self.face_distances(position);
        let mut steer = [0.0; 3];

        for (axis, push) in steer.iter_mut().enumerate() {
            let to_positive = distances.positive[axis];
            let to_negative = distances.negative[axis];

            if to_positive < self.buffer_zone {
                *push = -self.push_strength(to_positive);
            } else if to_negative < self.buffer_zone {
                *push = self.push_strength(to_negative);
            }
        }

        Vector3::from_array(steer)
    }

    // Damping first, then steering; both read the same position
    pub fn apply(&self, boid: &mut Boid) {
        if let Some(factor) = self.damping_factor(boid.position) {
            boid.velocity *= factor;
        }
        boid.velocity += self.steering(boid.position);
    }

    // `force * (1 - dist / buffer_zone)^curve`
    fn push_strength(&self, dist: f64) -> f64 {
        self.force * (1.0 - dist / self.buffer_zone).powf(self.curve)
    }

    // A zero-width buffer zone has no band to act in
    fn is_active(&self) -> bool {
        self.buffer_zone > 0.0
    }
}
