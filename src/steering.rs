/*
 * Steering Module
 *
 * Pure steering-force functions. Each takes the acting boid and a neighbor
 * set (already radius-filtered by the neighbor query) and returns a force;
 * none of them mutate their inputs.
 *
 * All three flocking rules follow Reynolds: Steering = Desired - Velocity,
 * with the result clamped to `max_force`.
 */

use crate::boid::Boid;
use crate::params::SimulationParameters;
use crate::vector::{self, Vector3};

// Steer away from neighbors closer than `separation_distance`,
// closer neighbors pushing harder
pub fn separation(boid: &Boid, neighbors: &[&Boid], params: &SimulationParameters) -> Vector3 {
    let mut steering = Vector3::ZERO;
    let mut count = 0;

    for other in neighbors {
        let d = boid.distance_to(other);

        if d > 0.0 && d < params.separation_distance {
            // Vector pointing away from the neighbor, weighted by distance
            let diff = vector::normalize(boid.position - other.position) / d;
            steering += diff;
            count += 1;
        }
    }

    if count == 0 {
        return Vector3::ZERO;
    }

    steering /= count as f64;
    let desired = vector::set_magnitude(steering, params.max_speed);
    vector::limit(desired - boid.velocity, params.max_force)
}

// Steer towards the average heading of neighbors within `visual_range`
pub fn alignment(boid: &Boid, neighbors: &[&Boid], params: &SimulationParameters) -> Vector3 {
    let mut sum = Vector3::ZERO;
    let mut count = 0;

    for other in neighbors {
        let d = boid.distance_to(other);

        if d > 0.0 && d < params.visual_range {
            sum += other.velocity;
            count += 1;
        }
    }

    if count == 0 {
        return Vector3::ZERO;
    }

    sum /= count as f64;
    let desired = vector::set_magnitude(sum, params.max_speed);
    vector::limit(desired - boid.velocity, params.max_force)
}

// Steer towards the centroid of neighbors within `visual_range`
pub fn cohesion(boid: &Boid, neighbors: &[&Boid], params: &SimulationParameters) -> Vector3 {
    let mut sum = Vector3::ZERO;
    let mut count = 0;

    for other in neighbors {
        let d = boid.distance_to(other);

        if d > 0.0 && d < params.visual_range {
            sum += other.position;
            count += 1;
        }
    }

    if count == 0 {
        return Vector3::ZERO;
    }

    seek(boid, sum / count as f64, params)
}

// Steer towards `target` at full speed.
// A target on top of the boid gives a desired velocity of zero.
pub fn seek(boid: &Boid, target: Vector3, params: &SimulationParameters) -> Vector3 {
    let desired = vector::set_magnitude(target - boid.position, params.max_speed);
    vector::limit(desired - boid.velocity, params.max_force)
}

// Weighted sum of the three rules. Each rule is clamped to `max_force`
// individually; the sum is not clamped again.
pub fn flocking_force(boid: &Boid, neighbors: &[&Boid], params: &SimulationParameters) -> Vector3 {
    separation(boid, neighbors, params) * params.separation_weight
        + alignment(boid, neighbors, params) * params.alignment_weight
        + cohesion(boid, neighbors, params) * params.cohesion_weight
}
