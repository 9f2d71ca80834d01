/*
 * Headless Module
 *
 * Runs the simulation without a window for a fixed number of ticks, logging
 * progress as it goes, and reports where the flock ended up.
 */

use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::physics;
use crate::simulation::Simulation;
use crate::telemetry;
use crate::vector::Vector3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadlessSummary {
    pub ticks: u64,
    pub boids: usize,
    pub mean_speed: f64,
    // Axis-aligned bounds of all positions, None for an empty flock
    pub extent: Option<(Vector3, Vector3)>,
    // Boids currently outside the bounding cube
    pub outside: usize,
    pub elapsed: Duration,
}

pub fn run(config: &AppConfig, ticks: u64) -> HeadlessSummary {
    let mut simulation = Simulation::new(config.simulation, config.tick_options(), config.seed);
    run_simulation(&mut simulation, ticks, config.log_interval)
}

pub fn run_simulation(
    simulation: &mut Simulation,
    ticks: u64,
    log_interval: u64,
) -> HeadlessSummary {
    let start = Instant::now();

    tracing::info!(
        boids = simulation.len(),
        ticks,
        options = ?simulation.options(),
        "starting headless run"
    );

    for _ in 0..ticks {
        let stats = simulation.tick();
        telemetry::record_tick(simulation.tick_count(), log_interval, &stats);
    }

    let summary = summarize(simulation, start.elapsed());
    tracing::info!(
        ticks = summary.ticks,
        boids = summary.boids,
        mean_speed = summary.mean_speed,
        outside = summary.outside,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "headless run finished"
    );

    summary
}

fn summarize(simulation: &Simulation, elapsed: Duration) -> HeadlessSummary {
    let boids = simulation.boids();
    let half = simulation.params().half_size();

    let extent = boids.iter().map(|b| b.position).fold(None, |acc, p| match acc {
        None => Some((p, p)),
        Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
    });
    let outside = boids
        .iter()
        .filter(|b| b.position.abs().max_element() > half)
        .count();

    HeadlessSummary {
        ticks: simulation.tick_count(),
        boids: boids.len(),
        mean_speed: physics::mean_speed(boids),
        extent,
        outside,
        elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_the_requested_number_of_ticks() {
        let config = AppConfig {
            seed: Some(5),
            simulation: crate::params::SimulationParameters {
                num_boids: 30,
                ..Default::default()
            },
            ..Default::default()
        };
        let summary = run(&config, 25);
        assert_eq!(summary.ticks, 25);
        assert_eq!(summary.boids, 30);
        assert!(summary.extent.is_some());
        assert!(summary.mean_speed > 0.0);
    }

    #[test]
    fn empty_flock_has_no_extent() {
        let config = AppConfig {
            seed: Some(5),
            simulation: crate::params::SimulationParameters {
                num_boids: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        let summary = run(&config, 3);
        assert_eq!(summary.extent, None);
        assert_eq!(summary.outside, 0);
        assert_eq!(summary.mean_speed, 0.0);
    }
}
