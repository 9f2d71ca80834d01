/*
 * Telemetry Module
 *
 * Logging setup for the binary and the periodic progress line used by
 * headless runs. The library itself only emits `tracing` events; installing
 * a subscriber is left to whoever owns `main`.
 */

use tracing_subscriber::EnvFilter;

use crate::physics::TickStats;

// Install a fmt subscriber filtered by RUST_LOG, or by `default_directive`
// when RUST_LOG is unset. Calling it twice is harmless.
pub fn init_logging(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .ok();
}

// Log a progress line every `interval` ticks
pub fn record_tick(tick: u64, interval: u64, stats: &TickStats) {
    if interval == 0 || tick % interval != 0 {
        return;
    }

    tracing::info!(
        tick,
        boids = stats.boids,
        neighbor_links = stats.neighbor_links,
        mean_speed = format_args!("{:.3}", stats.mean_speed),
        tick_us = stats.elapsed.as_micros() as u64,
        "simulation progress"
    );
}
