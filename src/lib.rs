/*
 * 3D Boids - Module Definitions
 *
 * This file defines the module structure of the simulation. The core
 * (vector math, steering, neighbor queries, boundary policy, integration and
 * the tick) has no windowing dependencies; the viewer modules sit on top of
 * it and only ever call `Simulation::tick`.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use camera::Camera;
pub use config::AppConfig;
pub use debug::DebugInfo;
pub use error::{ConfigError, ParamsError};
pub use neighbors::{BruteForce, NeighborQuery, NeighborStrategy};
pub use params::SimulationParameters;
pub use physics::TickStats;
pub use simulation::{Simulation, TickOptions};
pub use spatial_grid::SpatialGrid;
pub use vector::Vector3;

// Simulation core
pub mod boid;
pub mod boundary;
pub mod config;
pub mod error;
pub mod integrator;
pub mod neighbors;
pub mod params;
pub mod physics;
pub mod simulation;
pub mod spatial_grid;
pub mod steering;
pub mod vector;

// Runners
pub mod headless;
pub mod telemetry;

// Viewer
pub mod app;
pub mod camera;
pub mod debug;
pub mod input;
pub mod renderer;
pub mod ui;

// Length of a boid in world units
pub const BOID_SIZE: f32 = 2.0;
