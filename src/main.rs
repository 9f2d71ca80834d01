/*
 * 3D Boids
 *
 * Entry point. Parses the command line, loads the configuration and either
 * opens the interactive viewer or runs a fixed number of ticks headless.
 */

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use boids3d::{app, headless, telemetry, AppConfig, NeighborStrategy};

const DEFAULT_CONFIG: &str = "boids.toml";

#[derive(Parser, Debug)]
#[command(author, version, about = "Flocking simulation in a bounded 3D cube", long_about = None)]
struct Args {
    /// Configuration file; defaults to ./boids.toml when present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for spawning, for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Number of ticks to run in headless mode
    #[arg(short, long, default_value_t = 1000)]
    ticks: u64,

    /// Number of boids, overriding the configuration
    #[arg(short, long)]
    boids: Option<usize>,

    /// Spread each tick over the rayon thread pool
    #[arg(long)]
    parallel: bool,

    /// Use the spatial grid for neighbor queries
    #[arg(long)]
    grid: bool,
}

impl Args {
    fn load_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => AppConfig::load_or_default(DEFAULT_CONFIG).context("loading default config")?,
        };

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(boids) = self.boids {
            config.simulation.num_boids = boids;
        }
        if self.parallel {
            config.parallel = true;
        }
        if self.grid {
            config.neighbor_strategy = NeighborStrategy::Grid;
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    telemetry::init_logging("info");

    let args = Args::parse();
    let config = args.load_config()?;

    tracing::info!(
        boids = config.simulation.num_boids,
        seed = ?config.seed,
        parallel = config.parallel,
        neighbor_strategy = ?config.neighbor_strategy,
        headless = args.headless,
        "starting"
    );

    if args.headless {
        let summary = headless::run(&config, args.ticks);
        if let Some((min, max)) = summary.extent {
            tracing::info!(
                min = ?min.to_array(),
                max = ?max.to_array(),
                "final extent"
            );
        }
    } else {
        app::run(config);
    }

    Ok(())
}
