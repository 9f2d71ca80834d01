/*
 * Config Module
 *
 * Maps a TOML file onto the simulation parameters plus the run options that
 * are not part of the per-tick parameter set. Missing keys fall back to the
 * defaults.
 *
 * Example `boids.toml`:
 *
 *     seed = 7
 *     parallel = true
 *     neighbor_strategy = "grid"
 *     log_interval = 500
 *
 *     [simulation]
 *     num_boids = 300
 *     visual_range = 25.0
 *     boundary_curve = 2.0
 */

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::neighbors::NeighborStrategy;
use crate::params::SimulationParameters;
use crate::simulation::TickOptions;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationParameters,
    /// Seed for spawning; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub parallel: bool,
    pub neighbor_strategy: NeighborStrategy,
    /// Ticks between progress lines in headless runs.
    pub log_interval: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationParameters::default(),
            seed: None,
            parallel: false,
            neighbor_strategy: NeighborStrategy::BruteForce,
            log_interval: 1000,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation.validate()?;
        if self.log_interval == 0 {
            return Err(ConfigError::InvalidLogInterval);
        }
        Ok(())
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Like [`AppConfig::load`], but a missing file yields the defaults.
    /// A file that exists and is invalid is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn tick_options(&self) -> TickOptions {
        TickOptions {
            parallel: self.parallel,
            neighbor_strategy: self.neighbor_strategy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParamsError;

    #[test]
    fn default_config_validates() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_toml_is_the_default() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_toml_overrides_only_given_keys() {
        let config = AppConfig::from_toml(
            r#"
            seed = 7
            neighbor_strategy = "grid"

            [simulation]
            num_boids = 300
            visual_range = 25.0
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.neighbor_strategy, NeighborStrategy::Grid);
        assert_eq!(config.simulation.num_boids, 300);
        assert_eq!(config.simulation.visual_range, 25.0);
        assert_eq!(config.simulation.max_force, SimulationParameters::default().max_force);
        assert!(!config.parallel);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = AppConfig::from_toml("[simulation]\nboundary_min_speed = 1.5\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Params(ParamsError::OutOfUnitRange {
                field: "boundary_min_speed",
                ..
            })
        ));

        let err = AppConfig::from_toml("[simulation]\nmax_speed = 0.0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Params(ParamsError::NonPositiveMaxSpeed(_))
        ));

        let err = AppConfig::from_toml("log_interval = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogInterval));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = AppConfig::from_toml("[simulation\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_or_default("definitely/not/here.toml").unwrap();
        assert_eq!(config, AppConfig::default());

        let err = AppConfig::load("definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn round_trips_through_toml() {
        let config = AppConfig {
            seed: Some(99),
            parallel: true,
            ..Default::default()
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }
}
