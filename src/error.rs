/*
 * Error Module
 *
 * Error types for parameter validation and configuration loading.
 * The per-tick simulation itself is total and never returns these.
 */

use std::path::PathBuf;

use thiserror::Error;

/// A simulation parameter outside its documented range.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamsError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} must be non-negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be within [0, 1] (got {value})")]
    OutOfUnitRange { field: &'static str, value: f64 },

    #[error("max_speed must be positive (got {0})")]
    NonPositiveMaxSpeed(f64),

    #[error("boundary_curve must be at least 1 (got {0})")]
    CurveTooFlat(f64),

    #[error("boundary_size must be positive (got {0})")]
    NonPositiveBoundarySize(f64),

    #[error("num_boids exceeds the maximum of {max} (got {actual})")]
    TooManyBoids { max: usize, actual: usize },
}

/// Failure to load or validate an application configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid simulation parameters: {0}")]
    Params(#[from] ParamsError),

    #[error("log_interval must be positive")]
    InvalidLogInterval,
}
