//! Error types for the simulation core and configuration layer.

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while building a generator or starting a run.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The simulated duration must be strictly positive.
    #[error("simulation duration must be greater than zero")]
    ZeroDuration,
    /// The quadratic coefficient must be a finite number.
    #[error("quadratic coefficient must be finite (got {0})")]
    NonFiniteCoefficient(f64),
    /// The update interval must be strictly positive.
    #[error("update interval must be greater than zero")]
    ZeroInterval,
    /// The update interval is too large to schedule a tick.
    #[error("update interval of {0} ms cannot be scheduled")]
    DurationOverflow(u64),
    /// The run configuration was rejected before the run started.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Failures raised while validating user input or loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("query count {value} is outside {min}..={max}")]
    QueryCountOutOfRange { value: u32, min: u32, max: u32 },
    #[error("query count {value} is not a multiple of {step}")]
    QueryCountStep { value: u32, step: u32 },
    #[error("update frequency {value} ms is outside {min}..={max} ms")]
    UpdateFrequencyOutOfRange { value: u32, min: u32, max: u32 },
    #[error("update frequency {value} ms is not a multiple of {step} ms")]
    UpdateFrequencyStep { value: u32, step: u32 },
    #[error("quadratic coefficient must be finite (got {0})")]
    NonFiniteCoefficient(f64),
    #[error("HOME env var not set")]
    NoHomeDir,
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
