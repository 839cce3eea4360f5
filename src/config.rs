//! Configuration types: user input, per-run simulation config and the
//! application-level config file.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::generator::{DEFAULT_QUADRATIC_COEFFICIENT, SAMPLE_CAP};
use crate::error::ConfigError;

// ─────────────────────────────────────────────────────────────────────────────
// User input
// ─────────────────────────────────────────────────────────────────────────────

/// Allowed range of the "query count" input.
pub const QUERY_COUNT_RANGE: RangeInclusive<u32> = 100..=1000;
/// Step of the "query count" input.
pub const QUERY_COUNT_STEP: u32 = 100;
/// Allowed range of the "update frequency" input, in milliseconds.
pub const UPDATE_FREQUENCY_RANGE: RangeInclusive<u32> = 100..=300;
/// Step of the "update frequency" input, in milliseconds.
pub const UPDATE_FREQUENCY_STEP: u32 = 100;

/// Values entered in the query-parameter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    pub query_count: u32,
    pub update_frequency_ms: u32,
}

impl Default for UserInput {
    fn default() -> Self {
        Self {
            query_count: *QUERY_COUNT_RANGE.start(),
            update_frequency_ms: *UPDATE_FREQUENCY_RANGE.start(),
        }
    }
}

impl UserInput {
    pub fn new(query_count: u32, update_frequency_ms: u32) -> Self {
        Self {
            query_count,
            update_frequency_ms,
        }
    }

    /// Check both values against their range and step.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !QUERY_COUNT_RANGE.contains(&self.query_count) {
            return Err(ConfigError::QueryCountOutOfRange {
                value: self.query_count,
                min: *QUERY_COUNT_RANGE.start(),
                max: *QUERY_COUNT_RANGE.end(),
            });
        }
        if self.query_count % QUERY_COUNT_STEP != 0 {
            return Err(ConfigError::QueryCountStep {
                value: self.query_count,
                step: QUERY_COUNT_STEP,
            });
        }
        if !UPDATE_FREQUENCY_RANGE.contains(&self.update_frequency_ms) {
            return Err(ConfigError::UpdateFrequencyOutOfRange {
                value: self.update_frequency_ms,
                min: *UPDATE_FREQUENCY_RANGE.start(),
                max: *UPDATE_FREQUENCY_RANGE.end(),
            });
        }
        if self.update_frequency_ms % UPDATE_FREQUENCY_STEP != 0 {
            return Err(ConfigError::UpdateFrequencyStep {
                value: self.update_frequency_ms,
                step: UPDATE_FREQUENCY_STEP,
            });
        }
        Ok(())
    }

    /// Clamp both values into range and round them to the nearest step.
    pub fn snapped(self) -> Self {
        Self {
            query_count: snap(self.query_count, &QUERY_COUNT_RANGE, QUERY_COUNT_STEP),
            update_frequency_ms: snap(
                self.update_frequency_ms,
                &UPDATE_FREQUENCY_RANGE,
                UPDATE_FREQUENCY_STEP,
            ),
        }
    }
}

fn snap(value: u32, range: &RangeInclusive<u32>, step: u32) -> u32 {
    let v = value.clamp(*range.start(), *range.end());
    let rounded = (v + step / 2) / step * step;
    rounded.clamp(*range.start(), *range.end())
}

// ─────────────────────────────────────────────────────────────────────────────
// Per-run simulation config
// ─────────────────────────────────────────────────────────────────────────────

/// Immutable parameters of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Simulated duration covered by the generator.
    pub total_duration_ms: u64,
    /// Samples requested from the generator (at most 100).
    pub sample_count: usize,
    /// Period of the tick timer.
    pub update_interval_ms: u64,
    /// Starting value of the generator's decay factor.
    pub quadratic_coefficient: f64,
}

impl SimulationConfig {
    /// Build a run config for a given tick interval; the simulated duration is
    /// ten intervals, saturating at `u64::MAX`.
    pub fn new(update_interval_ms: u64, sample_count: usize, quadratic_coefficient: f64) -> Self {
        Self {
            total_duration_ms: update_interval_ms.saturating_mul(10),
            sample_count: sample_count.min(SAMPLE_CAP),
            update_interval_ms,
            quadratic_coefficient,
        }
    }

    /// Derive a run config from validated user input.
    ///
    /// The query count is capped at the generator's per-run limit.
    pub fn from_input(input: &UserInput, quadratic_coefficient: f64) -> Result<Self, ConfigError> {
        input.validate()?;
        if !quadratic_coefficient.is_finite() {
            return Err(ConfigError::NonFiniteCoefficient(quadratic_coefficient));
        }
        let requested = input.query_count as usize;
        if requested > SAMPLE_CAP {
            debug!(
                query_count = requested,
                cap = SAMPLE_CAP,
                "query count exceeds samples per run"
            );
        }
        Ok(Self::new(
            u64::from(input.update_frequency_ms),
            requested,
            quadratic_coefficient,
        ))
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(
            u64::from(*UPDATE_FREQUENCY_RANGE.start()),
            SAMPLE_CAP,
            DEFAULT_QUADRATIC_COEFFICIENT,
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Application config
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration of the demo application.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Native window title.
    pub title: String,
    /// Initial inner window size in logical pixels.
    pub window_size: [f32; 2],
    /// Starting value of the generator's decay factor.
    pub quadratic_coefficient: f64,
    /// Values the query-parameter controls start with.
    pub input: UserInput,
    /// Oldest log lines are dropped beyond this many.
    pub max_log_lines: usize,
    /// Optional eframe native-window options.
    #[serde(skip)]
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Pareto Demo".to_string(),
            window_size: [1000.0, 600.0],
            quadratic_coefficient: DEFAULT_QUADRATIC_COEFFICIENT,
            input: UserInput::default(),
            max_log_lines: 10_000,
            native_options: None,
        }
    }
}

impl DemoConfig {
    /// `~/.paretoplot/config.yaml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let home = std::env::var("HOME").map_err(|_| ConfigError::NoHomeDir)?;
        Ok(PathBuf::from(home).join(".paretoplot").join("config.yaml"))
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: DemoConfig = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&s)
    }

    /// Load the default config file; `Ok(None)` when it does not exist.
    pub fn load_from_default_path() -> Result<Option<Self>, ConfigError> {
        let path = Self::default_path()?;
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from_path(&path).map(Some)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.input.validate()?;
        if !self.quadratic_coefficient.is_finite() {
            return Err(ConfigError::NonFiniteCoefficient(self.quadratic_coefficient));
        }
        Ok(())
    }

    /// Run config for the given input under this application config.
    pub fn simulation_config(&self, input: &UserInput) -> Result<SimulationConfig, ConfigError> {
        SimulationConfig::from_input(input, self.quadratic_coefficient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_rounds_to_nearest_step() {
        assert_eq!(snap(149, &QUERY_COUNT_RANGE, 100), 100);
        assert_eq!(snap(150, &QUERY_COUNT_RANGE, 100), 200);
        assert_eq!(snap(5000, &QUERY_COUNT_RANGE, 100), 1000);
        assert_eq!(snap(0, &UPDATE_FREQUENCY_RANGE, 100), 100);
    }
}
