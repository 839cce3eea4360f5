//! paretoplot crate root: re-exports and module wiring.
//!
//! A timer-driven demo that plots synthetic data with egui/eframe: a
//! decorative Pareto-front scatter and a line chart comparing a baseline series
//! with an "optimised" one whose advantage compounds over time.
//!
//! - `data`: sample generator, random sources, history, log lines, export
//! - `simulation`: run state machine, tick controller, presenter boundary
//! - `controllers`: drive a running app from other threads
//! - `config`: user input, per-run config and the YAML app config
//! - `panels` / `app`: the egui front end

pub mod app;
pub mod config;
pub mod controllers;
pub mod data;
pub mod error;
pub mod logging;
pub mod panels;
pub mod simulation;

pub use app::{run_paretoplot, ChartViews, ParetoApp};
pub use config::{DemoConfig, SimulationConfig, UserInput};
pub use controllers::{SimulationInfo, SimulationRemote};
pub use data::generator::{DataGenerator, Sample, SampleStream, SAMPLE_CAP};
pub use data::history::{Deltas, History};
pub use data::log::{LogLine, SeriesKind};
pub use data::pareto::{ScatterGroup, ScatterRole};
pub use data::source::{DefaultSource, RandSource, ScriptedSource, UniformSource};
pub use error::{ConfigError, SimulationError};
pub use simulation::{
    NullPresenter, Presenter, RecordingPresenter, RunState, SimulationController,
    SimulationState, StopReason, TickOutcome,
};
