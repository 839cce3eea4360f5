//! Simulation core: run state, tick controller and presentation boundary.

mod controller;
mod presenter;
mod timer;

pub use controller::{SimulationController, TickOutcome};
pub use presenter::{NullPresenter, Presenter, RecordingPresenter};
pub use timer::IntervalTimer;

use crate::config::SimulationConfig;
use crate::data::history::History;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The user (or a remote controller) pressed stop.
    User,
    /// The generator ran out of samples.
    Exhausted,
}

/// Lifecycle of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Stopped(StopReason),
}

impl RunState {
    pub fn label(self) -> &'static str {
        match self {
            RunState::Idle => "Idle",
            RunState::Running => "Running",
            RunState::Stopped(StopReason::User) => "Stopped",
            RunState::Stopped(StopReason::Exhausted) => "Finished",
        }
    }
}

/// Everything a run accumulates, owned by the controller and lent to the UI.
#[derive(Debug, Clone, Default)]
pub struct SimulationState {
    pub(crate) history: History,
    pub(crate) elapsed_ms: u64,
    pub(crate) tick_count: u64,
    pub(crate) run_state: RunState,
    pub(crate) config: Option<SimulationConfig>,
}

impl SimulationState {
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Simulated time advanced so far, one update interval per sample.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Ticks that produced a sample in the current run.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// Config of the current (or last) run.
    pub fn config(&self) -> Option<&SimulationConfig> {
        self.config.as_ref()
    }
}
