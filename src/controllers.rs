//! Controllers for driving the simulation from external code.
//!
//! A [`SimulationRemote`] is a cheap, cloneable handle. Non-UI code records
//! start/stop requests on it and subscribes to run snapshots; the UI applies
//! the requests once per frame on its own thread.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::{SimulationConfig, UserInput};
use crate::data::generator::Sample;
use crate::data::source::UniformSource;
use crate::error::SimulationError;
use crate::simulation::{Presenter, RunState, SimulationController};

/// Snapshot of the simulation published to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationInfo {
    pub run_state: RunState,
    /// Samples collected in the current run.
    pub samples: usize,
    /// Simulated milliseconds elapsed in the current run.
    pub elapsed_ms: u64,
    /// Most recent sample, if any.
    pub last_sample: Option<Sample>,
}

impl SimulationInfo {
    pub fn from_controller<S: UniformSource>(controller: &SimulationController<S>) -> Self {
        let state = controller.state();
        Self {
            run_state: state.run_state(),
            samples: state.history().len(),
            elapsed_ms: state.elapsed_ms(),
            last_sample: state.history().last().copied(),
        }
    }
}

/// Controller to request start/stop and subscribe to run snapshots.
#[derive(Clone, Default)]
pub struct SimulationRemote {
    pub(crate) inner: Arc<Mutex<RemoteInner>>,
}

#[derive(Default)]
pub(crate) struct RemoteInner {
    pub(crate) request_start: Option<UserInput>,
    pub(crate) request_stop: bool,
    pub(crate) last_info: Option<SimulationInfo>,
    pub(crate) listeners: Vec<Sender<SimulationInfo>>,
}

impl SimulationRemote {
    /// Create a fresh controller.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RemoteInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Request a new run with the given input. A later request replaces an
    /// earlier one that was not applied yet.
    pub fn request_start(&self, input: UserInput) {
        self.lock().request_start = Some(input);
    }

    /// Request the current run to stop.
    pub fn request_stop(&self) {
        self.lock().request_stop = true;
    }

    /// Last snapshot published by the UI (if any).
    pub fn last_info(&self) -> Option<SimulationInfo> {
        self.lock().last_info.clone()
    }

    /// Subscribe to snapshots. The receiver gets one whenever the published
    /// state changes.
    pub fn subscribe(&self) -> Receiver<SimulationInfo> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.lock().listeners.push(tx);
        rx
    }

    /// Apply pending requests to `controller` and publish its state.
    ///
    /// A pending stop is applied before a pending start, so requesting both
    /// restarts the run.
    pub fn apply<S, P>(
        &self,
        controller: &mut SimulationController<S>,
        presenter: &mut P,
        quadratic_coefficient: f64,
    ) -> Result<(), SimulationError>
    where
        S: UniformSource,
        P: Presenter + ?Sized,
    {
        let (start, stop) = {
            let mut inner = self.lock();
            (inner.request_start.take(), std::mem::take(&mut inner.request_stop))
        };
        if stop {
            controller.stop();
        }
        let started = match start {
            Some(input) => {
                let config = SimulationConfig::from_input(&input, quadratic_coefficient)?;
                controller.start_and_render(config, presenter)
            }
            None => Ok(()),
        };
        self.publish(SimulationInfo::from_controller(controller));
        started
    }

    /// Publish `info` to subscribers if it differs from the last snapshot.
    pub(crate) fn publish(&self, info: SimulationInfo) {
        let mut inner = self.lock();
        if inner.last_info.as_ref() == Some(&info) {
            return;
        }
        inner.listeners.retain(|s| s.send(info.clone()).is_ok());
        inner.last_info = Some(info);
    }
}
