//! Tick-driven simulation controller.
//!
//! [`SimulationController`] owns the run state, the current sample stream and
//! the periodic timer. The host event loop calls [`poll`](SimulationController::poll)
//! every frame; when the timer is due the controller advances the stream by
//! one sample and redraws through the supplied [`Presenter`].

use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::presenter::Presenter;
use super::timer::IntervalTimer;
use super::{RunState, SimulationState, StopReason};
use crate::config::SimulationConfig;
use crate::data::generator::{DataGenerator, Sample, SampleStream};
use crate::data::history::History;
use crate::data::log::log_pair;
use crate::data::pareto::pareto_groups;
use crate::data::source::{DefaultSource, RandSource, UniformSource};
use crate::error::SimulationError;

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// A sample was appended to the history.
    Sampled(Sample),
    /// The stream had nothing left; the run is now stopped.
    Exhausted,
    /// No run is active; nothing happened.
    Inactive,
}

/// Drives a [`DataGenerator`] on a fixed period and keeps the run state.
pub struct SimulationController<S = DefaultSource> {
    state: SimulationState,
    stream: Option<SampleStream<S>>,
    timer: IntervalTimer,
    scatter_source: S,
    make_source: Box<dyn FnMut() -> S>,
}

impl SimulationController<DefaultSource> {
    /// Controller drawing from the unseeded thread-local RNG.
    pub fn new() -> Self {
        Self::with_source_factory(RandSource::thread)
    }
}

impl Default for SimulationController<DefaultSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: UniformSource> SimulationController<S> {
    /// Controller whose generators (and Pareto jitter) draw from sources
    /// built by `make_source`. Called once here and once per run.
    pub fn with_source_factory<F>(mut make_source: F) -> Self
    where
        F: FnMut() -> S + 'static,
    {
        let scatter_source = make_source();
        Self {
            state: SimulationState::default(),
            stream: None,
            timer: IntervalTimer::new(),
            scatter_source,
            make_source: Box::new(make_source),
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.state.history
    }

    pub fn run_state(&self) -> RunState {
        self.state.run_state
    }

    pub fn is_running(&self) -> bool {
        self.state.run_state == RunState::Running
    }

    /// Samples left in the current run, zero when not running.
    pub fn remaining(&self) -> usize {
        self.stream.as_ref().map_or(0, SampleStream::remaining)
    }

    /// Start a new run now. See [`start_at`](Self::start_at).
    pub fn start(&mut self, config: SimulationConfig) -> Result<(), SimulationError> {
        self.start_at(config, Instant::now())
    }

    /// Start a new run with the first tick one interval after `now`.
    ///
    /// Clears the history and counters and builds a fresh generator covering
    /// `config.total_duration_ms`. Starting while running restarts the run.
    /// On error the previous run, if any, is left as it was.
    pub fn start_at(&mut self, config: SimulationConfig, now: Instant) -> Result<(), SimulationError> {
        if config.update_interval_ms == 0 {
            return Err(SimulationError::ZeroInterval);
        }
        let generator = DataGenerator::new(
            config.total_duration_ms,
            config.quadratic_coefficient,
            (self.make_source)(),
        )?;
        if !self.timer.start(config.update_interval(), now) {
            return Err(SimulationError::DurationOverflow(config.update_interval_ms));
        }

        self.state.history.clear();
        self.state.tick_count = 0;
        self.state.elapsed_ms = 0;
        self.state.config = Some(config);
        self.state.run_state = RunState::Running;
        self.stream = Some(generator.into_stream(config.sample_count));

        info!(
            interval_ms = config.update_interval_ms,
            samples = config.sample_count,
            duration_ms = config.total_duration_ms,
            "simulation started"
        );
        Ok(())
    }

    /// Start a new run and immediately redraw the Pareto scatter and an empty
    /// comparison chart, so stale data from the previous run disappears.
    pub fn start_and_render<P: Presenter + ?Sized>(
        &mut self,
        config: SimulationConfig,
        presenter: &mut P,
    ) -> Result<(), SimulationError> {
        self.start(config)?;
        self.render_pareto(presenter);
        presenter.render_line_series(&[], &[]);
        Ok(())
    }

    /// Halt the run. History and elapsed time are kept until the next start.
    pub fn stop(&mut self) {
        if self.is_running() {
            self.halt(StopReason::User);
        } else {
            debug!(state = ?self.state.run_state, "stop ignored, no active run");
        }
    }

    /// Advance the run by one sample and redraw.
    pub fn on_tick<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Inactive;
        }
        let Some(stream) = self.stream.as_mut() else {
            return TickOutcome::Inactive;
        };
        let Some(sample) = stream.next() else {
            self.halt(StopReason::Exhausted);
            return TickOutcome::Exhausted;
        };
        let exhausted = stream.is_exhausted();

        let interval_ms = self.state.config.map_or(0, |c| c.update_interval_ms);
        self.state.history.push(sample);
        self.state.elapsed_ms = self.state.elapsed_ms.saturating_add(interval_ms);
        self.state.tick_count += 1;

        for line in log_pair(self.state.elapsed_ms, self.state.history.last_deltas()) {
            presenter.append_log_line(&line);
        }
        presenter.render_line_series(
            &self.state.history.points_a(),
            &self.state.history.points_b(),
        );
        self.render_pareto(presenter);

        debug!(
            tick = self.state.tick_count,
            t = sample.time,
            a = sample.value_a,
            b = sample.value_b,
            "tick"
        );

        if exhausted {
            self.halt(StopReason::Exhausted);
        }
        TickOutcome::Sampled(sample)
    }

    /// Run a tick if the timer is due at `now`.
    pub fn poll<P: Presenter + ?Sized>(&mut self, now: Instant, presenter: &mut P) -> Option<TickOutcome> {
        if self.timer.fire_due(now) {
            Some(self.on_tick(presenter))
        } else {
            None
        }
    }

    /// Time until the next tick, `None` when no run is active.
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_due(now)
    }

    /// Redraw the decorative Pareto scatter.
    pub fn render_pareto<P: Presenter + ?Sized>(&mut self, presenter: &mut P) {
        let groups = pareto_groups(&mut self.scatter_source);
        presenter.render_scatter_points(&groups);
    }

    fn halt(&mut self, reason: StopReason) {
        self.timer.stop();
        self.stream = None;
        self.state.run_state = RunState::Stopped(reason);
        info!(
            ?reason,
            samples = self.state.history.len(),
            elapsed_ms = self.state.elapsed_ms,
            "simulation stopped"
        );
    }
}
