//! Synthetic sample generator.
//!
//! A [`DataGenerator`] partitions the simulated duration into
//! [`SAMPLE_CAP`] evenly spaced time points and produces, for each of them, a
//! baseline value (`value_a`: linear trend plus uniform noise) and an
//! optimised value (`value_b`: the trend minus a fraction of itself that grows
//! by a constant factor per produced sample).

use std::iter::FusedIterator;

use tracing::warn;

use super::source::UniformSource;
use crate::error::SimulationError;

/// Maximum number of samples a single generator will produce per request.
pub const SAMPLE_CAP: usize = 100;

/// Starting value of the compounding decay factor.
pub const DEFAULT_QUADRATIC_COEFFICIENT: f64 = 0.03;

/// Per-sample growth applied to the decay factor.
const DECAY_GROWTH: f64 = 1.022;

/// One generated data point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Simulated time in seconds.
    pub time: f64,
    /// Baseline series value.
    pub value_a: f64,
    /// Optimised series value.
    pub value_b: f64,
}

impl Sample {
    pub fn point_a(&self) -> [f64; 2] {
        [self.time, self.value_a]
    }

    pub fn point_b(&self) -> [f64; 2] {
        [self.time, self.value_b]
    }
}

/// Produces bounded sequences of [`Sample`]s for one simulation run.
#[derive(Debug, Clone)]
pub struct DataGenerator<S> {
    final_time: f64,
    time_points: Vec<f64>,
    quad: f64,
    source: S,
}

impl<S: UniformSource> DataGenerator<S> {
    /// Create a generator covering `sim_duration_ms` of simulated time.
    pub fn new(
        sim_duration_ms: u64,
        quadratic_coefficient: f64,
        source: S,
    ) -> Result<Self, SimulationError> {
        if sim_duration_ms == 0 {
            return Err(SimulationError::ZeroDuration);
        }
        if !quadratic_coefficient.is_finite() {
            return Err(SimulationError::NonFiniteCoefficient(quadratic_coefficient));
        }
        let final_time = sim_duration_ms as f64 / 1000.0;
        Ok(Self {
            final_time,
            time_points: linspace(0.0, final_time, SAMPLE_CAP),
            quad: quadratic_coefficient,
            source,
        })
    }

    /// Same as [`new`](Self::new) with the default coefficient of `0.03`.
    pub fn with_default_coefficient(sim_duration_ms: u64, source: S) -> Result<Self, SimulationError> {
        Self::new(sim_duration_ms, DEFAULT_QUADRATIC_COEFFICIENT, source)
    }

    /// End of the simulated interval in seconds.
    pub fn final_time_seconds(&self) -> f64 {
        self.final_time
    }

    /// The fixed time partition samples are taken from.
    pub fn time_points(&self) -> &[f64] {
        &self.time_points
    }

    /// Current value of the compounding decay factor.
    pub fn quad(&self) -> f64 {
        self.quad
    }

    /// Lazily produce up to `count` samples (at most [`SAMPLE_CAP`]).
    ///
    /// Every call walks the time partition from the start, but the decay
    /// factor keeps compounding from wherever the previous call left it.
    pub fn produce(&mut self, count: usize) -> Produce<'_, S> {
        let end = clamp_count(count);
        Produce {
            generator: self,
            next: 0,
            end,
        }
    }

    /// Owning variant of [`produce`](Self::produce), for callers that keep the
    /// sequence across event-loop iterations.
    pub fn into_stream(self, count: usize) -> SampleStream<S> {
        let end = clamp_count(count);
        SampleStream {
            generator: self,
            next: 0,
            end,
        }
    }

    fn sample_at(&mut self, index: usize) -> Sample {
        let t = self.time_points[index];
        let value_a = trend(self.source.next_uniform()) * t + self.source.next_uniform();

        self.quad *= DECAY_GROWTH;
        let base = trend(self.source.next_uniform()) * t;
        let value_b = base - base * self.quad;

        Sample {
            time: t,
            value_a,
            value_b,
        }
    }
}

/// Slope of the linear trend with its ±16 jitter for uniform draw `u`.
fn trend(u: f64) -> f64 {
    1800.0 + (-80.0 + 160.0 * u) / 5.0
}

fn clamp_count(count: usize) -> usize {
    if count > SAMPLE_CAP {
        warn!(
            requested = count,
            cap = SAMPLE_CAP,
            "sample request exceeds the per-run cap, clamping"
        );
        SAMPLE_CAP
    } else {
        count
    }
}

/// `n` evenly spaced values over `[start, end]`, both ends included.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            out[n - 1] = end;
            out
        }
    }
}

/// Borrowing sample sequence returned by [`DataGenerator::produce`].
pub struct Produce<'a, S> {
    generator: &'a mut DataGenerator<S>,
    next: usize,
    end: usize,
}

impl<S: UniformSource> Iterator for Produce<'_, S> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.next >= self.end {
            return None;
        }
        let sample = self.generator.sample_at(self.next);
        self.next += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }
}

impl<S: UniformSource> ExactSizeIterator for Produce<'_, S> {}
impl<S: UniformSource> FusedIterator for Produce<'_, S> {}

/// Owning sample sequence returned by [`DataGenerator::into_stream`].
///
/// Not restartable: once [`is_exhausted`](Self::is_exhausted) a new run needs
/// a new generator.
#[derive(Debug, Clone)]
pub struct SampleStream<S> {
    generator: DataGenerator<S>,
    next: usize,
    end: usize,
}

impl<S> SampleStream<S> {
    /// Samples still to come.
    pub fn remaining(&self) -> usize {
        self.end - self.next
    }

    pub fn is_exhausted(&self) -> bool {
        self.next >= self.end
    }
}

impl<S: UniformSource> Iterator for SampleStream<S> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.next >= self.end {
            return None;
        }
        let sample = self.generator.sample_at(self.next);
        self.next += 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<S: UniformSource> ExactSizeIterator for SampleStream<S> {}
impl<S: UniformSource> FusedIterator for SampleStream<S> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_ends() {
        let pts = linspace(0.0, 2.0, 5);
        assert_eq!(pts, vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn linspace_degenerate_sizes() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn clamp_count_caps_at_sample_cap() {
        assert_eq!(clamp_count(7), 7);
        assert_eq!(clamp_count(SAMPLE_CAP), SAMPLE_CAP);
        assert_eq!(clamp_count(1000), SAMPLE_CAP);
    }

    #[test]
    fn trend_spans_plus_minus_sixteen() {
        assert_eq!(trend(0.0), 1784.0);
        assert_eq!(trend(0.5), 1800.0);
        assert_eq!(trend(1.0), 1816.0);
    }
}
