//! Uniform random sources used by the data generator and the Pareto layout.
//!
//! The generator never touches a global RNG directly; it draws from a
//! [`UniformSource`]. Live runs use [`RandSource`] over the thread-local RNG,
//! tests use [`ScriptedSource`] to replay a recorded sequence.

use rand::Rng;

/// A source of uniform values in `[0, 1)`.
pub trait UniformSource {
    /// Draw the next uniform value.
    fn next_uniform(&mut self) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for Box<S> {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Adapter that draws uniform values from any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RandSource<R> {
    rng: R,
}

impl<R: Rng> RandSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandSource<rand::rngs::ThreadRng> {
    /// Unseeded source backed by the thread-local RNG.
    pub fn thread() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandSource<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::thread()
    }
}

impl<R: Rng> UniformSource for RandSource<R> {
    fn next_uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// The source used when the caller does not inject one.
pub type DefaultSource = RandSource<rand::rngs::ThreadRng>;

/// Replays a fixed sequence of values, wrapping around at the end.
///
/// An empty script yields `0.0` forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: Vec<f64>,
    pos: usize,
}

impl ScriptedSource {
    pub fn new<I: Into<Vec<f64>>>(values: I) -> Self {
        Self {
            values: values.into(),
            pos: 0,
        }
    }

    /// A source that always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl UniformSource for ScriptedSource {
    fn next_uniform(&mut self) -> f64 {
        if self.values.is_empty() {
            self.pos += 1;
            return 0.0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_source_wraps_around() {
        let mut src = ScriptedSource::new(vec![0.1, 0.2]);
        let drawn: Vec<f64> = (0..5).map(|_| src.next_uniform()).collect();
        assert_eq!(drawn, vec![0.1, 0.2, 0.1, 0.2, 0.1]);
        assert_eq!(src.draws(), 5);
    }

    #[test]
    fn empty_script_yields_zero() {
        let mut src = ScriptedSource::default();
        assert_eq!(src.next_uniform(), 0.0);
    }

    #[test]
    fn rand_source_stays_in_unit_interval() {
        let mut src = RandSource::thread();
        for _ in 0..1000 {
            let u = src.next_uniform();
            assert!((0.0..1.0).contains(&u));
        }
    }
}
