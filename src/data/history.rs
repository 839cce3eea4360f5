use super::generator::Sample;

/// Change between the two most recent samples of each series.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Deltas {
    /// `value_a` delta (the "Other" series).
    pub other: f64,
    /// `value_b` delta (the "Optimal" series).
    pub optimal: f64,
}

/// Append-only record of the samples of the current run, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct History {
    samples: Vec<Sample>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Deltas between the last two samples; zero when fewer than two exist.
    pub fn last_deltas(&self) -> Deltas {
        match self.samples.as_slice() {
            [.., prev, last] => Deltas {
                other: last.value_a - prev.value_a,
                optimal: last.value_b - prev.value_b,
            },
            _ => Deltas::default(),
        }
    }

    /// `[time, value_a]` pairs for line rendering.
    pub fn points_a(&self) -> Vec<[f64; 2]> {
        self.samples.iter().map(Sample::point_a).collect()
    }

    /// `[time, value_b]` pairs for line rendering.
    pub fn points_b(&self) -> Vec<[f64; 2]> {
        self.samples.iter().map(Sample::point_b).collect()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
