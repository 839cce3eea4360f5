//! Decorative Pareto-front scatter layout.
//!
//! The scatter chart is not computed from simulation data: it shows three
//! fixed anchor points, each jittered on every redraw, on a `0..100` square.

use super::source::UniformSource;

/// Both axes of the Pareto chart span `0..=AXIS_MAX`.
pub const AXIS_MAX: f64 = 100.0;

/// Which anchor a scatter group belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScatterRole {
    /// Unlabelled candidate solution.
    Candidate,
    /// The ideal (utopia) point.
    Utopia,
    /// The optimal solution.
    Optimal,
}

impl ScatterRole {
    /// Legend label, `None` for the unlabelled candidate group.
    pub fn label(self) -> Option<&'static str> {
        match self {
            ScatterRole::Candidate => None,
            ScatterRole::Utopia => Some("Utopia point"),
            ScatterRole::Optimal => Some("Optimal"),
        }
    }
}

/// One series of scatter points sharing a marker.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterGroup {
    pub role: ScatterRole,
    pub points: Vec<[f64; 2]>,
    /// Marker diameter in points.
    pub marker_size: f32,
}

struct Anchor {
    role: ScatterRole,
    x: (f64, f64),
    y: (f64, f64),
    marker_size: f32,
}

// (centre, noise size) per axis
const ANCHORS: [Anchor; 3] = [
    Anchor {
        role: ScatterRole::Candidate,
        x: (23.0, 2.0),
        y: (25.0, 2.0),
        marker_size: 5.0,
    },
    Anchor {
        role: ScatterRole::Utopia,
        x: (2.0, 0.5),
        y: (23.0, 2.0),
        marker_size: 10.0,
    },
    Anchor {
        role: ScatterRole::Optimal,
        x: (2.0, 0.5),
        y: (45.0, 4.0),
        marker_size: 7.0,
    },
];

/// `value` shifted by a uniform offset in `[-noise/2, noise/2)`.
pub fn jitter(value: f64, noise: f64, u: f64) -> f64 {
    value + (noise / -2.0 + noise * u)
}

/// Lay out a fresh set of jittered scatter groups.
pub fn pareto_groups<S: UniformSource + ?Sized>(source: &mut S) -> Vec<ScatterGroup> {
    ANCHORS
        .iter()
        .map(|a| {
            let x = jitter(a.x.0, a.x.1, source.next_uniform());
            let y = jitter(a.y.0, a.y.1, source.next_uniform());
            ScatterGroup {
                role: a.role,
                points: vec![[x, y]],
                marker_size: a.marker_size,
            }
        })
        .collect()
}
