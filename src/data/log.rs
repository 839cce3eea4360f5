//! Timing log entries emitted once per tick.

use std::fmt;

use super::history::Deltas;

/// The two plotted series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    /// `value_b`, the compounding optimised process.
    Optimal,
    /// `value_a`, the baseline process.
    Other,
}

impl SeriesKind {
    pub fn label(self) -> &'static str {
        match self {
            SeriesKind::Optimal => "Optimal",
            SeriesKind::Other => "Other",
        }
    }
}

/// One line of the timing log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogLine {
    /// Simulated time elapsed in the run, in milliseconds.
    pub elapsed_ms: u64,
    pub series: SeriesKind,
    pub delta: f64,
}

impl LogLine {
    /// The `[seconds:tenths]` stamp of this line.
    pub fn time_stamp(&self) -> String {
        format_time_stamp(self.elapsed_ms)
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = format!("{}:", self.series.label());
        write!(f, "{} {:<20} {}", self.time_stamp(), label, format_delta(self.delta))
    }
}

/// Render `elapsed_ms` as `[seconds:tenths]`.
pub fn format_time_stamp(elapsed_ms: u64) -> String {
    format!("[{}:{}]", elapsed_ms / 1000, (elapsed_ms % 1000) / 100)
}

/// Significant digits shown for a delta.
const DELTA_DIGITS: i32 = 4;

/// Render `value` with four significant digits.
///
/// Fixed notation keeps at least one fractional digit (`12.35`, `-1.5`,
/// `0.0`); magnitudes below `1e-4` or from `1e3` up switch to exponent form
/// (`1.235e+04`).
pub fn format_delta(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }
    // Rounding first tells us the exponent after carry, e.g. 9999.9 -> 1.000e4.
    let sci = format!("{:.*e}", (DELTA_DIGITS - 1) as usize, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    // Fixed notation needs room for the trailing `.0`, hence one digit less.
    if exp < -4 || exp >= DELTA_DIGITS - 1 {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs());
    }
    let decimals = (DELTA_DIGITS - 1 - exp).max(0) as usize;
    let fixed = format!("{:.*}", decimals, value);
    let trimmed = trim_zeros(&fixed);
    if trimmed.contains('.') {
        trimmed.to_string()
    } else {
        format!("{trimmed}.0")
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// The pair of log lines written for one tick: optimal first, then other.
pub fn log_pair(elapsed_ms: u64, deltas: Deltas) -> [LogLine; 2] {
    [
        LogLine {
            elapsed_ms,
            series: SeriesKind::Optimal,
            delta: deltas.optimal,
        },
        LogLine {
            elapsed_ms,
            series: SeriesKind::Other,
            delta: deltas.other,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_keeps_four_significant_digits() {
        assert_eq!(format_delta(12.345678), "12.35");
        assert_eq!(format_delta(-1.5), "-1.5");
        assert_eq!(format_delta(0.0), "0.0");
        assert_eq!(format_delta(100.0), "100.0");
        assert_eq!(format_delta(999.0), "999.0");
        assert_eq!(format_delta(99.996), "100.0");
        assert_eq!(format_delta(0.00012345), "0.0001234");
        assert_eq!(format_delta(0.5), "0.5");
    }

    #[test]
    fn large_and_tiny_deltas_use_exponent_form() {
        assert_eq!(format_delta(12345.6), "1.235e+04");
        assert_eq!(format_delta(1234.0), "1.234e+03");
        assert_eq!(format_delta(999.96), "1e+03");
        assert_eq!(format_delta(10000.0), "1e+04");
        assert_eq!(format_delta(9999.9), "1e+04");
        assert_eq!(format_delta(-0.000012345), "-1.234e-05");
    }
}
