//! Waveform sampling and metric extraction.

use crate::params::{CircuitParameters, MICRO};
use crate::{DEFAULT_CHARGING_VOLTAGE, DEFAULT_SAMPLE_COUNT};

use super::poles::PolePair;
use super::solution::{WaveformMetrics, WaveformSample, WaveformSolution};
use super::{DEFAULT_SPAN_FACTOR, TAIL_FRACTION};

/// How the sampled time span is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeSpanPolicy {
    /// Span as a multiple of the analytic time-to-peak. Scales with the
    /// waveform, so the front is always well resolved.
    PeakMultiple(f64),
    /// Fixed span in seconds. Useful when comparing runs across different
    /// parameter sets on a common time axis.
    Fixed(f64),
}

/// Configuration for the waveform solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Charging voltage basis. The sampled voltages are reported as a
    /// percentage of this value.
    pub charging_voltage: f64,
    /// Number of sample intervals; the waveform has `sample_count + 1`
    /// points.
    pub sample_count: usize,
    /// Time span selection policy.
    pub time_span: TimeSpanPolicy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            charging_voltage: DEFAULT_CHARGING_VOLTAGE,
            sample_count: DEFAULT_SAMPLE_COUNT,
            time_span: TimeSpanPolicy::PeakMultiple(DEFAULT_SPAN_FACTOR),
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the charging voltage basis.
    pub fn with_charging_voltage(mut self, charging_voltage: f64) -> Self {
        self.charging_voltage = charging_voltage;
        self
    }

    /// Set the number of sample intervals.
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Set the time span policy.
    pub fn with_time_span(mut self, time_span: TimeSpanPolicy) -> Self {
        self.time_span = time_span;
        self
    }
}

/// Solve the impulse waveform for the given circuit parameters.
///
/// Samples `v(t) = k(e^(-alpha*t) - e^(-beta*t))` over the configured
/// span and derives the metrics in one pass. Any input the
/// double-exponential model cannot represent (non-positive components,
/// underdamped discriminant, inverted pole ordering, empty span) yields
/// [`WaveformSolution::degenerate`]; the function never panics and never
/// returns NaN samples.
pub fn solve(params: &CircuitParameters, config: &SolverConfig) -> WaveformSolution {
    let Some(poles) = PolePair::from_characteristic(params) else {
        return WaveformSolution::degenerate();
    };

    if config.sample_count == 0 || config.charging_voltage <= 0.0 {
        return WaveformSolution::degenerate();
    }

    let PolePair { alpha, beta } = poles;
    let v0 = config.charging_voltage;

    // Amplitude calibration: source transfer gain times the capacitive
    // divider ratio C1/(C1+C2).
    let k = (v0 / (params.r1 * params.c2 * (beta - alpha))) * (params.c1 / params.total_capacitance());
    let voltage_at = |t: f64| k * ((-alpha * t).exp() - (-beta * t).exp());

    let t_peak = poles.time_to_peak();
    let span = match config.time_span {
        TimeSpanPolicy::PeakMultiple(factor) => t_peak * factor,
        TimeSpanPolicy::Fixed(seconds) => seconds,
    };
    if span <= 0.0 {
        return WaveformSolution::degenerate();
    }

    let steps = config.sample_count;
    let mut samples = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let t = span * (i as f64) / (steps as f64);
        samples.push(WaveformSample {
            time: t / MICRO,
            voltage: voltage_at(t) / v0 * 100.0,
        });
    }

    let peak_voltage = voltage_at(t_peak) / v0 * 100.0;

    // Scan forward from the peak sample for the first point below half
    // the peak. A span too short to reach the crossing reports 0.
    let peak_index = (steps as f64 * t_peak / span).floor() as usize;
    let mut tail_time = 0.0;
    for sample in samples.iter().skip(peak_index) {
        if sample.voltage < peak_voltage * TAIL_FRACTION {
            tail_time = sample.time;
            break;
        }
    }

    let metrics = WaveformMetrics {
        peak_voltage,
        front_time: t_peak / MICRO,
        tail_time,
        efficiency: peak_voltage,
    };

    WaveformSolution { samples, metrics }
}
