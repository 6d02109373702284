//! Waveform samples and derived metrics.

use serde::{Deserialize, Serialize};

/// One point of the sampled impulse waveform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveformSample {
    /// Time since the impulse origin, in microseconds.
    pub time: f64,
    /// Voltage as a percentage of the charging voltage.
    pub voltage: f64,
}

/// Scalar metrics derived from a waveform.
///
/// Metrics and samples are produced together by a single solve and are
/// never updated independently of each other.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WaveformMetrics {
    /// Peak voltage as a percentage of the charging voltage.
    pub peak_voltage: f64,
    /// Front time T1 in microseconds (time to peak).
    pub front_time: f64,
    /// Tail time T2 in microseconds (time to 50% of peak), or 0 when the
    /// sampled span never reaches the crossing.
    pub tail_time: f64,
    /// Voltage efficiency in percent. In the normalized model this equals
    /// the peak voltage.
    pub efficiency: f64,
}

/// A solved waveform: the sample sequence plus its metrics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WaveformSolution {
    /// Samples ordered by ascending time.
    pub samples: Vec<WaveformSample>,
    /// Metrics derived from the same solve.
    pub metrics: WaveformMetrics,
}

impl WaveformSolution {
    /// The canonical result for inputs the solver cannot compute with:
    /// no samples, all metrics zero.
    pub fn degenerate() -> Self {
        Self::default()
    }

    /// Whether this solution is the canonical degenerate result.
    pub fn is_degenerate(&self) -> bool {
        self.samples.is_empty()
    }
}
