//! Quick component-level estimates and the inverse solve.
//!
//! Two deliberately rough formula sets live here, distinct from the
//! waveform solver's closed-form results:
//!
//! - [`estimate_times`] is the textbook single-constant approximation of
//!   T1/T2 from component values, used by the basic calculator view.
//! - [`suggest_resistors`] runs the two-pole approximation backwards to
//!   size R1/R2 for a target impulse shape.
//!
//! Neither is reconciled with the analytic time-to-peak in
//! [`crate::waveform`]; they are alternate simplified models, and a round
//! trip through both is only accurate to within an order of magnitude.

use serde::{Deserialize, Serialize};

use crate::params::{CircuitParameters, TargetSpec, MICRO};

/// Multiplier in the textbook tail-time approximation
/// `T2 = 0.7*(R1+R2)*(C1+C2)`.
pub const TAIL_TIME_FACTOR: f64 = 0.7;

/// Approximate front/tail times computed from component values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeEstimate {
    /// Approximate front time T1 in seconds.
    pub front_time: f64,
    /// Approximate tail time T2 in seconds.
    pub tail_time: f64,
}

impl TimeEstimate {
    /// Front time in microseconds, for display.
    pub fn front_time_micros(&self) -> f64 {
        self.front_time / MICRO
    }

    /// Tail time in microseconds, for display.
    pub fn tail_time_micros(&self) -> f64 {
        self.tail_time / MICRO
    }
}

/// Resistor values suggested by the inverse solve, in ohms.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SuggestedResistors {
    /// Front (wave-shaping) resistor R1.
    pub r1: f64,
    /// Tail (discharge) resistor R2.
    pub r2: f64,
}

/// Estimate front and tail times from component values:
///
/// ```text
/// T1 = R1 * C1*C2/(C1+C2)
/// T2 = 0.7 * (R1+R2) * (C1+C2)
/// ```
///
/// Any non-positive component value yields the all-zero estimate.
pub fn estimate_times(params: &CircuitParameters) -> TimeEstimate {
    if !params.is_physical() {
        return TimeEstimate::default();
    }

    TimeEstimate {
        front_time: params.r1 * params.series_capacitance(),
        tail_time: TAIL_TIME_FACTOR * (params.r1 + params.r2) * params.total_capacitance(),
    }
}

/// Suggest front and tail resistors for a target impulse shape:
///
/// ```text
/// R2 = T2/(C1+C2)
/// R1 = T1*(C1+C2)/(C1*C2)
/// ```
///
/// The tail time is dominated by R2 discharging the total capacitance,
/// the front time by R1 charging the series combination. Any non-positive
/// field in the target yields the all-zero suggestion; no partial result
/// is produced.
pub fn suggest_resistors(spec: &TargetSpec) -> SuggestedResistors {
    if !spec.is_physical() {
        return SuggestedResistors::default();
    }

    let total = spec.c1 + spec.c2;
    SuggestedResistors {
        r1: spec.front_time * total / (spec.c1 * spec.c2),
        r2: spec.tail_time / total,
    }
}
