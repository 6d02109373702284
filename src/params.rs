//! Circuit parameter and target specification value types.
//!
//! All types here are plain copyable records with no identity: they are
//! rebuilt from scratch on every parameter change and owned by whichever
//! caller requested the solve. Internally everything is SI (ohms, farads,
//! seconds); the `from_bench_units` constructors convert from the units a
//! test bench is labeled in (Ω, nF, pF, µs).

use serde::{Deserialize, Serialize};

/// Scale factor from nanofarads to farads.
pub const NANO: f64 = 1e-9;

/// Scale factor from picofarads to farads.
pub const PICO: f64 = 1e-12;

/// Scale factor from microseconds to seconds.
pub const MICRO: f64 = 1e-6;

/// Component values of the equivalent discharge circuit.
///
/// After every spark gap in the Marx column fires, the generator reduces
/// to a single RC mesh: the series-connected capacitor bank C1 discharges
/// through the front resistor R1 into the load capacitance C2, while the
/// tail resistor R2 bleeds the whole mesh to ground.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircuitParameters {
    /// Front (wave-shaping) resistor R1 in ohms.
    pub r1: f64,
    /// Tail (discharge) resistor R2 in ohms.
    pub r2: f64,
    /// Generator capacitance C1 in farads.
    pub c1: f64,
    /// Load capacitance C2 in farads.
    pub c2: f64,
}

impl CircuitParameters {
    /// Create parameters from SI values (ohms and farads).
    pub fn new(r1: f64, r2: f64, c1: f64, c2: f64) -> Self {
        Self { r1, r2, c1, c2 }
    }

    /// Create parameters from bench units: resistances in ohms,
    /// capacitances in nanofarads.
    pub fn from_bench_units(r1_ohm: f64, r2_ohm: f64, c1_nf: f64, c2_nf: f64) -> Self {
        Self {
            r1: r1_ohm,
            r2: r2_ohm,
            c1: c1_nf * NANO,
            c2: c2_nf * NANO,
        }
    }

    /// Check that every component value is strictly positive.
    ///
    /// Solvers treat anything else as degenerate and return the canonical
    /// empty result.
    pub fn is_physical(&self) -> bool {
        self.r1 > 0.0 && self.r2 > 0.0 && self.c1 > 0.0 && self.c2 > 0.0
    }

    /// Total capacitance C1 + C2 seen by the tail resistor.
    pub fn total_capacitance(&self) -> f64 {
        self.c1 + self.c2
    }

    /// Series combination C1*C2/(C1+C2) seen by the front resistor.
    pub fn series_capacitance(&self) -> f64 {
        self.c1 * self.c2 / (self.c1 + self.c2)
    }
}

impl Default for CircuitParameters {
    /// The demonstration bench values: 400 Ω / 4 kΩ / 50 nF / 0.5 nF.
    fn default() -> Self {
        Self::from_bench_units(400.0, 4000.0, 50.0, 0.5)
    }
}

/// Input to the inverse component solve: the impulse shape the operator
/// wants and the capacitances already fixed by the bench.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetSpec {
    /// Target front time T1 in seconds.
    pub front_time: f64,
    /// Target tail time T2 in seconds.
    pub tail_time: f64,
    /// Known generator capacitance C1 in farads.
    pub c1: f64,
    /// Known load capacitance C2 in farads.
    pub c2: f64,
}

impl TargetSpec {
    /// Create a target specification from SI values (seconds and farads).
    pub fn new(front_time: f64, tail_time: f64, c1: f64, c2: f64) -> Self {
        Self {
            front_time,
            tail_time,
            c1,
            c2,
        }
    }

    /// Create a target specification from bench units: times in
    /// microseconds, C1 in nanofarads, C2 in picofarads (load
    /// capacitances are typically quoted in pF on the inverse view).
    pub fn from_bench_units(t1_us: f64, t2_us: f64, c1_nf: f64, c2_pf: f64) -> Self {
        Self {
            front_time: t1_us * MICRO,
            tail_time: t2_us * MICRO,
            c1: c1_nf * NANO,
            c2: c2_pf * PICO,
        }
    }

    /// Check that every field is strictly positive.
    pub fn is_physical(&self) -> bool {
        self.front_time > 0.0 && self.tail_time > 0.0 && self.c1 > 0.0 && self.c2 > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bench_unit_conversion() {
        let params = CircuitParameters::from_bench_units(400.0, 4000.0, 50.0, 0.5);
        assert_relative_eq!(params.r1, 400.0);
        assert_relative_eq!(params.c1, 50e-9);
        assert_relative_eq!(params.c2, 0.5e-9);
    }

    #[test]
    fn test_capacitance_combinations() {
        let params = CircuitParameters::default();
        assert_relative_eq!(params.total_capacitance(), 50.5e-9);
        assert_relative_eq!(params.series_capacitance(), 50e-9 * 0.5e-9 / 50.5e-9);
    }

    #[test]
    fn test_is_physical_rejects_non_positive() {
        let good = CircuitParameters::default();
        assert!(good.is_physical());

        let mut bad = good;
        bad.r1 = 0.0;
        assert!(!bad.is_physical());

        bad = good;
        bad.c2 = -1e-9;
        assert!(!bad.is_physical());
    }

    #[test]
    fn test_target_spec_bench_units() {
        let spec = TargetSpec::from_bench_units(1.2, 50.0, 10.0, 1000.0);
        assert_relative_eq!(spec.front_time, 1.2e-6);
        assert_relative_eq!(spec.tail_time, 50e-6);
        assert_relative_eq!(spec.c1, 10e-9);
        assert_relative_eq!(spec.c2, 1e-9);
        assert!(spec.is_physical());
        assert!(!TargetSpec::from_bench_units(0.0, 50.0, 10.0, 1000.0).is_physical());
    }
}
