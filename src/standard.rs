//! Standard impulse shapes from high-voltage test practice.
//!
//! IEC 60060-1 and IEEE Std 4 standardize two impulse shapes, written as
//! front/tail time pairs: the lightning impulse 1.2/50 µs and the
//! switching impulse 250/2500 µs. A measured waveform counts as one of
//! them when its front time lies within ±30% and its tail time within
//! ±20% of the nominal values.

use serde::{Deserialize, Serialize};

use crate::params::{TargetSpec, MICRO};
use crate::waveform::WaveformMetrics;

/// Allowed relative deviation of the front time from nominal.
pub const FRONT_TOLERANCE: f64 = 0.30;

/// Allowed relative deviation of the tail time from nominal.
pub const TAIL_TOLERANCE: f64 = 0.20;

/// A standardized impulse voltage shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StandardImpulse {
    /// Lightning impulse, 1.2/50 µs.
    Lightning,
    /// Switching impulse, 250/2500 µs.
    Switching,
}

impl StandardImpulse {
    /// Nominal front time T1 in microseconds.
    pub fn front_time(&self) -> f64 {
        match self {
            Self::Lightning => 1.2,
            Self::Switching => 250.0,
        }
    }

    /// Nominal tail time T2 in microseconds.
    pub fn tail_time(&self) -> f64 {
        match self {
            Self::Lightning => 50.0,
            Self::Switching => 2500.0,
        }
    }

    /// Conventional designation, e.g. `1.2/50 µs`.
    pub fn designation(&self) -> &'static str {
        match self {
            Self::Lightning => "1.2/50 µs",
            Self::Switching => "250/2500 µs",
        }
    }

    /// Whether the given metrics fall inside this shape's tolerance band.
    pub fn matches(&self, metrics: &WaveformMetrics) -> bool {
        within(metrics.front_time, self.front_time(), FRONT_TOLERANCE)
            && within(metrics.tail_time, self.tail_time(), TAIL_TOLERANCE)
    }

    /// Classify metrics as one of the standard shapes, if any fits.
    pub fn classify(metrics: &WaveformMetrics) -> Option<Self> {
        [Self::Lightning, Self::Switching]
            .into_iter()
            .find(|shape| shape.matches(metrics))
    }

    /// Build a target specification for this shape with the given known
    /// capacitances (farads), ready for the inverse component solve.
    pub fn target_spec(&self, c1: f64, c2: f64) -> TargetSpec {
        TargetSpec::new(self.front_time() * MICRO, self.tail_time() * MICRO, c1, c2)
    }
}

impl std::fmt::Display for StandardImpulse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.designation())
    }
}

fn within(value: f64, nominal: f64, tolerance: f64) -> bool {
    value > 0.0 && (value - nominal).abs() <= nominal * tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn metrics(front: f64, tail: f64) -> WaveformMetrics {
        WaveformMetrics {
            peak_voltage: 90.0,
            front_time: front,
            tail_time: tail,
            efficiency: 90.0,
        }
    }

    #[test]
    fn test_lightning_band() {
        assert!(StandardImpulse::Lightning.matches(&metrics(1.2, 50.0)));
        assert!(StandardImpulse::Lightning.matches(&metrics(1.5, 55.0)));
        // Front 67% high, tail 30% low: both outside the band.
        assert!(!StandardImpulse::Lightning.matches(&metrics(2.0, 50.0)));
        assert!(!StandardImpulse::Lightning.matches(&metrics(1.2, 35.0)));
        // A zero tail (span never reached the crossing) never matches.
        assert!(!StandardImpulse::Lightning.matches(&metrics(1.2, 0.0)));
    }

    #[test]
    fn test_classification() {
        assert_eq!(
            StandardImpulse::classify(&metrics(1.3, 48.0)),
            Some(StandardImpulse::Lightning)
        );
        assert_eq!(
            StandardImpulse::classify(&metrics(260.0, 2400.0)),
            Some(StandardImpulse::Switching)
        );
        assert_eq!(StandardImpulse::classify(&metrics(10.0, 1000.0)), None);
    }

    #[test]
    fn test_target_spec_round_trip() {
        let spec = StandardImpulse::Lightning.target_spec(10e-9, 1000e-12);
        assert_relative_eq!(spec.front_time, 1.2e-6, max_relative = 1e-12);
        assert_relative_eq!(spec.tail_time, 50e-6, max_relative = 1e-12);
        assert_relative_eq!(spec.c1, 10e-9, max_relative = 1e-12);
        assert_relative_eq!(spec.c2, 1e-9, max_relative = 1e-12);
    }

    #[test]
    fn test_designations() {
        assert_eq!(StandardImpulse::Lightning.to_string(), "1.2/50 µs");
        assert_eq!(StandardImpulse::Switching.designation(), "250/2500 µs");
    }
}
