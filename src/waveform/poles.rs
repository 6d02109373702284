//! Pole extraction from the discharge circuit's characteristic equation.

use crate::params::CircuitParameters;

/// The two real poles of the discharge circuit, stored as positive decay
/// rates in 1/s.
///
/// `alpha` is the slow rate that governs the tail, `beta` the fast rate
/// that governs the front. A valid pair always satisfies
/// `beta > alpha > 0`; constructors return `None` for any configuration
/// that cannot produce that ordering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolePair {
    /// Tail decay rate (the smaller magnitude root).
    pub alpha: f64,
    /// Front rise rate (the larger magnitude root).
    pub beta: f64,
}

impl PolePair {
    /// Extract the poles from the full characteristic equation
    /// `s^2 + a*s + b = 0`.
    ///
    /// This is the canonical form used by the waveform solver.
    pub fn from_characteristic(params: &CircuitParameters) -> Option<Self> {
        if !params.is_physical() {
            return None;
        }

        let a = 1.0 / (params.r1 * params.c2)
            + 1.0 / (params.r2 * params.c1)
            + 1.0 / (params.r2 * params.c2);
        let b = 1.0 / (params.r1 * params.r2 * params.c1 * params.c2);

        Self::from_coefficients(a, b)
    }

    /// Extract the poles from explicit characteristic coefficients.
    ///
    /// Returns `None` when the discriminant is negative (underdamped
    /// response, outside the double-exponential model) or when the root
    /// ordering degenerates.
    pub fn from_coefficients(a: f64, b: f64) -> Option<Self> {
        let discriminant = a * a - 4.0 * b;
        if discriminant < 0.0 {
            return None;
        }

        // Roots s = (-a ± sqrt(D))/2; magnitudes give the decay rates.
        let root = discriminant.sqrt();
        let alpha = (a - root) / 2.0;
        let beta = (a + root) / 2.0;

        if alpha <= 0.0 || alpha >= beta {
            return None;
        }

        Some(Self { alpha, beta })
    }

    /// Extract the poles from the simplified two-pole approximation:
    ///
    /// ```text
    /// alpha = 1/(R2*(C1+C2))
    /// beta  = (C1+C2)/(R1*C1*C2)
    /// ```
    ///
    /// This is the model the inverse component solve is built around. It
    /// is a documented simplification of [`from_characteristic`] and the
    /// two do not agree exactly.
    ///
    /// [`from_characteristic`]: PolePair::from_characteristic
    pub fn from_two_pole_approximation(params: &CircuitParameters) -> Option<Self> {
        if !params.is_physical() {
            return None;
        }

        let alpha = 1.0 / (params.r2 * params.total_capacitance());
        let beta = params.total_capacitance() / (params.r1 * params.c1 * params.c2);

        if alpha >= beta {
            return None;
        }

        Some(Self { alpha, beta })
    }

    /// Analytic time of the waveform maximum:
    /// `t_peak = ln(beta/alpha)/(beta - alpha)`.
    pub fn time_to_peak(&self) -> f64 {
        (self.beta / self.alpha).ln() / (self.beta - self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_characteristic_roots_satisfy_vieta() {
        let params = CircuitParameters::default();
        let poles = PolePair::from_characteristic(&params).unwrap();

        // Sum and product of the roots must reproduce the coefficients.
        let a = 1.0 / (params.r1 * params.c2)
            + 1.0 / (params.r2 * params.c1)
            + 1.0 / (params.r2 * params.c2);
        let b = 1.0 / (params.r1 * params.r2 * params.c1 * params.c2);

        assert_relative_eq!(poles.alpha + poles.beta, a, max_relative = 1e-12);
        assert_relative_eq!(poles.alpha * poles.beta, b, max_relative = 1e-9);
        assert!(poles.beta > poles.alpha);
        assert!(poles.alpha > 0.0);
    }

    #[test]
    fn test_underdamped_coefficients_rejected() {
        // a^2 - 4b = 4 - 8 < 0
        assert!(PolePair::from_coefficients(2.0, 2.0).is_none());
    }

    #[test]
    fn test_repeated_root_rejected() {
        // a^2 - 4b = 0 collapses alpha and beta together.
        assert!(PolePair::from_coefficients(2.0, 1.0).is_none());
    }

    #[test]
    fn test_non_physical_parameters_rejected() {
        let mut params = CircuitParameters::default();
        params.c1 = 0.0;
        assert!(PolePair::from_characteristic(&params).is_none());
        assert!(PolePair::from_two_pole_approximation(&params).is_none());
    }

    #[test]
    fn test_two_pole_approximation_values() {
        let params = CircuitParameters::default();
        let poles = PolePair::from_two_pole_approximation(&params).unwrap();

        // alpha = 1/(4000 * 50.5nF), beta = 50.5nF/(400 * 50nF * 0.5nF)
        assert_relative_eq!(poles.alpha, 1.0 / (4000.0 * 50.5e-9), max_relative = 1e-12);
        assert_relative_eq!(
            poles.beta,
            50.5e-9 / (400.0 * 50e-9 * 0.5e-9),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_time_to_peak_closed_form() {
        let poles = PolePair {
            alpha: 1e4,
            beta: 1e6,
        };
        let expected = (100.0f64).ln() / (1e6 - 1e4);
        assert_relative_eq!(poles.time_to_peak(), expected, max_relative = 1e-12);
    }
}
