//! Double-exponential waveform solver.
//!
//! This module provides the numerical engine for the impulse simulation.
//!
//! ## Circuit Model
//!
//! With every spark gap conducting, the generator reduces to a two-mesh
//! RC network whose node equations collapse into the characteristic
//! polynomial:
//!
//! ```text
//! s^2 + a*s + b = 0
//!
//! a = 1/(R1*C2) + 1/(R2*C1) + 1/(R2*C2)
//! b = 1/(R1*R2*C1*C2)
//! ```
//!
//! Both roots are real and negative for a well-formed impulse circuit.
//! Writing their magnitudes as alpha (tail decay) and beta (front rise),
//! the output voltage is the classic double exponential:
//!
//! ```text
//! v(t) = k * (e^(-alpha*t) - e^(-beta*t)),   beta > alpha > 0
//! ```
//!
//! The solver samples this closed form directly; there is no integration
//! loop and therefore no accumulation error.

mod poles;
mod solution;
mod solver;

pub use poles::PolePair;
pub use solution::{WaveformMetrics, WaveformSample, WaveformSolution};
pub use solver::{solve, SolverConfig, TimeSpanPolicy};

/// Default time span, as a multiple of the analytic time-to-peak.
pub const DEFAULT_SPAN_FACTOR: f64 = 20.0;

/// Tail time is read where the waveform decays below this fraction of
/// its peak.
pub const TAIL_FRACTION: f64 = 0.5;
