//! # Impulse Core
//!
//! A double-exponential impulse waveform solver for Marx generator
//! equivalent RC networks.
//!
//! This library provides:
//! - A waveform solver that derives the sampled impulse voltage curve
//!   `v(t) = k(e^(-alpha*t) - e^(-beta*t))` and its metrics (peak voltage,
//!   front time T1, tail time T2, efficiency) from component values
//! - A component solver for the inverse problem: suggested front and tail
//!   resistors from target T1/T2 and known capacitances
//! - Quick textbook estimates of T1/T2 for the basic calculator view
//! - Standard impulse shapes (lightning 1.2/50, switching 250/2500) with
//!   IEC tolerance matching
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`params`] - Circuit parameter and target specification value types
//! - [`waveform`] - Pole extraction, waveform sampling, metric derivation
//! - [`estimate`] - Approximate time estimation and the inverse solve
//! - [`standard`] - Standard impulse shapes and tolerance bands
//! - [`export`] - JSON/CSV serialization for chart consumers (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! impulse simulate --r1 400 --r2 4000 --c1 50 --c2 0.5 --format json
//! impulse design --t1 1.2 --t2 50 --c1 10 --c2 1000
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmImpulseSim } from 'impulse_core';
//!
//! const sim = new WasmImpulseSim(400, 4000, 50, 0.5);
//! chart.plot(sim.times(), sim.voltages());
//! ```
//!
//! ## Solution Method
//!
//! The discharge circuit (front resistor R1, tail resistor R2, generator
//! capacitance C1, load capacitance C2) is a second-order linear system
//! with characteristic polynomial `s^2 + a*s + b = 0`. For a valid
//! parameter set both roots are real and negative; their magnitudes are
//! the tail decay rate alpha and front rise rate beta of the standard
//! double-exponential impulse model. Sampling the closed-form solution is
//! exact, so no time-stepping integration is involved.
//!
//! Every solver in the crate is a pure function of its inputs. Invalid or
//! physically degenerate inputs (non-positive components, underdamped
//! discriminant, inverted pole ordering, empty time span) produce a
//! canonical empty result rather than an error.

pub mod error;
pub mod estimate;
pub mod params;
pub mod standard;
pub mod waveform;

#[cfg(feature = "cli")]
pub mod export;

// Re-export main types for convenience
pub use error::{ImpulseError, Result};
pub use estimate::{estimate_times, suggest_resistors, SuggestedResistors, TimeEstimate};
pub use params::{CircuitParameters, TargetSpec};
pub use standard::StandardImpulse;
pub use waveform::{
    solve, SolverConfig, TimeSpanPolicy, WaveformMetrics, WaveformSample, WaveformSolution,
};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmImpulseSim;

/// Default charging voltage basis. Working at 100 lets the waveform read
/// directly as a percentage of the charging voltage.
pub const DEFAULT_CHARGING_VOLTAGE: f64 = 100.0;

/// Default number of sample intervals per waveform.
pub const DEFAULT_SAMPLE_COUNT: usize = 500;
