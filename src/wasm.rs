//! WASM bindings for Impulse Core.
//!
//! This module provides JavaScript-friendly bindings for driving the
//! waveform solver from a browser front end (sliders in, chart data out).
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmImpulseSim, suggest_resistors } from 'impulse_core';
//!
//! await init();
//!
//! const sim = new WasmImpulseSim(400, 4000, 50, 0.5);
//! chart.plot(sim.times(), sim.voltages());
//! display(sim.front_time, sim.tail_time, sim.peak_voltage);
//!
//! // Inverse solve: [R1, R2] for a 1.2/50 µs target
//! const [r1, r2] = suggest_resistors(1.2, 50, 10, 1000);
//! ```

use wasm_bindgen::prelude::*;

use crate::estimate;
use crate::params::{CircuitParameters, TargetSpec};
use crate::waveform::{solve, SolverConfig, WaveformSolution};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible impulse waveform simulator.
///
/// Holds the current parameter set and the solution computed from it.
/// Every parameter change recomputes the whole solution; there is no
/// partial update.
#[wasm_bindgen]
pub struct WasmImpulseSim {
    params: CircuitParameters,
    config: SolverConfig,
    solution: WaveformSolution,
}

#[wasm_bindgen]
impl WasmImpulseSim {
    /// Create a new simulator and solve for the initial parameters.
    ///
    /// # Arguments
    /// * `r1_ohm` - Front resistor R1 in ohms
    /// * `r2_ohm` - Tail resistor R2 in ohms
    /// * `c1_nf` - Generator capacitance C1 in nanofarads
    /// * `c2_nf` - Load capacitance C2 in nanofarads
    #[wasm_bindgen(constructor)]
    pub fn new(r1_ohm: f64, r2_ohm: f64, c1_nf: f64, c2_nf: f64) -> WasmImpulseSim {
        let params = CircuitParameters::from_bench_units(r1_ohm, r2_ohm, c1_nf, c2_nf);
        let config = SolverConfig::default();
        let solution = solve(&params, &config);
        WasmImpulseSim {
            params,
            config,
            solution,
        }
    }

    /// Replace the parameters and recompute the waveform.
    #[wasm_bindgen]
    pub fn set_parameters(&mut self, r1_ohm: f64, r2_ohm: f64, c1_nf: f64, c2_nf: f64) {
        self.params = CircuitParameters::from_bench_units(r1_ohm, r2_ohm, c1_nf, c2_nf);
        self.solution = solve(&self.params, &self.config);
    }

    /// Set the number of sample intervals and recompute.
    #[wasm_bindgen]
    pub fn set_sample_count(&mut self, sample_count: usize) {
        self.config = self.config.with_sample_count(sample_count);
        self.solution = solve(&self.params, &self.config);
    }

    /// Sample times in microseconds, one per waveform point.
    #[wasm_bindgen]
    pub fn times(&self) -> Vec<f64> {
        self.solution.samples.iter().map(|s| s.time).collect()
    }

    /// Sample voltages as percentages of the charging voltage.
    #[wasm_bindgen]
    pub fn voltages(&self) -> Vec<f64> {
        self.solution.samples.iter().map(|s| s.voltage).collect()
    }

    /// Peak voltage in percent.
    #[wasm_bindgen(getter)]
    pub fn peak_voltage(&self) -> f64 {
        self.solution.metrics.peak_voltage
    }

    /// Front time T1 in microseconds.
    #[wasm_bindgen(getter)]
    pub fn front_time(&self) -> f64 {
        self.solution.metrics.front_time
    }

    /// Tail time T2 in microseconds.
    #[wasm_bindgen(getter)]
    pub fn tail_time(&self) -> f64 {
        self.solution.metrics.tail_time
    }

    /// Voltage efficiency in percent.
    #[wasm_bindgen(getter)]
    pub fn efficiency(&self) -> f64 {
        self.solution.metrics.efficiency
    }

    /// Whether the current parameters produced the canonical empty result.
    #[wasm_bindgen(getter)]
    pub fn is_degenerate(&self) -> bool {
        self.solution.is_degenerate()
    }
}

/// Suggest front and tail resistors for a target impulse shape.
///
/// Takes the target front/tail times in microseconds, C1 in nanofarads
/// and C2 in picofarads. Returns `[r1_ohm, r2_ohm]`, both zero when any
/// input is non-positive.
#[wasm_bindgen]
pub fn suggest_resistors(t1_us: f64, t2_us: f64, c1_nf: f64, c2_pf: f64) -> Vec<f64> {
    let spec = TargetSpec::from_bench_units(t1_us, t2_us, c1_nf, c2_pf);
    let suggested = estimate::suggest_resistors(&spec);
    vec![suggested.r1, suggested.r2]
}

/// Estimate front and tail times with the quick textbook formulas.
///
/// Takes resistances in ohms and capacitances in nanofarads. Returns
/// `[t1_us, t2_us]`, both zero when any input is non-positive.
#[wasm_bindgen]
pub fn estimate_times(r1_ohm: f64, r2_ohm: f64, c1_nf: f64, c2_nf: f64) -> Vec<f64> {
    let params = CircuitParameters::from_bench_units(r1_ohm, r2_ohm, c1_nf, c2_nf);
    let estimate = estimate::estimate_times(&params);
    vec![estimate.front_time_micros(), estimate.tail_time_micros()]
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
