//! Waveform export for the CLI frontend.
//!
//! Serializes solved waveforms for external chart consumers: JSON for
//! structured pipelines, two-column CSV for spreadsheet plotting. The
//! core produces plain numeric records, so no transformation happens
//! here beyond formatting.

use std::io::Write;

use crate::error::{ImpulseError, Result};
use crate::waveform::WaveformSolution;

/// Write a solved waveform as pretty-printed JSON.
pub fn write_json<W: Write>(solution: &WaveformSolution, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, solution)?;
    Ok(())
}

/// Write a solved waveform as CSV with a `time_us,voltage_pct` header.
pub fn write_csv<W: Write>(solution: &WaveformSolution, mut writer: W) -> Result<()> {
    writeln!(writer, "time_us,voltage_pct").map_err(|e| ImpulseError::export(e.to_string()))?;

    for sample in &solution.samples {
        writeln!(writer, "{},{}", sample.time, sample.voltage)
            .map_err(|e| ImpulseError::export(e.to_string()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CircuitParameters;
    use crate::waveform::{solve, SolverConfig};

    #[test]
    fn test_csv_layout() {
        let solution = solve(&CircuitParameters::default(), &SolverConfig::default());
        let mut buffer = Vec::new();
        write_csv(&solution, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("time_us,voltage_pct"));
        assert_eq!(lines.count(), solution.samples.len());
    }

    #[test]
    fn test_json_round_trip() {
        let solution = solve(&CircuitParameters::default(), &SolverConfig::default());
        let mut buffer = Vec::new();
        write_json(&solution, &mut buffer).unwrap();

        let parsed: WaveformSolution = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, solution);
    }

    #[test]
    fn test_degenerate_solution_exports_cleanly() {
        let solution = WaveformSolution::degenerate();

        let mut csv = Vec::new();
        write_csv(&solution, &mut csv).unwrap();
        assert_eq!(String::from_utf8(csv).unwrap().lines().count(), 1);

        let mut json = Vec::new();
        write_json(&solution, &mut json).unwrap();
        let parsed: WaveformSolution = serde_json::from_slice(&json).unwrap();
        assert!(parsed.is_degenerate());
    }
}
