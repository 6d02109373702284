//! Impulse - Marx Generator Waveform Calculator
//!
//! Computes the double-exponential impulse waveform of a Marx generator
//! equivalent RC network, estimates front/tail times, and sizes shaping
//! resistors for a target impulse.
//!
//! # Usage
//!
//! ```bash
//! impulse simulate --r1 400 --r2 4000 --c1 50 --c2 0.5 --format csv > waveform.csv
//! impulse estimate --r1 400 --r2 4000 --c1 50 --c2 0.5
//! impulse design --t1 1.2 --t2 50 --c1 10 --c2 1000
//! ```

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use impulse_core::{
    error::{ImpulseError, Result},
    estimate::{estimate_times, suggest_resistors},
    export,
    params::{CircuitParameters, TargetSpec, MICRO},
    standard::StandardImpulse,
    waveform::{solve, SolverConfig, TimeSpanPolicy},
    DEFAULT_SAMPLE_COUNT,
};

/// Marx generator impulse waveform calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve the full double-exponential waveform and report its metrics
    Simulate(SimulateArgs),
    /// Estimate T1/T2 with the quick textbook formulas
    Estimate(ComponentArgs),
    /// Suggest R1/R2 for target front and tail times
    Design(DesignArgs),
}

/// Circuit component values in bench units.
#[derive(clap::Args, Debug)]
struct ComponentArgs {
    /// Front resistor R1 in ohms
    #[arg(long, default_value_t = 400.0)]
    r1: f64,

    /// Tail resistor R2 in ohms
    #[arg(long, default_value_t = 4000.0)]
    r2: f64,

    /// Generator capacitance C1 in nanofarads
    #[arg(long, default_value_t = 50.0)]
    c1: f64,

    /// Load capacitance C2 in nanofarads
    #[arg(long, default_value_t = 0.5)]
    c2: f64,
}

impl ComponentArgs {
    fn parameters(&self) -> CircuitParameters {
        CircuitParameters::from_bench_units(self.r1, self.r2, self.c1, self.c2)
    }
}

#[derive(clap::Args, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    components: ComponentArgs,

    /// Number of sample intervals
    #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    samples: usize,

    /// Fixed time span in microseconds (default: 20x time-to-peak)
    #[arg(long)]
    span: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct DesignArgs {
    /// Target front time T1 in microseconds
    #[arg(long, default_value_t = 1.2)]
    t1: f64,

    /// Target tail time T2 in microseconds
    #[arg(long, default_value_t = 50.0)]
    t2: f64,

    /// Known generator capacitance C1 in nanofarads
    #[arg(long, default_value_t = 10.0)]
    c1: f64,

    /// Known load capacitance C2 in picofarads
    #[arg(long, default_value_t = 1000.0)]
    c2: f64,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    /// Human-readable metrics summary
    Text,
    /// Full sample sequence and metrics as JSON
    Json,
    /// Sample sequence as time/voltage CSV
    Csv,
}

fn main() -> Result<()> {
    match Args::parse().command {
        Command::Simulate(args) => run_simulate(args),
        Command::Estimate(args) => run_estimate(args),
        Command::Design(args) => run_design(args),
    }
}

fn run_simulate(args: SimulateArgs) -> Result<()> {
    let params = args.components.parameters();

    let mut config = SolverConfig::new().with_sample_count(args.samples);
    if let Some(span_us) = args.span {
        config = config.with_time_span(TimeSpanPolicy::Fixed(span_us * MICRO));
    }

    let solution = solve(&params, &config);

    match args.format {
        OutputFormat::Text => {
            if solution.is_degenerate() {
                println!(
                    "No waveform: these parameters do not produce a double-exponential impulse."
                );
                return Ok(());
            }

            let metrics = &solution.metrics;
            println!("Peak voltage : {:8.2} %", metrics.peak_voltage);
            println!("Front time T1: {:8.2} µs", metrics.front_time);
            println!("Tail time T2 : {:8.2} µs", metrics.tail_time);
            println!("Efficiency   : {:8.2} %", metrics.efficiency);
            match StandardImpulse::classify(metrics) {
                Some(shape) => println!("Shape        : standard {shape}"),
                None => println!("Shape        : non-standard"),
            }
        }
        OutputFormat::Json => {
            write_output(args.output, |writer| export::write_json(&solution, writer))?;
        }
        OutputFormat::Csv => {
            write_output(args.output, |writer| export::write_csv(&solution, writer))?;
        }
    }

    Ok(())
}

fn run_estimate(args: ComponentArgs) -> Result<()> {
    let estimate = estimate_times(&args.parameters());

    println!("Front time T1: {:8.2} µs", estimate.front_time_micros());
    println!("Tail time T2 : {:8.2} µs", estimate.tail_time_micros());
    Ok(())
}

fn run_design(args: DesignArgs) -> Result<()> {
    let spec = TargetSpec::from_bench_units(args.t1, args.t2, args.c1, args.c2);
    let suggested = suggest_resistors(&spec);

    println!("Front resistor R1: {:10.2} Ω", suggested.r1);
    println!("Tail resistor R2 : {:10.2} Ω", suggested.r2);
    Ok(())
}

/// Run an export closure against a file or stdout.
fn write_output<F>(path: Option<PathBuf>, export: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    match path {
        Some(path) => {
            let mut file = File::create(&path)
                .map_err(|e| ImpulseError::file_write(path.display().to_string(), e))?;
            export(&mut file)
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            export(&mut handle)
        }
    }
}
