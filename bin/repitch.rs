//! `repitch` command-line entry point.
//!
//! `repitch <input> <output> <factor>` pitch shifts a 16-bit PCM WAV file.
//! Exits 0 on success and 1 on any failure.

use clap::Parser;
use repitch::prelude::*;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "repitch",
    version,
    about = "Pitch shift a 16-bit PCM WAV file by linear-interpolation resampling",
    after_help = "Examples:\n  repitch input.wav output.wav 2.0\n  repitch input.wav output.wav 0.5"
)]
struct Cli {
    /// Input WAV file
    input: PathBuf,

    /// Output WAV file (written atomically)
    output: PathBuf,

    /// Pitch factor; output sample i reads source position i / factor
    #[arg(allow_negative_numbers = true)]
    factor: String,

    /// Print duration, peak, RMS and dominant frequency of input and output
    #[arg(long)]
    stats: bool,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "debug",
            (false, _) => "trace",
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help / --version
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        // Usage errors exit 1 like every other failure, not clap's 2
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    init_logging(cli.log_level());

    match run(&cli) {
        Ok(report) => {
            print_report(&report, cli.stats);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "pitch shift failed");
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_logging(default_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn run(cli: &Cli) -> Result<PitchShiftReport> {
    // Reject a bad factor before any file is opened.
    let factor: PitchFactor = cli.factor.parse()?;
    let options = PitchShiftOptions::new(factor).collect_stats(cli.stats);

    tracing::info!(
        input = %cli.input.display(),
        output = %cli.output.display(),
        factor = factor.value(),
        "starting"
    );
    pitch_shift_file(&cli.input, &cli.output, &options)
}

fn print_report(report: &PitchShiftReport, stats: bool) {
    println!(
        "Processed {} samples per channel.",
        report.samples_per_channel
    );
    println!("Pitch factor: {:.2}", report.factor);
    if let Some(path) = &report.output_path {
        println!("Output file: {}", path.display());
    }

    if !stats {
        return;
    }
    for (label, measured) in [
        ("Input", report.input_stats),
        ("Output", report.output_stats),
    ] {
        if let Some(s) = measured {
            println!(
                "{label}: {:.2} s, peak {} ({:.1} dBFS), RMS {:.2}, dominant {:.1} Hz",
                s.duration_seconds(),
                s.peak,
                s.peak_dbfs(),
                s.rms,
                s.dominant_frequency
            );
        }
    }
}
