//! Sine-wave WAV fixture generator.
//!
//! Writes 16-bit PCM through hound, so the files it produces are an
//! independent check on the repitch decoder.

use clap::Parser;
use hound::{SampleFormat, WavSpec, WavWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "make-test-wav", version, about = "Write a 16-bit PCM sine-wave WAV file")]
struct Cli {
    /// Output WAV file
    output: PathBuf,

    /// Tone frequency in Hz
    #[arg(long, default_value_t = 440.0)]
    frequency: f64,

    /// Length in seconds
    #[arg(long, default_value_t = 2.0)]
    duration: f64,

    /// Sample rate in Hz
    #[arg(long, default_value_t = 44100, value_parser = clap::value_parser!(u32).range(1..))]
    sample_rate: u32,

    /// Channel count; every channel carries the same tone. Capped at 2 because
    /// hound writes an extensible (non-44-byte) header above that.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=2))]
    channels: u16,

    /// Peak level, 0.0 to 1.0 of full scale
    #[arg(long, default_value_t = 1.0)]
    amplitude: f64,
}

fn main() -> ExitCode {
    // Same exit codes as repitch: 0 for --help/--version, 1 for bad arguments
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match write_sine(&cli) {
        Ok(frames) => {
            println!(
                "Created {} - {:.2} s {} Hz sine ({} frames)",
                cli.output.display(),
                cli.duration,
                cli.frequency,
                frames
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to write test file");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn write_sine(cli: &Cli) -> Result<usize, hound::Error> {
    let spec = WavSpec {
        channels: cli.channels,
        sample_rate: cli.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let frames = (cli.duration.max(0.0) * f64::from(cli.sample_rate)) as usize;
    let amplitude = cli.amplitude.clamp(0.0, 1.0);
    let step = 2.0 * std::f64::consts::PI * cli.frequency / f64::from(cli.sample_rate);

    let mut writer = WavWriter::create(&cli.output, spec)?;
    for n in 0..frames {
        let sample = ((step * n as f64).sin() * 32767.0 * amplitude) as i16;
        for _ in 0..cli.channels {
            writer.write_sample(sample)?;
        }
    }
    writer.finalize()?;

    tracing::debug!(frames, channels = cli.channels, "wrote sine");
    Ok(frames)
}
