use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use fittrack::summary::Summary;
use fittrack::{dispatch, logging};

/// fittrack - Workout Statistics CLI
///
/// Computes distance, mean speed and calories burned from raw sensor
/// packages and prints a one-line summary per workout.
#[derive(Parser)]
#[command(name = "fittrack")]
#[command(version = "0.1.0")]
#[command(about = "Workout statistics from sensor packages", long_about = None)]
struct Cli {
    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format for summary lines
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Fixed one-line text template
    Text,
    /// One JSON object per line
    Json,
}

/// Sample sensor packages, in emission order
fn sample_packages() -> Vec<(&'static str, Vec<Decimal>)> {
    vec![
        ("SWM", vec![dec!(720), dec!(1), dec!(80), dec!(25), dec!(40)]),
        ("RUN", vec![dec!(15000), dec!(1), dec!(75)]),
        ("WLK", vec![dec!(9000), dec!(1), dec!(75), dec!(180)]),
    ]
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;
    if cli.verbose > 0 {
        let level = logging::level_for_verbosity(cli.verbose);
        eprintln!("{}", format!("Log level: {}", level).dimmed());
    }

    for (code, payload) in sample_packages() {
        let workout = dispatch::read_package(code, &payload)
            .with_context(|| format!("failed to dispatch package {code}"))?;
        let summary = Summary::from_workout(&workout)
            .with_context(|| format!("failed to compute summary for {code}"))?;
        tracing::debug!(code, workout_type = summary.workout_type, "package processed");

        match cli.format {
            OutputFormat::Text => println!("{summary}"),
            OutputFormat::Json => println!("{}", serde_json::to_string(&summary)?),
        }
    }

    Ok(())
}
