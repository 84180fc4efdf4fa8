//! # tally CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tally_cli::increment::{run_increment, IncrementArgs};
use tally_cli::regions::{run_regions, RegionsArgs};
use tally_cli::run::{run_scenario_file, RunArgs};
use tally_cli::validate::{run_validate, ValidateArgs};

/// Election tally toolchain.
///
/// Runs election scenarios, sums region trees, updates tallies, and screens
/// voter records.
#[derive(Parser, Debug)]
#[command(name = "tally", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a scenario file through an election and print the standings.
    Run(RunArgs),

    /// Sum the votes in a region tree file.
    Regions(RegionsArgs),

    /// Add one vote for a candidate to a tally file and print the result.
    Increment(IncrementArgs),

    /// Check voter records against validation rules.
    Validate(ValidateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Run(args) => run_scenario_file(&args),
        Commands::Regions(args) => run_regions(&args),
        Commands::Increment(args) => run_increment(&args),
        Commands::Validate(args) => run_validate(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
