use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// tsim time-series simulator.
#[derive(Parser)]
#[command(
    name = "tsim",
    version,
    about = "ARIMA and blended time-series simulator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Simulate sample paths and write them as JSON.
    Simulate(SimulateArgs),
    /// Simulate sample paths and print their autocorrelation table.
    Sacf(SacfArgs),
}

/// Arguments for the `simulate` subcommand.
#[derive(clap::Args)]
pub struct SimulateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "tsim.toml")]
    pub config: PathBuf,

    /// Override path length from config.
    #[arg(short)]
    pub n: Option<usize>,

    /// Override number of paths from config.
    #[arg(long = "n-sim")]
    pub n_sim: Option<usize>,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output JSON path (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `sacf` subcommand.
#[derive(clap::Args)]
pub struct SacfArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "tsim.toml")]
    pub config: PathBuf,

    /// Override path length from config.
    #[arg(short)]
    pub n: Option<usize>,

    /// Override number of paths from config.
    #[arg(long = "n-sim")]
    pub n_sim: Option<usize>,

    /// Override `[sacf].max_lag` from config.
    #[arg(short = 'k', long)]
    pub lags: Option<usize>,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}
