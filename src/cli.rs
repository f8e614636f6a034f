use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Styx absorbing Markov chain analysis toolkit.
#[derive(Parser)]
#[command(
    name = "styx",
    version,
    about = "Absorbing Markov chain analysis toolkit"
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
    /// Solve absorbing chain models: fundamental matrix, expected steps,
    /// absorption probabilities.
    Solve(SolveArgs),
    /// Reduce a per-case timing table to chain and graph makespans.
    Makespan(MakespanArgs),
    /// Generate a random layered DAG.
    Graph(GraphArgs),
}

/// Arguments for the `solve` subcommand.
#[derive(clap::Args)]
pub struct SolveArgs {
    /// Path to a TOML model file (repeatable; solved independently in order).
    #[arg(short, long = "model", required = true)]
    pub models: Vec<PathBuf>,

    /// Path for a JSON report covering all solved models.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `makespan` subcommand.
#[derive(clap::Args)]
pub struct MakespanArgs {
    /// Path to the timing table CSV.
    #[arg(short, long)]
    pub input: PathBuf,
}

/// Arguments for the `graph` subcommand.
#[derive(clap::Args)]
pub struct GraphArgs {
    /// Comma-separated node counts per layer.
    #[arg(long, default_value = "4,4,4", value_delimiter = ',')]
    pub nodes_per_layer: Vec<usize>,

    /// RNG seed; output is deterministic per seed.
    #[arg(short, long, default_value_t = 42)]
    pub seed: u64,

    /// Path for JSON output of the generated graph.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
