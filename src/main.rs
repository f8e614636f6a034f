mod cli;
mod config;
mod convert;
mod graph_cmd;
mod logging;
mod makespan_cmd;
mod solve_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Solve(args) => solve_cmd::run(args),
        Command::Makespan(args) => makespan_cmd::run(args),
        Command::Graph(args) => graph_cmd::run(args),
    }
}
