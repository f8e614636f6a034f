//! Makespan command: reduce a timing table to per-case aggregates.

use anyhow::{Context, Result};
use styx_makespan::read_table;
use tracing::{info, info_span};

use crate::cli::MakespanArgs;

/// Run the makespan reduction and print one CSV line per case.
pub fn run(args: MakespanArgs) -> Result<()> {
    let _cmd = info_span!("makespan").entered();

    let cases = read_table(&args.input)
        .with_context(|| format!("failed to load timing table: {}", args.input.display()))?;
    info!(n_cases = cases.len(), "timing table loaded");

    println!("case_id,t_chain,t_graph");
    for case in &cases {
        let m = case.aggregate();
        println!("{},{:.2},{:.2}", m.case_id, m.t_chain, m.t_graph);
    }
    Ok(())
}
