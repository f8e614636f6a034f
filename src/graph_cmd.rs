//! Graph command: generate a random layered DAG.

use anyhow::{Context, Result};
use styx_graph::{DagConfig, generate};
use tracing::{info, info_span};

use crate::cli::GraphArgs;

/// Generate a layered DAG and print its edges and latencies.
pub fn run(args: GraphArgs) -> Result<()> {
    let _cmd = info_span!("graph").entered();

    let config = DagConfig::new()
        .with_layer_sizes(args.nodes_per_layer.clone())
        .with_seed(args.seed);
    let dag = generate(&config).context("failed to generate layered DAG")?;
    info!(
        n_nodes = dag.n_nodes(),
        n_edges = dag.edges().len(),
        seed = args.seed,
        "generated layered DAG"
    );

    println!("edges: {:?}", dag.edges());
    let rounded: Vec<f64> = dag
        .latencies()
        .iter()
        .map(|l| (l * 1000.0).round() / 1000.0)
        .collect();
    println!("latencies: {rounded:?}");

    if let Some(out) = &args.output {
        let json = serde_json::to_string_pretty(&dag).context("failed to serialize graph")?;
        std::fs::write(out, json)
            .with_context(|| format!("failed to write graph: {}", out.display()))?;
        info!(path = %out.display(), "graph written");
    }
    Ok(())
}
