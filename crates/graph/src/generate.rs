//! Seeded layered DAG generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::debug;

use crate::config::DagConfig;
use crate::error::GraphError;

/// A randomly generated layered DAG with per-node latencies.
///
/// Nodes are numbered consecutively, first layer first: layer k occupies the
/// index range `[offset_k, offset_k + size_k)`. Every edge goes from a node
/// in one layer to a node in the next, so the graph is acyclic by
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayeredDag {
    layer_sizes: Vec<usize>,
    edges: Vec<(usize, usize)>,
    latencies: Vec<f64>,
}

impl LayeredDag {
    /// Number of nodes in each layer.
    pub fn layer_sizes(&self) -> &[usize] {
        &self.layer_sizes
    }

    /// Directed edges as `(from, to)` node index pairs.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Synthetic per-node latencies, indexed by node.
    pub fn latencies(&self) -> &[f64] {
        &self.latencies
    }

    /// Total node count.
    pub fn n_nodes(&self) -> usize {
        self.layer_sizes.iter().sum()
    }

    /// Checks acyclicity by Kahn's algorithm.
    ///
    /// Holds by construction for generated graphs; exposed so reports and
    /// tests can assert it rather than trust it.
    pub fn is_acyclic(&self) -> bool {
        let n = self.n_nodes();
        let mut in_degree = vec![0usize; n];
        let mut out: Vec<Vec<usize>> = vec![Vec::new(); n];
        for &(u, v) in &self.edges {
            in_degree[v] += 1;
            out[u].push(v);
        }

        let mut ready: Vec<usize> = (0..n).filter(|&i| in_degree[i] == 0).collect();
        let mut visited = 0;
        while let Some(u) = ready.pop() {
            visited += 1;
            for &v in &out[u] {
                in_degree[v] -= 1;
                if in_degree[v] == 0 {
                    ready.push(v);
                }
            }
        }
        visited == n
    }
}

/// Generates a random layered DAG from a validated configuration.
///
/// Each node in layer k (except the last layer) gets exactly one outgoing
/// edge to a uniformly chosen node in layer k+1, then every node gets a
/// latency drawn uniformly from the configured range, in node order. Both
/// draws come from one `StdRng` seeded with `config.seed()`, so output is
/// fully determined by the configuration.
pub fn generate(config: &DagConfig) -> Result<LayeredDag, GraphError> {
    config.validate()?;

    let sizes = config.layer_sizes();
    let mut rng = StdRng::seed_from_u64(config.seed());

    // Node index where each layer starts.
    let mut offsets = Vec::with_capacity(sizes.len());
    let mut total = 0;
    for &size in sizes {
        offsets.push(total);
        total += size;
    }

    let mut edges = Vec::with_capacity(total - sizes[sizes.len() - 1]);
    for k in 0..sizes.len().saturating_sub(1) {
        for u in offsets[k]..offsets[k] + sizes[k] {
            let v = offsets[k + 1] + rng.random_range(0..sizes[k + 1]);
            edges.push((u, v));
        }
    }

    let (lo, hi) = config.latency_range();
    let latencies: Vec<f64> = (0..total).map(|_| rng.random_range(lo..hi)).collect();

    debug!(
        n_nodes = total,
        n_edges = edges.len(),
        n_layers = sizes.len(),
        "generated layered DAG"
    );
    Ok(LayeredDag {
        layer_sizes: sizes.to_vec(),
        edges,
        latencies,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shape() {
        let dag = generate(&DagConfig::new()).unwrap();
        assert_eq!(dag.n_nodes(), 12);
        // Every node outside the last layer has exactly one outgoing edge.
        assert_eq!(dag.edges().len(), 8);
        assert_eq!(dag.latencies().len(), 12);
    }

    #[test]
    fn edges_cross_into_the_next_layer() {
        let dag = generate(&DagConfig::new().with_layer_sizes(vec![2, 3, 1])).unwrap();
        for &(u, v) in dag.edges() {
            match u {
                0..=1 => assert!((2..=4).contains(&v), "edge ({u}, {v})"),
                2..=4 => assert_eq!(v, 5, "edge ({u}, {v})"),
                _ => panic!("unexpected source node {u}"),
            }
        }
    }

    #[test]
    fn latencies_stay_in_range() {
        let dag = generate(&DagConfig::new().with_latency_range(0.2, 0.8)).unwrap();
        for &l in dag.latencies() {
            assert!((0.2..0.8).contains(&l), "latency {l}");
        }
    }

    #[test]
    fn deterministic_per_seed() {
        let cfg = DagConfig::new().with_seed(7);
        assert_eq!(generate(&cfg).unwrap(), generate(&cfg).unwrap());
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate(&DagConfig::new().with_seed(1)).unwrap();
        let b = generate(&DagConfig::new().with_seed(2)).unwrap();
        // Latencies are 12 uniform draws; collision across seeds would be
        // astronomically unlikely.
        assert_ne!(a.latencies(), b.latencies());
    }

    #[test]
    fn generated_dag_is_acyclic() {
        let dag = generate(&DagConfig::new().with_layer_sizes(vec![3, 5, 2, 4])).unwrap();
        assert!(dag.is_acyclic());
    }

    #[test]
    fn kahn_check_detects_a_cycle() {
        let dag = LayeredDag {
            layer_sizes: vec![2],
            edges: vec![(0, 1), (1, 0)],
            latencies: vec![0.5, 0.5],
        };
        assert!(!dag.is_acyclic());
    }

    #[test]
    fn single_layer_has_no_edges() {
        let dag = generate(&DagConfig::new().with_layer_sizes(vec![5])).unwrap();
        assert!(dag.edges().is_empty());
        assert_eq!(dag.latencies().len(), 5);
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert!(generate(&DagConfig::new().with_layer_sizes(vec![])).is_err());
    }
}
