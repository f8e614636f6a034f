//! Configuration for layered DAG generation.

use crate::error::GraphError;

/// Configuration for the layered DAG generator.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use styx_graph::DagConfig;
///
/// let config = DagConfig::new()
///     .with_layer_sizes(vec![2, 3, 2])
///     .with_seed(7);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct DagConfig {
    layer_sizes: Vec<usize>,
    seed: u64,
    latency_range: (f64, f64),
}

impl DagConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: three layers of four nodes, `seed = 42`, latencies drawn
    /// uniformly from `[0.2, 0.8)`.
    pub fn new() -> Self {
        Self {
            layer_sizes: vec![4, 4, 4],
            seed: 42,
            latency_range: (0.2, 0.8),
        }
    }

    /// Sets the number of nodes in each layer, first layer first.
    pub fn with_layer_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.layer_sizes = sizes;
        self
    }

    /// Sets the RNG seed. Generation is deterministic per seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the half-open interval node latencies are drawn from.
    pub fn with_latency_range(mut self, lo: f64, hi: f64) -> Self {
        self.latency_range = (lo, hi);
        self
    }

    /// Returns the layer sizes.
    pub fn layer_sizes(&self) -> &[usize] {
        &self.layer_sizes
    }

    /// Returns the RNG seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the latency range.
    pub fn latency_range(&self) -> (f64, f64) {
        self.latency_range
    }

    /// Validates this configuration.
    ///
    /// Checks that there is at least one layer, that no layer is empty, and
    /// that the latency range is finite, non-negative, and non-inverted.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.layer_sizes.is_empty() {
            return Err(GraphError::NoLayers);
        }
        for (index, &size) in self.layer_sizes.iter().enumerate() {
            if size == 0 {
                return Err(GraphError::EmptyLayer { index });
            }
        }
        let (lo, hi) = self.latency_range;
        if !lo.is_finite() || !hi.is_finite() || lo < 0.0 || lo >= hi {
            return Err(GraphError::InvalidLatencyRange { lo, hi });
        }
        Ok(())
    }
}

impl Default for DagConfig {
    fn default() -> Self {
        Self::new()
    }
}
