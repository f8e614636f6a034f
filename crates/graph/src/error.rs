//! Error types for the styx-graph crate.

/// Error type for all fallible operations in the styx-graph crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GraphError {
    /// Returned when the configuration lists no layers.
    #[error("layer list is empty: need at least one layer")]
    NoLayers,

    /// Returned when a layer has zero nodes.
    #[error("layer {index} is empty: every layer needs at least one node")]
    EmptyLayer {
        /// 0-based layer index.
        index: usize,
    },

    /// Returned when the latency range is non-finite, inverted, or negative.
    #[error("invalid latency range [{lo}, {hi}): must be finite, non-negative, and lo < hi")]
    InvalidLatencyRange {
        /// Lower bound of the range.
        lo: f64,
        /// Upper bound of the range.
        hi: f64,
    },
}
