use serde::Deserialize;

/// On-disk TOML description of one absorbing chain model.
///
/// Example:
///
/// ```toml
/// transient = ["start", "work", "review"]
/// absorbing = ["done"]
/// q = [[0.0, 0.6, 0.4], [0.0, 0.0, 0.1], [0.0, 0.2, 0.0]]
/// r = [[0.0], [0.9], [0.8]]
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelFile {
    /// Optional names for the transient states, in Q row order.
    #[serde(default)]
    pub transient: Vec<String>,

    /// Optional names for the absorbing states, in R column order.
    #[serde(default)]
    pub absorbing: Vec<String>,

    /// Transient-to-transient probabilities, row-major.
    pub q: Vec<Vec<f64>>,

    /// Transient-to-absorbing probabilities, row-major.
    pub r: Vec<Vec<f64>>,
}
