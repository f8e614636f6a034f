//! Conversion from the TOML model file into solver types.

use anyhow::{Result, bail};
use ndarray::Array2;
use styx_chain::TransitionModel;

use crate::config::ModelFile;

/// Builds a [`TransitionModel`] from a parsed model file.
///
/// Checks that the nested arrays are rectangular and that any state-name
/// lists match the matrix dimensions; shape and stochasticity validation of
/// the matrices themselves is the solver's job.
pub fn build_transition_model(file: &ModelFile) -> Result<TransitionModel> {
    let q_cols = file.q.first().map_or(0, Vec::len);
    let q = to_matrix(&file.q, "q", q_cols)?;
    // With no rows, R's column count comes from the absorbing name list.
    let r_cols = file.r.first().map_or(file.absorbing.len(), Vec::len);
    let r = to_matrix(&file.r, "r", r_cols)?;

    if !file.transient.is_empty() && file.transient.len() != q.nrows() {
        bail!(
            "{} transient state names for {} rows of q",
            file.transient.len(),
            q.nrows()
        );
    }
    if !file.absorbing.is_empty() && file.absorbing.len() != r.ncols() {
        bail!(
            "{} absorbing state names for {} columns of r",
            file.absorbing.len(),
            r.ncols()
        );
    }

    Ok(TransitionModel::new(q, r)?)
}

fn to_matrix(rows: &[Vec<f64>], name: &str, cols: usize) -> Result<Array2<f64>> {
    for (i, row) in rows.iter().enumerate() {
        if row.len() != cols {
            bail!(
                "{name} is ragged: row {i} has {} entries, expected {cols}",
                row.len()
            );
        }
    }
    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    Ok(Array2::from_shape_vec((rows.len(), cols), flat)?)
}
