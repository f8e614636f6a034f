//! Solve command: analyze one or more absorbing chain model files.

use std::path::Path;

use anyhow::{Context, Result};
use ndarray::{Array1, Array2};
use serde::Serialize;
use styx_chain::{Absorption, solve};
use tracing::{info, info_span};

use crate::cli::SolveArgs;
use crate::config::ModelFile;
use crate::convert;

/// JSON-serializable record of one solved model.
#[derive(Debug, Serialize)]
struct ModelReport {
    model: String,
    transient: Vec<String>,
    absorbing: Vec<String>,
    fundamental: Vec<Vec<f64>>,
    expected_steps: Vec<f64>,
    absorption: Vec<Vec<f64>>,
}

/// Run the solve pipeline over every model file, in order.
///
/// The first failing model aborts the run: a malformed chain is a hard stop,
/// not a warning, since its derived figures would be meaningless.
pub fn run(args: SolveArgs) -> Result<()> {
    let _cmd = info_span!("solve").entered();
    let mut reports = Vec::with_capacity(args.models.len());

    for path in &args.models {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read model file: {}", path.display()))?;
        let file: ModelFile = toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML model: {}", path.display()))?;
        let model = convert::build_transition_model(&file)
            .with_context(|| format!("invalid model: {}", path.display()))?;

        info!(
            path = %path.display(),
            n_transient = model.n_transient(),
            n_absorbing = model.n_absorbing(),
            "solving model"
        );
        let result = solve(&model)
            .with_context(|| format!("cannot solve model: {}", path.display()))?;

        print_result(path, &file, &result);
        reports.push(build_report(path, &file, &result));
    }

    if let Some(out) = &args.output {
        let json = serde_json::to_string_pretty(&reports).context("failed to serialize report")?;
        std::fs::write(out, json)
            .with_context(|| format!("failed to write report: {}", out.display()))?;
        info!(path = %out.display(), n_models = reports.len(), "report written");
    }
    Ok(())
}

/// Names for display and the report: the file's, or positional fallbacks.
fn state_names(given: &[String], prefix: &str, count: usize) -> Vec<String> {
    if given.len() == count {
        given.to_vec()
    } else {
        (0..count).map(|i| format!("{prefix}{i}")).collect()
    }
}

fn build_report(path: &Path, file: &ModelFile, result: &Absorption) -> ModelReport {
    ModelReport {
        model: path.display().to_string(),
        transient: state_names(&file.transient, "s", result.fundamental().nrows()),
        absorbing: state_names(&file.absorbing, "a", result.absorption_probs().ncols()),
        fundamental: to_rows(result.fundamental()),
        expected_steps: result.expected_steps().to_vec(),
        absorption: to_rows(result.absorption_probs()),
    }
}

fn to_rows(matrix: &Array2<f64>) -> Vec<Vec<f64>> {
    matrix.outer_iter().map(|row| row.to_vec()).collect()
}

fn print_result(path: &Path, file: &ModelFile, result: &Absorption) {
    let transient = state_names(&file.transient, "s", result.fundamental().nrows());
    let absorbing = state_names(&file.absorbing, "a", result.absorption_probs().ncols());

    println!("model: {}", path.display());
    println!("N (expected visits before absorption):");
    print_matrix(result.fundamental(), &transient);
    println!("t (expected steps to absorption):");
    print_vector(result.expected_steps(), &transient);
    println!("B (absorption probabilities, columns: {}):", absorbing.join(", "));
    print_matrix(result.absorption_probs(), &transient);
}

fn print_matrix(matrix: &Array2<f64>, row_names: &[String]) {
    for (name, row) in row_names.iter().zip(matrix.outer_iter()) {
        let cells: Vec<String> = row.iter().map(|v| format!("{v:>10.4}")).collect();
        println!("  {name:<12} [{}]", cells.join(" "));
    }
}

fn print_vector(vector: &Array1<f64>, row_names: &[String]) {
    for (name, v) in row_names.iter().zip(vector.iter()) {
        println!("  {name:<12} {v:>10.4}");
    }
}
