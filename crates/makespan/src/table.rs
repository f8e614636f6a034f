//! Timing table parsing and per-case makespan aggregation.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::MakespanError;

/// One case's raw stage timings, as read from the table.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseTiming {
    case_id: String,
    times: Vec<f64>,
    t_agg: f64,
}

impl CaseTiming {
    /// Case identifier from the `case_id` column.
    pub fn case_id(&self) -> &str {
        &self.case_id
    }

    /// Per-stage timings, in column order. Never empty.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Final aggregation cost (`t_agg` column, 0.0 when absent).
    pub fn t_agg(&self) -> f64 {
        self.t_agg
    }

    /// Reduces this case to its two makespan aggregates.
    ///
    /// `t_chain` is the sum of the stage timings (stages run back to back);
    /// `t_graph` is the maximum stage timing plus the aggregation cost
    /// (stages fan out in parallel, then a final merge runs).
    pub fn aggregate(&self) -> CaseMakespan {
        let t_chain = self.times.iter().sum();
        let t_graph = self.times.iter().cloned().fold(f64::NEG_INFINITY, f64::max) + self.t_agg;
        CaseMakespan {
            case_id: self.case_id.clone(),
            t_chain,
            t_graph,
        }
    }
}

/// The two scalar aggregates for one case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseMakespan {
    /// Case identifier.
    pub case_id: String,
    /// Sequential (chained) makespan: sum of stage timings.
    pub t_chain: f64,
    /// Parallel (fanned-out) makespan: max stage timing plus aggregation.
    pub t_graph: f64,
}

/// Parses a timing table from CSV text.
///
/// The header must contain a `case_id` column. Timing columns are those
/// whose name starts with `t`, except the optional `t_agg` column; at least
/// one must be present. Blank lines are skipped. Non-timing columns other
/// than `case_id` are ignored.
pub fn parse_table(text: &str) -> Result<Vec<CaseTiming>, MakespanError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim_end_matches('\r')))
        .filter(|(_, l)| !l.trim().is_empty());

    let (_, header_line) = lines.next().ok_or(MakespanError::EmptyTable)?;
    let header: Vec<&str> = header_line.split(',').map(str::trim).collect();

    let case_idx = header
        .iter()
        .position(|&h| h == "case_id")
        .ok_or(MakespanError::MissingColumn { name: "case_id" })?;
    let agg_idx = header.iter().position(|&h| h == "t_agg");
    let time_idxs: Vec<usize> = header
        .iter()
        .enumerate()
        .filter(|&(i, h)| h.starts_with('t') && Some(i) != agg_idx)
        .map(|(i, _)| i)
        .collect();
    if time_idxs.is_empty() {
        return Err(MakespanError::NoTimingColumns);
    }

    let mut cases = Vec::new();
    for (line, row) in lines {
        let fields: Vec<&str> = row.split(',').map(str::trim).collect();
        if fields.len() != header.len() {
            return Err(MakespanError::RaggedRow {
                line,
                expected: header.len(),
                got: fields.len(),
            });
        }

        let parse = |idx: usize| -> Result<f64, MakespanError> {
            fields[idx]
                .parse::<f64>()
                .map_err(|_| MakespanError::InvalidValue {
                    line,
                    column: header[idx].to_string(),
                    value: fields[idx].to_string(),
                })
        };

        let times = time_idxs
            .iter()
            .map(|&i| parse(i))
            .collect::<Result<Vec<f64>, _>>()?;
        let t_agg = match agg_idx {
            Some(i) => parse(i)?,
            None => 0.0,
        };

        cases.push(CaseTiming {
            case_id: fields[case_idx].to_string(),
            times,
            t_agg,
        });
    }

    debug!(n_cases = cases.len(), n_stages = time_idxs.len(), "parsed timing table");
    Ok(cases)
}

/// Reads and parses a timing table from a file.
pub fn read_table(path: &Path) -> Result<Vec<CaseTiming>, MakespanError> {
    let text = std::fs::read_to_string(path).map_err(|source| MakespanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(&text)
}
