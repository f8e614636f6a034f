//! Error types for the styx-makespan crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the styx-makespan crate.
#[derive(Debug, thiserror::Error)]
pub enum MakespanError {
    /// Returned when the table has no header line.
    #[error("timing table is empty")]
    EmptyTable,

    /// Returned when a required column is missing from the header.
    #[error("missing required column '{name}'")]
    MissingColumn {
        /// Name of the missing column.
        name: &'static str,
    },

    /// Returned when the header has no timing columns at all.
    #[error("no timing columns found (expected columns named t1, t2, ...)")]
    NoTimingColumns,

    /// Returned when a data row has a different field count than the header.
    #[error("line {line}: expected {expected} fields, got {got}")]
    RaggedRow {
        /// 1-based line number in the input.
        line: usize,
        /// Field count of the header.
        expected: usize,
        /// Field count of the offending row.
        got: usize,
    },

    /// Returned when a timing field does not parse as a float.
    #[error("line {line}, column '{column}': invalid value '{value}'")]
    InvalidValue {
        /// 1-based line number in the input.
        line: usize,
        /// Name of the offending column.
        column: String,
        /// The unparsable field text.
        value: String,
    },

    /// Returned when the table file cannot be read.
    #[error("failed to read {path}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
