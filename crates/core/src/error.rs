//! Error types for the aggregation pipeline.

use std::path::PathBuf;

/// Result alias used throughout the pipeline.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors produced while loading, normalizing, or decomposing ride data.
///
/// Load-stage errors are fatal to the dashboard; decomposition errors are
/// not (the affected chart degrades to a placeholder).
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path} as CSV: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: malformed date {value:?} (expected YYYY-MM-DD)")]
    BadDate { row: usize, value: String },

    #[error("row {row}: {column} code {value} is out of range")]
    BadCode {
        row: usize,
        column: &'static str,
        value: u32,
    },

    #[error("{path} contains no data rows")]
    EmptyTable { path: PathBuf },

    #[error(
        "decomposition failed — insufficient series: {len} points, \
         need at least {min} for seasonal window {window}"
    )]
    SeriesTooShort {
        len: usize,
        min: usize,
        window: usize,
    },
}
