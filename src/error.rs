//! Error types for Reseña
//!
//! Clear error messages with actionable guidance. Only input-file failures
//! are fatal to a run; per-record failures are recovered locally by the
//! pipeline and never surface here.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Reseña error types
#[derive(Error, Debug)]
pub enum Error {
    /// Input file not found or unreadable (fatal)
    #[error("Input error: {0}\nCheck that the path exists and is a readable delimited file")]
    Input(String),

    /// Header row does not carry the required review column
    #[error("Missing column: input file must contain a '{0}' column in its header row")]
    MissingColumn(String),

    /// Polarity scorer rejected a text
    #[error("Scorer error: {0}")]
    Score(String),

    /// Chart backend failure
    #[error("Chart error: {0}")]
    Chart(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited-file parse error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Summary serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
