//! Delimited input loading
//!
//! Reads the review column out of a delimited tabular file with a header
//! row. Rows missing the review cell are skipped with a warning rather
//! than aborting the run; an unreadable file or a header without the
//! review column is fatal.

use crate::error::{Error, Result};
use std::path::Path;
use tracing::warn;

/// Header name of the column holding review text
pub const REVIEW_COLUMN: &str = "Review";

/// Reviews loaded from one input file
#[derive(Debug, Clone)]
pub struct ReviewBatch {
    /// Raw review texts in file order
    pub reviews: Vec<String>,
    /// Data rows dropped because the review cell was missing or unparsable
    pub skipped_rows: u64,
}

/// Load the review column from a delimited file
///
/// The file handle is released when this returns, success or failure.
///
/// # Errors
/// Returns [`Error::Input`] when the file cannot be opened or its header
/// cannot be read, and [`Error::MissingColumn`] when the header row has no
/// `Review` column.
pub fn load_reviews<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<ReviewBatch> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| Error::Input(format!("failed to open {}: {e}", path.display())))?;

    let headers = reader
        .headers()
        .map_err(|e| Error::Input(format!("failed to read header of {}: {e}", path.display())))?;
    let review_idx = headers
        .iter()
        .position(|h| h == REVIEW_COLUMN)
        .ok_or_else(|| Error::MissingColumn(REVIEW_COLUMN.to_string()))?;

    let mut reviews = Vec::new();
    let mut skipped_rows = 0u64;

    for (row, record) in reader.records().enumerate() {
        // Header is line 1; data rows start at line 2
        let line = row + 2;
        match record {
            Ok(record) => match record.get(review_idx) {
                Some(text) => reviews.push(text.to_string()),
                None => {
                    skipped_rows += 1;
                    warn!(line, "row has no {REVIEW_COLUMN} cell; skipping");
                }
            },
            Err(e) => {
                skipped_rows += 1;
                warn!(line, "unparsable row ({e}); skipping");
            }
        }
    }

    Ok(ReviewBatch {
        reviews,
        skipped_rows,
    })
}

/// Width of a one-line preview of a review for logging
const PREVIEW_CHARS: usize = 50;

/// Truncate a review to a short single-line preview for log records
#[must_use]
pub fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().nth(PREVIEW_CHARS).is_some() {
        out.push_str("...");
    }
    out
}
