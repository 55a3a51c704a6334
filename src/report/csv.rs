//! File exports: per-review CSV and summary JSON

use crate::aggregate::SentimentSummary;
use crate::error::Result;
use crate::pipeline::ReviewRecord;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::info;

/// Export classified records as `review,sentiment,polarity` CSV
///
/// One row per review in input order; polarity formatted to exactly three
/// decimal places. The filename is stamped with the supplied generation
/// time as `sentiment_results_YYYYmmdd_HHMMSS.csv`; the written path is
/// returned.
///
/// # Errors
/// Returns an error when the file cannot be created or written.
pub fn export_records(
    records: &[ReviewRecord],
    out_dir: &Path,
    generated_at: DateTime<Local>,
) -> Result<PathBuf> {
    let filename = format!(
        "sentiment_results_{}.csv",
        generated_at.format("%Y%m%d_%H%M%S")
    );
    let path = out_dir.join(filename);

    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record(["review", "sentiment", "polarity"])?;
    for record in records {
        let polarity = format!("{:.3}", record.polarity);
        writer.write_record([
            record.raw_text.as_str(),
            record.sentiment.label(),
            polarity.as_str(),
        ])?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = records.len(), "results saved");
    Ok(path)
}

/// Write the finalized summary as pretty-printed JSON
///
/// # Errors
/// Returns an error when serialization or the file write fails.
pub fn write_summary_json<P: AsRef<Path>>(summary: &SentimentSummary, path: P) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, serde_json::to_vec_pretty(summary)?)?;
    info!(path = %path.display(), "summary saved");
    Ok(())
}
