//! Run configuration
//!
//! One explicit configuration object per run invocation, passed into the
//! components that need it. There is no module-level state: a second run
//! with a different configuration shares nothing with the first.

use std::path::{Path, PathBuf};

/// Default input path when the CLI gives none
pub const DEFAULT_DATA_PATH: &str = "Restaurant_Reviews.tsv";

/// Default chart output filename
pub const DEFAULT_CHART_FILENAME: &str = "sentiment_pie_chart.png";

/// Default run-log filename
pub const DEFAULT_LOG_FILENAME: &str = "resena.log";

/// Configuration for a single run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Input file holding the header row and one review per data row
    pub data_path: PathBuf,
    /// Directory receiving the CSV export, chart, and log
    pub out_dir: PathBuf,
    /// Field delimiter of the input file
    pub delimiter: u8,
    /// Chart output filename inside `out_dir`
    pub chart_filename: String,
    /// Log filename inside `out_dir`
    pub log_filename: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            out_dir: PathBuf::from("."),
            delimiter: b'\t',
            chart_filename: DEFAULT_CHART_FILENAME.to_string(),
            log_filename: DEFAULT_LOG_FILENAME.to_string(),
        }
    }
}

impl RunConfig {
    /// Configuration with defaults for everything but the input path
    ///
    /// The delimiter is inferred from the extension: `.csv` reads as
    /// comma-separated, anything else as tab-separated.
    #[must_use]
    pub fn for_data_path<P: Into<PathBuf>>(path: P) -> Self {
        let data_path = path.into();
        let delimiter = infer_delimiter(&data_path);
        Self {
            data_path,
            delimiter,
            ..Self::default()
        }
    }

    /// Set the output directory
    #[must_use]
    pub fn with_out_dir<P: Into<PathBuf>>(mut self, out_dir: P) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    /// Set the field delimiter
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Full path of the chart output
    #[must_use]
    pub fn chart_path(&self) -> PathBuf {
        self.out_dir.join(&self.chart_filename)
    }

    /// Full path of the run log
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.out_dir.join(&self.log_filename)
    }
}

/// Infer a field delimiter from a path's extension
#[must_use]
pub fn infer_delimiter(path: &Path) -> u8 {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => b',',
        _ => b'\t',
    }
}
