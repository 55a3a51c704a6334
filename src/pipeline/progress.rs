//! Progress reporting hooks
//!
//! Progress display is an observer, not a control-flow dependency: the
//! pipeline calls into the observer after each record but never lets it
//! alter ordering, classification, or the aggregate.

use crate::pipeline::ReviewRecord;
use indicatif::{ProgressBar, ProgressStyle};

/// Observer notified as the pipeline advances
///
/// All methods default to no-ops so implementors override only what they
/// display.
pub trait ProgressObserver {
    /// Called once before the first record with the total row count
    fn on_start(&self, total: u64) {
        let _ = total;
    }

    /// Called after each record is classified and aggregated
    fn on_record(&self, record: &ReviewRecord) {
        let _ = record;
    }

    /// Called once after the last record
    fn on_finish(&self) {}
}

/// Observer that displays nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {}

/// Terminal progress bar backed by indicatif
#[derive(Debug, Clone)]
pub struct ConsoleProgress {
    bar: ProgressBar,
}

impl ConsoleProgress {
    /// Create a bar; its length is set by [`ProgressObserver::on_start`]
    #[must_use]
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template(
                "{msg} [{bar:40.cyan/blue}] {pos}/{len} ({elapsed})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message("Processing reviews");
        Self { bar }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for ConsoleProgress {
    fn on_start(&self, total: u64) {
        self.bar.set_length(total);
    }

    fn on_record(&self, _record: &ReviewRecord) {
        self.bar.inc(1);
    }

    fn on_finish(&self) {
        self.bar.finish_with_message("Done");
    }
}
