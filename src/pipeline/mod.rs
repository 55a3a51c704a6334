//! The single-pass review pipeline
//!
//! For each input row: normalize → score → classify, then fold the labeled
//! record into the streaming aggregate. One synchronous pass, no shared
//! mutable state, no branching beyond per-record recovery: a scorer
//! failure drops that record with a warning and the run continues.

mod progress;

pub use progress::{ConsoleProgress, NoProgress, ProgressObserver};

use crate::aggregate::{SentimentAggregator, SentimentSummary};
use crate::classify::Sentiment;
use crate::config::RunConfig;
use crate::error::Result;
use crate::input::{self, load_reviews};
use crate::normalize::clean_text;
use crate::score::{LexiconScorer, PolarityScorer};
use serde::Serialize;
use tracing::{info, warn};

/// One fully classified review
///
/// Created once per input row and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewRecord {
    /// Review text exactly as read from the input file
    pub raw_text: String,
    /// Normalized text that was handed to the scorer
    pub cleaned_text: String,
    /// Scorer output in `[-1.0, 1.0]`
    pub polarity: f64,
    /// Label derived from the polarity
    pub sentiment: Sentiment,
}

/// Everything a finished run produces
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Classified records in input order, for export
    pub records: Vec<ReviewRecord>,
    /// Finalized aggregate over all classified records
    pub summary: SentimentSummary,
    /// Input rows dropped before scoring (missing review cell)
    pub skipped_rows: u64,
    /// Records dropped because the scorer rejected them
    pub scorer_failures: u64,
}

/// Wires normalizer, scorer, classifier, and aggregator into one pass
pub struct ReviewPipeline<S> {
    scorer: S,
}

impl ReviewPipeline<LexiconScorer> {
    /// Pipeline backed by the built-in lexicon scorer
    #[must_use]
    pub fn with_default_scorer() -> Self {
        Self::new(LexiconScorer::new())
    }
}

impl<S: PolarityScorer> ReviewPipeline<S> {
    /// Pipeline backed by any scorer implementation
    pub const fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Process an in-memory sequence of raw reviews
    ///
    /// Row order defines processing order but does not affect the summary.
    pub fn process<I>(&self, reviews: I) -> RunReport
    where
        I: IntoIterator<Item = String>,
    {
        self.process_observed(reviews, &NoProgress)
    }

    /// Process raw reviews, notifying a progress observer per record
    pub fn process_observed<I>(&self, reviews: I, observer: &dyn ProgressObserver) -> RunReport
    where
        I: IntoIterator<Item = String>,
    {
        let reviews: Vec<String> = reviews.into_iter().collect();
        observer.on_start(reviews.len() as u64);

        let mut aggregator = SentimentAggregator::new();
        let mut records = Vec::with_capacity(reviews.len());
        let mut scorer_failures = 0u64;

        for raw_text in reviews {
            let cleaned_text = clean_text(&raw_text);
            let polarity = match self.scorer.score(&cleaned_text) {
                Ok(polarity) => polarity,
                Err(e) => {
                    scorer_failures += 1;
                    warn!(review = %input::preview(&raw_text), "scorer rejected review: {e}");
                    continue;
                }
            };

            let sentiment = Sentiment::from_polarity(polarity);
            aggregator.observe(sentiment, polarity);

            let record = ReviewRecord {
                raw_text,
                cleaned_text,
                polarity,
                sentiment,
            };
            info!(
                review = %input::preview(&record.raw_text),
                sentiment = %record.sentiment,
                polarity = record.polarity,
                "classified"
            );
            observer.on_record(&record);
            records.push(record);
        }

        observer.on_finish();

        RunReport {
            summary: aggregator.finalize(),
            records,
            skipped_rows: 0,
            scorer_failures,
        }
    }

    /// Load a delimited file and process its review column
    ///
    /// # Errors
    /// Returns an error when the input file is missing, unreadable, or has
    /// no `Review` column. Per-row problems are recovered locally and
    /// counted in the report instead.
    pub fn run(&self, config: &RunConfig, observer: &dyn ProgressObserver) -> Result<RunReport> {
        let batch = load_reviews(&config.data_path, config.delimiter)?;
        info!(
            path = %config.data_path.display(),
            rows = batch.reviews.len(),
            skipped = batch.skipped_rows,
            "loaded input"
        );

        let mut report = self.process_observed(batch.reviews, observer);
        report.skipped_rows = batch.skipped_rows;
        Ok(report)
    }
}
