//! # Reseña: Review Sentiment Classification & Aggregation
//!
//! Reseña classifies short free-text reviews into three sentiment categories
//! from a continuous polarity score, then reduces the labeled stream into a
//! statistical summary suitable for reporting (console text, pie chart, CSV).
//!
//! ## Design Principles
//!
//! - **One pass**: normalize → score → classify → aggregate, single-threaded,
//!   O(1) accumulator state beyond the retained records
//! - **Pluggable scoring**: anything implementing [`score::PolarityScorer`]
//!   satisfies the scorer contract; the built-in lexicon scorer is the default
//! - **Local recovery**: malformed rows and scorer failures are skipped and
//!   logged, never fatal; only an unreadable input file aborts a run
//!
//! ## Example Usage
//!
//! ```rust
//! use resena::pipeline::ReviewPipeline;
//! use resena::Sentiment;
//!
//! let pipeline = ReviewPipeline::with_default_scorer();
//! let report = pipeline.process(vec![
//!     "Loved this place, amazing food!".to_string(),
//!     "Terrible service, awful crust.".to_string(),
//! ]);
//!
//! assert_eq!(report.summary.total_count, 2);
//! assert_eq!(report.records[0].sentiment, Sentiment::Positive);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod error;
pub mod input;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod score;

pub use aggregate::{SentimentAggregator, SentimentSummary};
pub use classify::{Sentiment, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use config::RunConfig;
pub use error::{Error, Result};
pub use pipeline::{ReviewPipeline, ReviewRecord, RunReport};
