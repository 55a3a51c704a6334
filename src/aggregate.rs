//! Streaming aggregation of classified reviews
//!
//! A single-pass, O(1)-memory reduction over `(sentiment, polarity)` pairs.
//! The reduction is commutative and associative, so input order never
//! affects the finalized summary (within float tolerance for the mean and
//! standard deviation). Variance uses Welford's streaming update.

use crate::classify::Sentiment;
use serde::{Deserialize, Serialize};

/// Streaming accumulator for per-sentiment counts and polarity statistics
///
/// Feed records with [`observe`](Self::observe), then take the read-only
/// summary once with [`finalize`](Self::finalize).
///
/// # Example
/// ```
/// use resena::{Sentiment, SentimentAggregator};
///
/// let mut agg = SentimentAggregator::new();
/// agg.observe(Sentiment::Positive, 0.6);
/// agg.observe(Sentiment::Negative, -0.35);
///
/// let summary = agg.finalize();
/// assert_eq!(summary.total_count, 2);
/// assert_eq!(summary.positive_count, 1);
/// assert!((summary.mean_polarity - 0.125).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SentimentAggregator {
    count: u64,
    mean: f64,
    m2: f64,
    min: Option<f64>,
    max: Option<f64>,
    positive: u64,
    neutral: u64,
    negative: u64,
}

impl SentimentAggregator {
    /// Create an empty accumulator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one classified record into the running state
    pub fn observe(&mut self, sentiment: Sentiment, polarity: f64) {
        self.count += 1;
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }

        // Welford update
        #[allow(clippy::cast_precision_loss)]
        let n = self.count as f64;
        let delta = polarity - self.mean;
        self.mean += delta / n;
        self.m2 += delta * (polarity - self.mean);

        self.min = Some(self.min.map_or(polarity, |m| m.min(polarity)));
        self.max = Some(self.max.map_or(polarity, |m| m.max(polarity)));
    }

    /// Number of records observed so far
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Finalize into a read-only summary
    ///
    /// An empty accumulator yields zeroed statistics and 0% for every
    /// category rather than a division fault. Sample standard deviation
    /// uses an `n - 1` denominator and is defined as 0.0 when `n <= 1`.
    #[must_use]
    pub fn finalize(&self) -> SentimentSummary {
        #[allow(clippy::cast_precision_loss)]
        let stddev = if self.count > 1 {
            (self.m2 / (self.count - 1) as f64).sqrt()
        } else {
            0.0
        };

        SentimentSummary {
            total_count: self.count,
            positive_count: self.positive,
            neutral_count: self.neutral,
            negative_count: self.negative,
            mean_polarity: if self.count == 0 { 0.0 } else { self.mean },
            min_polarity: self.min.unwrap_or(0.0),
            max_polarity: self.max.unwrap_or(0.0),
            stddev_polarity: stddev,
        }
    }
}

/// Finalized statistics over one run's classified reviews
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    /// Total records folded into the aggregate
    pub total_count: u64,
    /// Records classified Positive
    pub positive_count: u64,
    /// Records classified Neutral
    pub neutral_count: u64,
    /// Records classified Negative
    pub negative_count: u64,
    /// Arithmetic mean of polarities (0.0 for an empty run)
    pub mean_polarity: f64,
    /// Smallest polarity observed (0.0 for an empty run)
    pub min_polarity: f64,
    /// Largest polarity observed (0.0 for an empty run)
    pub max_polarity: f64,
    /// Sample standard deviation, n-1 denominator (0.0 when n <= 1)
    pub stddev_polarity: f64,
}

impl SentimentSummary {
    /// Count for one sentiment category
    #[must_use]
    pub const fn count(&self, sentiment: Sentiment) -> u64 {
        match sentiment {
            Sentiment::Positive => self.positive_count,
            Sentiment::Neutral => self.neutral_count,
            Sentiment::Negative => self.negative_count,
        }
    }

    /// Percentage share for one sentiment category
    ///
    /// A zero-record run yields 0.0 for every category.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self, sentiment: Sentiment) -> f64 {
        if self.total_count == 0 {
            return 0.0;
        }
        self.count(sentiment) as f64 / self.total_count as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(pairs: &[(Sentiment, f64)]) -> SentimentSummary {
        let mut agg = SentimentAggregator::new();
        for &(s, p) in pairs {
            agg.observe(s, p);
        }
        agg.finalize()
    }

    #[test]
    fn test_empty_run_is_defined() {
        let summary = SentimentAggregator::new().finalize();
        assert_eq!(summary.total_count, 0);
        for sentiment in Sentiment::ALL {
            assert_eq!(summary.count(sentiment), 0);
            assert!(summary.percentage(sentiment).abs() < f64::EPSILON);
        }
        assert!(summary.mean_polarity.abs() < f64::EPSILON);
        assert!(summary.min_polarity.abs() < f64::EPSILON);
        assert!(summary.max_polarity.abs() < f64::EPSILON);
        assert!(summary.stddev_polarity.abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_record() {
        let summary = aggregate(&[(Sentiment::Positive, 0.42)]);
        assert_eq!(summary.total_count, 1);
        assert!((summary.mean_polarity - 0.42).abs() < 1e-12);
        assert!((summary.min_polarity - 0.42).abs() < 1e-12);
        assert!((summary.max_polarity - 0.42).abs() < 1e-12);
        assert!(summary.stddev_polarity.abs() < f64::EPSILON);
    }

    #[test]
    fn test_counts_and_percentages() {
        let summary = aggregate(&[
            (Sentiment::Positive, 0.6),
            (Sentiment::Positive, 0.3),
            (Sentiment::Neutral, 0.0),
            (Sentiment::Negative, -0.5),
        ]);
        assert_eq!(summary.total_count, 4);
        assert_eq!(summary.positive_count, 2);
        assert_eq!(summary.neutral_count, 1);
        assert_eq!(summary.negative_count, 1);
        assert!((summary.percentage(Sentiment::Positive) - 50.0).abs() < 1e-12);
        assert!((summary.percentage(Sentiment::Neutral) - 25.0).abs() < 1e-12);
        assert!((summary.percentage(Sentiment::Negative) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_stddev_uses_n_minus_1() {
        // polarities 0.1, 0.3 -> mean 0.2, sample variance 0.02
        let summary = aggregate(&[
            (Sentiment::Neutral, 0.1),
            (Sentiment::Positive, 0.3),
        ]);
        assert!((summary.mean_polarity - 0.2).abs() < 1e-12);
        assert!((summary.stddev_polarity - 0.02_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_min_max_tracking() {
        let summary = aggregate(&[
            (Sentiment::Negative, -0.9),
            (Sentiment::Neutral, 0.05),
            (Sentiment::Positive, 0.7),
        ]);
        assert!((summary.min_polarity - -0.9).abs() < 1e-12);
        assert!((summary.max_polarity - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_order_independent() {
        let forward = aggregate(&[
            (Sentiment::Positive, 0.6),
            (Sentiment::Negative, -0.35),
            (Sentiment::Neutral, 0.02),
        ]);
        let reversed = aggregate(&[
            (Sentiment::Neutral, 0.02),
            (Sentiment::Negative, -0.35),
            (Sentiment::Positive, 0.6),
        ]);
        assert_eq!(forward.total_count, reversed.total_count);
        assert_eq!(forward.positive_count, reversed.positive_count);
        assert!((forward.mean_polarity - reversed.mean_polarity).abs() < 1e-12);
        assert!((forward.stddev_polarity - reversed.stddev_polarity).abs() < 1e-12);
    }

    #[test]
    fn test_summary_serializes() {
        let summary = aggregate(&[(Sentiment::Positive, 0.5)]);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"total_count\":1"));
        let back: SentimentSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
