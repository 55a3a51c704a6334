//! Console summary rendering

use crate::aggregate::SentimentSummary;
use crate::classify::Sentiment;
use std::fmt::Write;

/// Render the statistical summary as a console-ready text block
///
/// # Example
/// ```
/// use resena::{Sentiment, SentimentAggregator};
/// use resena::report::render_summary;
///
/// let mut agg = SentimentAggregator::new();
/// agg.observe(Sentiment::Positive, 0.6);
/// let text = render_summary(&agg.finalize());
/// assert!(text.contains("Total Reviews: 1"));
/// assert!(text.contains("Positive: 1 reviews (100.0%)"));
/// ```
#[must_use]
pub fn render_summary(summary: &SentimentSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Sentiment Analysis Summary:");
    let _ = writeln!(out, "Total Reviews: {}", summary.total_count);
    for sentiment in Sentiment::ALL {
        let _ = writeln!(
            out,
            "{sentiment}: {} reviews ({:.1}%)",
            summary.count(sentiment),
            summary.percentage(sentiment)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Polarity Statistics:");
    let _ = writeln!(out, "Average Polarity: {:.3}", summary.mean_polarity);
    let _ = writeln!(out, "Min Polarity: {:.3}", summary.min_polarity);
    let _ = writeln!(out, "Max Polarity: {:.3}", summary.max_polarity);
    let _ = writeln!(out, "Std Dev: {:.3}", summary.stddev_polarity);

    out
}
