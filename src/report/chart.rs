//! Pie chart rendering (plotters bitmap backend)

use crate::aggregate::SentimentSummary;
use crate::classify::Sentiment;
use crate::error::{Error, Result};
use plotters::element::Pie;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

const CHART_SIZE: (u32, u32) = (800, 600);
const PIE_RADIUS: f64 = 220.0;

/// Slice sizes in chart order (Positive, Neutral, Negative), as
/// percentage shares
#[must_use]
pub(crate) fn slice_sizes(summary: &SentimentSummary) -> [f64; 3] {
    [
        summary.percentage(Sentiment::Positive),
        summary.percentage(Sentiment::Neutral),
        summary.percentage(Sentiment::Negative),
    ]
}

/// Render the sentiment distribution as a pie chart PNG
///
/// Slices follow the fixed color convention green/yellow/red for
/// Positive/Neutral/Negative. A zero-review summary renders a labeled
/// placeholder instead of dividing by zero.
///
/// # Errors
/// Returns [`Error::Chart`] when the bitmap backend cannot draw or write
/// the file.
pub fn render_pie_chart<P: AsRef<Path>>(summary: &SentimentSummary, path: P) -> Result<()> {
    let path = path.as_ref();
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| Error::Chart(e.to_string()))?;

    let root = root
        .titled("Sentiment Analysis of Reviews", ("sans-serif", 32).into_font())
        .map_err(|e| Error::Chart(e.to_string()))?;

    if summary.total_count == 0 {
        root.draw(&Text::new(
            "No reviews to chart",
            (280, 280),
            ("sans-serif", 28).into_font(),
        ))
        .map_err(|e| Error::Chart(e.to_string()))?;
    } else {
        let sizes = slice_sizes(summary);
        let colors = [GREEN, YELLOW, RED];
        let labels: Vec<String> = Sentiment::ALL.iter().map(ToString::to_string).collect();

        let center = (
            i32::try_from(CHART_SIZE.0 / 2).unwrap_or(400),
            i32::try_from(CHART_SIZE.1 / 2).unwrap_or(300),
        );
        let mut pie = Pie::new(&center, &PIE_RADIUS, &sizes, &colors, &labels);
        pie.start_angle(-90.0);
        pie.label_style(("sans-serif", 24).into_font());
        pie.percentages(("sans-serif", 16).into_font());

        root.draw(&pie).map_err(|e| Error::Chart(e.to_string()))?;
    }

    root.present().map_err(|e| Error::Chart(e.to_string()))?;
    info!(path = %path.display(), "sentiment pie chart saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::SentimentAggregator;

    #[test]
    fn test_slice_sizes_follow_chart_order() {
        let mut agg = SentimentAggregator::new();
        agg.observe(Sentiment::Positive, 0.6);
        agg.observe(Sentiment::Positive, 0.3);
        agg.observe(Sentiment::Neutral, 0.0);
        agg.observe(Sentiment::Negative, -0.5);

        let sizes = slice_sizes(&agg.finalize());
        assert!((sizes[0] - 50.0).abs() < 1e-12);
        assert!((sizes[1] - 25.0).abs() < 1e-12);
        assert!((sizes[2] - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_slice_sizes_sum_to_100() {
        let mut agg = SentimentAggregator::new();
        agg.observe(Sentiment::Positive, 0.9);
        agg.observe(Sentiment::Neutral, 0.05);
        agg.observe(Sentiment::Negative, -0.2);
        let sizes = slice_sizes(&agg.finalize());
        assert!((sizes.iter().sum::<f64>() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary_slices_are_zero() {
        let sizes = slice_sizes(&SentimentAggregator::new().finalize());
        assert_eq!(sizes, [0.0, 0.0, 0.0]);
    }

    // Drawing requires a system font for labels, which headless CI images
    // may lack; run with `cargo test -- --ignored` on a workstation.
    #[test]
    #[ignore = "requires system fonts for label rendering"]
    fn test_renders_pie_png() {
        let mut agg = SentimentAggregator::new();
        agg.observe(Sentiment::Positive, 0.6);
        agg.observe(Sentiment::Negative, -0.35);

        let path = std::env::temp_dir().join(format!("resena_pie_{}.png", std::process::id()));
        render_pie_chart(&agg.finalize(), &path).unwrap();
        assert!(std::fs::metadata(&path).map(|m| m.len() > 0).unwrap_or(false));
        std::fs::remove_file(path).ok();
    }
}
