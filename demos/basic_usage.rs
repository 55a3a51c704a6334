//! Basic Reseña usage: classify an in-memory batch of reviews
//!
//! This example demonstrates:
//! - Running the pipeline over strings (no input file)
//! - Reading per-record classifications
//! - Rendering the aggregate summary
//!
//! Run with: cargo run --example basic_usage

use resena::pipeline::ReviewPipeline;
use resena::report::render_summary;

fn main() {
    println!("=== Reseña Basic Usage Example ===\n");

    let reviews = vec![
        "Wow... Loved this place.".to_string(),
        "Crust is not good.".to_string(),
        "The fries were cold and the staff were rude.".to_string(),
        "Absolutely delicious, best pasta in town!".to_string(),
        "It's a restaurant near the station.".to_string(),
    ];

    let pipeline = ReviewPipeline::with_default_scorer();
    let report = pipeline.process(reviews);

    println!("Per-review classification:");
    for record in &report.records {
        println!(
            "  {:8} [{:+.3}] {}",
            record.sentiment.label(),
            record.polarity,
            record.raw_text
        );
    }

    println!("\n{}", render_summary(&report.summary));
}
