//! Complete pipeline: delimited file in, CSV + chart + summary out
//!
//! This example demonstrates:
//! - Writing a small TSV corpus to a scratch directory
//! - Running the file pipeline with a progress bar
//! - Exporting the CSV, summary JSON, and pie chart
//!
//! Run with: cargo run --example complete_pipeline

use chrono::Local;
use resena::config::RunConfig;
use resena::pipeline::{ConsoleProgress, ReviewPipeline};
use resena::report::{export_records, render_pie_chart, render_summary, write_summary_json};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Reseña Complete Pipeline Example ===\n");

    let out_dir = std::env::temp_dir().join("resena_demo");
    std::fs::create_dir_all(&out_dir)?;

    let data_path = out_dir.join("reviews.tsv");
    std::fs::write(
        &data_path,
        "Review\tLiked\n\
         Wow... Loved this place.\t1\n\
         Crust is not good.\t0\n\
         The bread was stale and the soup was bland.\t0\n\
         Great atmosphere, friendly staff, fresh food.\t1\n\
         They have a parking lot.\t1\n",
    )?;
    println!("Wrote sample corpus to {}", data_path.display());

    let config = RunConfig::for_data_path(&data_path).with_out_dir(&out_dir);
    let pipeline = ReviewPipeline::with_default_scorer();
    let report = pipeline.run(&config, &ConsoleProgress::new())?;

    let stamp = Local::now();
    let csv_path = export_records(&report.records, &config.out_dir, stamp)?;
    println!("Results saved to {}", csv_path.display());

    let json_path = out_dir.join("sentiment_summary.json");
    write_summary_json(&report.summary, &json_path)?;
    println!("Summary saved to {}", json_path.display());

    match render_pie_chart(&report.summary, config.chart_path()) {
        Ok(()) => println!("Chart saved to {}", config.chart_path().display()),
        Err(e) => println!("Chart skipped ({e})"),
    }

    println!("\n{}", render_summary(&report.summary));
    Ok(())
}
