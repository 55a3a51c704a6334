//! Reseña CLI
//!
//! Classifies the reviews in a delimited input file, prints and logs the
//! aggregate summary, and writes the CSV export, summary JSON, and pie
//! chart into the output directory.
//!
//! ```bash
//! resena --data Restaurant_Reviews.tsv
//! resena --data reviews.csv --out-dir out --log-level debug
//! ```

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use resena::config::{self, RunConfig};
use resena::pipeline::{ConsoleProgress, ReviewPipeline};
use resena::report::{export_records, render_pie_chart, render_summary, write_summary_json};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "resena")]
#[command(version)]
#[command(about = "Sentiment classification and aggregation for free-text reviews", long_about = None)]
struct Cli {
    /// Path to the delimited file containing a Review column
    #[arg(short, long, default_value = config::DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// Directory receiving the CSV export, summary JSON, chart, and log
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        error!("fatal: {err:#}");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = RunConfig::for_data_path(&cli.data).with_out_dir(&cli.out_dir);

    std::fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("failed to create output dir {}", config.out_dir.display()))?;
    init_logging(&config, &cli.log_level)?;

    info!(data = %config.data_path.display(), "starting sentiment run");

    let pipeline = ReviewPipeline::with_default_scorer();
    let progress = ConsoleProgress::new();
    let report = pipeline.run(&config, &progress)?;

    if report.skipped_rows > 0 || report.scorer_failures > 0 {
        info!(
            skipped_rows = report.skipped_rows,
            scorer_failures = report.scorer_failures,
            "some rows were excluded from the aggregate"
        );
    }

    let stamp = Local::now();
    let csv_path = export_records(&report.records, &config.out_dir, stamp)?;
    println!("Results saved to {}", csv_path.display());

    let json_path = config
        .out_dir
        .join(format!("sentiment_summary_{}.json", stamp.format("%Y%m%d_%H%M%S")));
    write_summary_json(&report.summary, &json_path)?;

    if let Err(e) = render_pie_chart(&report.summary, config.chart_path()) {
        // A failed chart does not abort the run; CSV and JSON are already on disk
        error!("chart rendering failed: {e}");
    } else {
        println!("Chart saved to {}", config.chart_path().display());
    }

    let summary_text = render_summary(&report.summary);
    println!("\n{summary_text}");
    info!("run complete");
    Ok(())
}

fn init_logging(config: &RunConfig, level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let log_file = std::fs::File::create(config.log_path())
        .with_context(|| format!("failed to create log file {}", config.log_path().display()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::new(log_file)),
        )
        .init();
    Ok(())
}
