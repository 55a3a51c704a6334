//! Reporters over a finished run
//!
//! Three render targets for one [`SentimentSummary`](crate::SentimentSummary):
//! console text, a pie chart image, and delimited/JSON file exports. All
//! of them are formatting glue; none feeds back into classification or
//! aggregation.

mod chart;
mod console;
mod csv;

pub use chart::render_pie_chart;
pub use console::render_summary;
pub use csv::{export_records, write_summary_json};
