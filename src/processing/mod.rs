//! Address accounting over a list of networks.
//!
//! - [`aggregate`] - per-class running totals
//! - [`lines`] - line by line orchestration with progress output

mod aggregate;
mod lines;

// Re-export public types and functions
pub use aggregate::{Aggregator, Bucket, Summary};
pub use lines::{count_networks, is_ignored, process_lines, ErrorPolicy, Outcome, SkippedLine};
