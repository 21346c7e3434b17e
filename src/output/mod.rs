//! Output formatting for counting runs.
//!
//! - [`terminal`] - status lines and live progress on the diagnostic stream
//! - [`report`] - final totals in the selected report mode

mod report;
mod terminal;

pub use report::{report, report_skipped, ReportMode};
pub use terminal::{format_heading, format_line, Console, Marker, ERASE_LINE};
