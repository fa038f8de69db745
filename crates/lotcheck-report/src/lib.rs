//! lotcheck-report: report artifact writers.
//!
//! Renders one run's [`ValidationReport`](lotcheck_core::ValidationReport)
//! as three independent artifacts: a row-oriented CSV table, a styled
//! XLSX spreadsheet, and a presence bar chart rasterized to PNG.
//! Each writer stands alone; a failure in one never corrupts the
//! others.

mod chart;
mod error;
mod spreadsheet;
mod table;

pub use chart::write_presence_chart;
pub use error::ReportError;
pub use spreadsheet::write_summary_xlsx;
pub use table::{write_error_report, write_passthrough_summary, write_summary_csv};
