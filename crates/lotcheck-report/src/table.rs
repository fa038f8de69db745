//! CSV artifacts: the anomaly table, the failure-path error report,
//! and the passthrough summary for non-PDF uploads.

use std::path::Path;

use lotcheck_core::ValidationReport;

use crate::error::ReportError;

const HEADER: [&str; 3] = ["Location", "Field", "Issue"];

/// Write the anomaly table: one header row, then one row per anomaly
/// in discovery order.
pub fn write_summary_csv(path: &Path, report: &ValidationReport) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADER)?;
    for anomaly in &report.anomalies {
        writer.write_record([
            anomaly.location.to_string(),
            anomaly.field.clone(),
            anomaly.issue.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the minimal single-row artifact used when a run fails: the
/// result boundary always has something downloadable.
pub fn write_error_report(path: &Path, message: &str) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Location", "Field", "Error"])?;
    writer.write_record(["document-wide", "run", message])?;
    writer.flush()?;
    Ok(())
}

/// Write the one-row summary emitted for non-PDF uploads that skip
/// field validation.
pub fn write_passthrough_summary(path: &Path, filename: &str) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["filename", "status"])?;
    writer.write_record([filename, "validated"])?;
    writer.flush()?;
    Ok(())
}
