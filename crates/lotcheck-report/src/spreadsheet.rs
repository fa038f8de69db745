//! Styled XLSX rendering of the anomaly table.
//!
//! Mirrors the CSV table with a bold header, a named table region
//! spanning exactly the data rows, banded-row styling, and column
//! widths auto-sized to the longest value per column.

use std::path::Path;

use lotcheck_core::ValidationReport;
use rust_xlsxwriter::{Format, Table, TableColumn, TableStyle, Workbook};

use crate::error::ReportError;

const HEADERS: [&str; 3] = ["Location", "Field", "Issue"];
const WIDTH_PADDING: f64 = 2.0;

/// Write the styled spreadsheet artifact.
pub fn write_summary_xlsx(path: &Path, report: &ValidationReport) -> Result<(), ReportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("QA Anomalies")?;

    let rows: Vec<[String; 3]> = report
        .anomalies
        .iter()
        .map(|a| {
            [
                a.location.to_string(),
                a.field.clone(),
                a.issue.to_string(),
            ]
        })
        .collect();

    for (row_index, row) in rows.iter().enumerate() {
        for (col_index, value) in row.iter().enumerate() {
            worksheet.write_string((row_index + 1) as u32, col_index as u16, value)?;
        }
    }

    let bold = Format::new().set_bold();
    let columns: Vec<TableColumn> = HEADERS
        .iter()
        .map(|h| TableColumn::new().set_header(*h).set_header_format(&bold))
        .collect();
    let table = Table::new()
        .set_name("AnomalyTable")
        .set_style(TableStyle::Medium9)
        .set_columns(&columns);

    // A worksheet table needs at least one data row; an anomaly-free
    // report keeps a single blank row under the header.
    let data_rows = rows.len().max(1) as u32;
    worksheet.add_table(0, 0, data_rows, 2, &table)?;

    for col_index in 0..HEADERS.len() {
        let longest = rows
            .iter()
            .map(|row| row[col_index].chars().count())
            .chain(std::iter::once(HEADERS[col_index].len()))
            .max()
            .unwrap_or(0);
        worksheet.set_column_width(col_index as u16, longest as f64 + WIDTH_PADDING)?;
    }

    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotcheck_core::{PageRecord, ValidationProfile, aggregate};

    fn report_with_anomalies() -> ValidationReport {
        let profile = ValidationProfile::aerospace_lot();
        let mut page = PageRecord::new();
        page.insert("Part Number", "12345");
        aggregate(&profile, &[page])
    }

    #[test]
    fn writes_xlsx_container() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        write_summary_xlsx(&path, &report_with_anomalies()).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        // XLSX is a ZIP container.
        assert_eq!(&bytes[..2], b"PK");
        assert!(bytes.len() > 500);
    }

    #[test]
    fn empty_report_still_produces_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");
        let profile = ValidationProfile::aerospace_lot();
        write_summary_xlsx(&path, &aggregate(&profile, &[])).unwrap();
        assert!(path.exists());
    }
}
