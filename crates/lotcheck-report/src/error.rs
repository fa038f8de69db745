//! Error type for report emission.

use std::fmt;

/// Errors writing report artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// I/O error writing an artifact.
    Io(String),
    /// The spreadsheet writer failed.
    Spreadsheet(String),
    /// The chart renderer failed.
    Chart(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Io(msg) => write!(f, "I/O error: {msg}"),
            ReportError::Spreadsheet(msg) => write!(f, "spreadsheet error: {msg}"),
            ReportError::Chart(msg) => write!(f, "chart error: {msg}"),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::Io(err.to_string())
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        ReportError::Io(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ReportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ReportError::Spreadsheet(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_variants() {
        assert_eq!(ReportError::Io("disk full".into()).to_string(), "I/O error: disk full");
        assert_eq!(
            ReportError::Chart("encode failed".into()).to_string(),
            "chart error: encode failed"
        );
    }

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: ReportError = io.into();
        assert!(matches!(err, ReportError::Io(_)));
    }
}
