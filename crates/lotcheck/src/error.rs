//! Run-level error type.

use std::fmt;

use lotcheck_pdf::DocumentError;
use lotcheck_report::ReportError;

use crate::ocr::OcrError;

/// A fault that aborts one validation run.
///
/// Per-field and per-page findings are never errors; they fold into
/// the anomaly report. Only whole-run faults (unreadable document,
/// broken raster, failed artifact write) surface here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The document could not be read or rasterized.
    Document(DocumentError),
    /// The recognition backend failed.
    Ocr(OcrError),
    /// An artifact could not be written.
    Report(ReportError),
    /// I/O outside the other categories (export directory, uploads).
    Io(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Document(e) => write!(f, "document error: {e}"),
            EngineError::Ocr(e) => write!(f, "recognition error: {e}"),
            EngineError::Report(e) => write!(f, "report error: {e}"),
            EngineError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Document(e) => Some(e),
            EngineError::Ocr(e) => Some(e),
            EngineError::Report(e) => Some(e),
            EngineError::Io(_) => None,
        }
    }
}

impl From<DocumentError> for EngineError {
    fn from(err: DocumentError) -> Self {
        EngineError::Document(err)
    }
}

impl From<OcrError> for EngineError {
    fn from(err: OcrError) -> Self {
        EngineError::Ocr(err)
    }
}

impl From<ReportError> for EngineError {
    fn from(err: ReportError) -> Self {
        EngineError::Report(err)
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_wraps_source() {
        let err: EngineError = DocumentError::Parse("bad xref".into()).into();
        assert_eq!(err.to_string(), "document error: parse error: bad xref");
    }

    #[test]
    fn source_chain() {
        use std::error::Error;
        let err: EngineError = ReportError::Chart("boom".into()).into();
        assert!(err.source().is_some());
    }
}
