//! Error type for PDF reading and rasterization.

use std::fmt;

/// Fatal errors at the page-text boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// I/O error reading the document.
    Io(String),
    /// The bytes are not a readable PDF.
    Parse(String),
    /// A page index past the end of the document.
    PageOutOfBounds {
        /// Requested 0-based page index.
        index: usize,
        /// Number of pages in the document.
        page_count: usize,
    },
    /// The page's text layer could not be decoded.
    Text(String),
    /// The page could not be rasterized for recognition.
    Raster(String),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::Io(msg) => write!(f, "I/O error: {msg}"),
            DocumentError::Parse(msg) => write!(f, "parse error: {msg}"),
            DocumentError::PageOutOfBounds { index, page_count } => {
                write!(f, "page index {index} out of bounds ({page_count} pages)")
            }
            DocumentError::Text(msg) => write!(f, "text extraction error: {msg}"),
            DocumentError::Raster(msg) => write!(f, "raster error: {msg}"),
        }
    }
}

impl std::error::Error for DocumentError {}

impl From<std::io::Error> for DocumentError {
    fn from(err: std::io::Error) -> Self {
        DocumentError::Io(err.to_string())
    }
}
