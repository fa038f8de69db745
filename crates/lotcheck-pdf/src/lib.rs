//! lotcheck-pdf: the page-text boundary, backed by `lopdf`.
//!
//! Provides [`PdfDocument`] for opening a document and reading each
//! page's text layer, and a rasterization path that recovers a page's
//! dominant embedded image as PNG bytes for the OCR fallback.
//! Traceability paperwork scans are single full-page images, so the
//! embedded scan *is* the raster; pages with neither text nor an image
//! rasterize to a blank white page.

mod document;
mod error;
mod raster;

pub use document::PdfDocument;
pub use error::DocumentError;
