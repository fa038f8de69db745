//! Page text acquisition: text layer first, recognition fallback second.

use lotcheck_pdf::PdfDocument;

use crate::error::EngineError;
use crate::ocr::TextRecognizer;

/// Produces the text of a page, preferring the embedded text layer and
/// falling back to rasterization plus recognition when the layer is
/// empty (scanned pages).
pub struct PageTextProvider<'a> {
    recognizer: &'a dyn TextRecognizer,
    dpi: u32,
}

impl<'a> PageTextProvider<'a> {
    pub fn new(recognizer: &'a dyn TextRecognizer, dpi: u32) -> Self {
        Self { recognizer, dpi }
    }

    /// Text for the page at `index` (0-based).
    ///
    /// A page whose text layer is whitespace-only is treated as scanned:
    /// it is rasterized at the configured DPI and handed to the
    /// recognizer. The recognizer's output is returned as-is, including
    /// when it is itself empty.
    pub fn page_text(&self, doc: &PdfDocument, index: usize) -> Result<String, EngineError> {
        let layer = doc.page_text(index)?;
        if !layer.trim().is_empty() {
            return Ok(layer);
        }
        tracing::debug!(page = index + 1, dpi = self.dpi, "empty text layer, rasterizing");
        let png = doc.page_raster_png(index, self.dpi)?;
        Ok(self.recognizer.recognize(&png)?)
    }
}
