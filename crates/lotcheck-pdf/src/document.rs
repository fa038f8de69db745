//! Top-level PDF document type for page text and raster access.

use std::path::Path;

use lopdf::{Document, ObjectId};

use crate::error::DocumentError;
use crate::raster;

/// A PDF document opened for per-page text acquisition.
///
/// # Example
///
/// ```ignore
/// let doc = PdfDocument::open_file("lot_paperwork.pdf")?;
/// for index in 0..doc.page_count() {
///     let text = doc.page_text(index)?;
/// }
/// ```
#[derive(Debug)]
pub struct PdfDocument {
    doc: Document,
    /// `(page_number, object_id)` in page order, cached at open.
    pages: Vec<(u32, ObjectId)>,
}

impl PdfDocument {
    /// Open a PDF document from a file path.
    ///
    /// Convenience wrapper around [`PdfDocument::open`] that reads the
    /// file into memory first.
    pub fn open_file(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::open(&bytes)
    }

    /// Open a PDF document from bytes.
    pub fn open(bytes: &[u8]) -> Result<Self, DocumentError> {
        let doc = Document::load_mem(bytes).map_err(|e| DocumentError::Parse(e.to_string()))?;
        let pages = doc.get_pages().into_iter().collect();
        Ok(Self { doc, pages })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Read the text layer of the page at `index` (0-based).
    ///
    /// Image-only pages commonly carry no decodable text content; those
    /// read as an empty string rather than an error, so the caller can
    /// fall through to recognition.
    pub fn page_text(&self, index: usize) -> Result<String, DocumentError> {
        let (page_number, _) = self.page(index)?;
        Ok(self.doc.extract_text(&[page_number]).unwrap_or_default())
    }

    /// Rasterize the page at `index` to PNG bytes at `dpi`.
    ///
    /// Recovers the page's largest embedded image (the scan), scaled to
    /// the requested resolution against the page's MediaBox. A page
    /// with no embedded image yields a blank white raster; recognition
    /// of a blank page returning nothing is a valid outcome.
    pub fn page_raster_png(&self, index: usize, dpi: u32) -> Result<Vec<u8>, DocumentError> {
        let (_, page_id) = self.page(index)?;
        raster::rasterize_page(&self.doc, page_id, dpi)
    }

    fn page(&self, index: usize) -> Result<(u32, ObjectId), DocumentError> {
        self.pages
            .get(index)
            .copied()
            .ok_or(DocumentError::PageOutOfBounds {
                index,
                page_count: self.pages.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{Object, Stream, dictionary};

    /// Build a minimal PDF whose single page draws `text` with Helvetica.
    fn pdf_with_text(text: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });

        let content = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));

        let resources = dictionary! {
            "Font" => dictionary! { "F1" => Object::Reference(font_id) },
        };

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => Object::Reference(content_id),
            "Resources" => resources,
        });

        let pages_id = doc.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        });

        if let Ok(page) = doc.get_object_mut(page_id) {
            if let Ok(dict) = page.as_dict_mut() {
                dict.set("Parent", Object::Reference(pages_id));
            }
        }

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(pages_id),
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn open_valid_pdf_counts_pages() {
        let doc = PdfDocument::open(&pdf_with_text("Part Number: 12345")).unwrap();
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn open_invalid_bytes_returns_parse_error() {
        let err = PdfDocument::open(b"not a pdf").unwrap_err();
        assert!(matches!(err, DocumentError::Parse(_)));
    }

    #[test]
    fn page_text_reads_text_layer() {
        let doc = PdfDocument::open(&pdf_with_text("Part Number: 12345")).unwrap();
        let text = doc.page_text(0).unwrap();
        assert!(text.contains("Part Number: 12345"), "got: {text:?}");
    }

    #[test]
    fn page_index_out_of_bounds() {
        let doc = PdfDocument::open(&pdf_with_text("x")).unwrap();
        let err = doc.page_text(3).unwrap_err();
        assert_eq!(err, DocumentError::PageOutOfBounds { index: 3, page_count: 1 });
    }

    #[test]
    fn open_file_nonexistent_returns_io_error() {
        let err = PdfDocument::open_file("/definitely/not/here.pdf").unwrap_err();
        assert!(matches!(err, DocumentError::Io(_)));
    }

    #[test]
    fn textless_page_rasterizes_to_blank_png() {
        let doc = PdfDocument::open(&pdf_with_text("x")).unwrap();
        let png = doc.page_raster_png(0, 150).unwrap();
        // PNG magic.
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    }
}
