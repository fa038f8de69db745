//! Run configuration.

use std::path::PathBuf;

/// Lowest acceptable recognition resolution.
pub const MIN_OCR_DPI: u32 = 150;
/// Highest acceptable recognition resolution.
pub const MAX_OCR_DPI: u32 = 300;

/// Options controlling one validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Resolution for the recognition fallback raster (default: 300).
    ///
    /// Higher DPI improves recognition at proportionally higher latency
    /// and memory; values are clamped into 150–300 at use.
    pub ocr_dpi: u32,
    /// Directory receiving report artifacts (default: `exports`).
    pub export_dir: PathBuf,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            ocr_dpi: MAX_OCR_DPI,
            export_dir: PathBuf::from("exports"),
        }
    }
}

impl RunOptions {
    /// The configured DPI, clamped into the acceptable range.
    pub fn clamped_dpi(&self) -> u32 {
        self.ocr_dpi.clamp(MIN_OCR_DPI, MAX_OCR_DPI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let opts = RunOptions::default();
        assert_eq!(opts.ocr_dpi, 300);
        assert_eq!(opts.export_dir, PathBuf::from("exports"));
    }

    #[test]
    fn dpi_is_clamped_into_range() {
        let mut opts = RunOptions::default();
        opts.ocr_dpi = 72;
        assert_eq!(opts.clamped_dpi(), 150);
        opts.ocr_dpi = 1200;
        assert_eq!(opts.clamped_dpi(), 300);
        opts.ocr_dpi = 200;
        assert_eq!(opts.clamped_dpi(), 200);
    }
}
