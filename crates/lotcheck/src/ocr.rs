//! The optical-character-recognition boundary.
//!
//! Recognition is a black box behind [`TextRecognizer`]: given PNG
//! bytes, return text. An empty result is valid; it simply means the
//! page yields no fields. Backends are injected as trait objects so
//! deployments can swap engines without touching the pipeline.

use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

/// Errors from a recognition backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OcrError {
    /// I/O staging the image for the engine.
    Io(String),
    /// The engine itself failed (missing binary, non-zero exit).
    Engine(String),
}

impl fmt::Display for OcrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OcrError::Io(msg) => write!(f, "I/O error: {msg}"),
            OcrError::Engine(msg) => write!(f, "engine error: {msg}"),
        }
    }
}

impl std::error::Error for OcrError {}

impl From<std::io::Error> for OcrError {
    fn from(err: std::io::Error) -> Self {
        OcrError::Io(err.to_string())
    }
}

/// Black-box text recognition over a rasterized page.
pub trait TextRecognizer: Send + Sync {
    /// Recognize text in a PNG image. May return an empty string;
    /// never expected to fail for a valid image.
    fn recognize(&self, png: &[u8]) -> Result<String, OcrError>;
}

/// Recognizer that always returns nothing.
///
/// For text-layer-only deployments and tests: pages without a text
/// layer extract no fields and show up as "missing" anomalies.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRecognizer;

impl TextRecognizer for NullRecognizer {
    fn recognize(&self, _png: &[u8]) -> Result<String, OcrError> {
        Ok(String::new())
    }
}

/// Recognizer shelling out to the `tesseract` command-line binary.
#[derive(Debug, Clone)]
pub struct TesseractCli {
    binary: PathBuf,
    language: String,
}

impl TesseractCli {
    /// Use `tesseract` from `PATH` with English training data.
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from("tesseract"),
            language: "eng".to_string(),
        }
    }

    /// Use a specific tesseract binary.
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Use a specific language code (e.g. `"deu"`).
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

impl Default for TesseractCli {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRecognizer for TesseractCli {
    fn recognize(&self, png: &[u8]) -> Result<String, OcrError> {
        // Tesseract wants a file path; stage the raster in a temp file.
        let mut staged = tempfile::Builder::new()
            .prefix("lotcheck-page-")
            .suffix(".png")
            .tempfile()?;
        staged.write_all(png)?;
        staged.flush()?;

        debug!(image_bytes = png.len(), "running tesseract");
        let output = Command::new(&self.binary)
            .arg(staged.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .output()
            .map_err(|e| {
                OcrError::Engine(format!("failed to launch {}: {e}", self.binary.display()))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::Engine(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
