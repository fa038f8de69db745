//! lotcheck: extract and validate quality-assurance fields from
//! multi-page traceability paperwork.
//!
//! This is the facade crate that ties the pieces together:
//!
//! - **lotcheck-core**: checklists, extraction, and validation logic
//! - **lotcheck-pdf**: per-page text layers and rasters
//! - **lotcheck-report**: CSV/XLSX/PNG artifact writers
//! - this crate: the OCR boundary, the page text provider with its
//!   recognition fallback, the progress registry, and the run
//!   orchestrator
//!
//! # Example
//!
//! ```ignore
//! let registry = ProgressRegistry::new();
//! let runner = Runner::new(registry.clone(), Arc::new(NullRecognizer), RunOptions::default());
//! let key = registry.create();
//! let summary = runner.run(Path::new("lot_paperwork.pdf"), &key)?;
//! println!("{} anomalies", summary.report.anomaly_count());
//! ```

pub use lotcheck_core;
pub use lotcheck_pdf;
pub use lotcheck_report;

pub use lotcheck_core::{
    Anomaly, Checklist, Issue, Location, PresenceTally, RangeRule, ValidationProfile,
    ValidationReport,
};

mod error;
pub mod ocr;
mod options;
mod provider;
mod registry;
mod runner;

pub use error::EngineError;
pub use ocr::{NullRecognizer, OcrError, TesseractCli, TextRecognizer};
pub use options::{MAX_OCR_DPI, MIN_OCR_DPI, RunOptions};
pub use provider::PageTextProvider;
pub use registry::{ProgressRegistry, RunState};
pub use runner::{ArtifactSet, RunSummary, Runner, artifact_paths};
