//! Validation run orchestration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use lotcheck_core::{
    FieldExtractor, PageRecord, PatternExtractor, ValidationProfile, ValidationReport, aggregate,
};
use lotcheck_pdf::PdfDocument;
use lotcheck_report::{
    write_error_report, write_passthrough_summary, write_presence_chart, write_summary_csv,
    write_summary_xlsx,
};

use crate::error::EngineError;
use crate::ocr::TextRecognizer;
use crate::options::RunOptions;
use crate::provider::PageTextProvider;
use crate::registry::ProgressRegistry;

/// The set of files a successful run writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    pub summary_csv: PathBuf,
    pub summary_xlsx: PathBuf,
    pub dashboard_png: PathBuf,
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub report: ValidationReport,
    pub artifacts: ArtifactSet,
}

/// Artifact paths for an input file, derived from its stem.
///
/// `report.pdf` in export dir `exports/` yields
/// `exports/report_validation_summary.csv`,
/// `exports/report_validation_summary.xlsx`, and
/// `exports/report_dashboard.png`. Re-running the same input overwrites
/// the same three files.
pub fn artifact_paths(export_dir: &Path, input: &Path) -> ArtifactSet {
    let base = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    ArtifactSet {
        summary_csv: export_dir.join(format!("{base}_validation_summary.csv")),
        summary_xlsx: export_dir.join(format!("{base}_validation_summary.xlsx")),
        dashboard_png: export_dir.join(format!("{base}_dashboard.png")),
    }
}

/// Drives a document through extraction, validation, and reporting,
/// publishing progress to a [`ProgressRegistry`] along the way.
pub struct Runner {
    registry: ProgressRegistry,
    recognizer: Arc<dyn TextRecognizer>,
    options: RunOptions,
    profile: ValidationProfile,
}

impl Runner {
    pub fn new(
        registry: ProgressRegistry,
        recognizer: Arc<dyn TextRecognizer>,
        options: RunOptions,
    ) -> Self {
        Self {
            registry,
            recognizer,
            options,
            profile: ValidationProfile::aerospace_lot(),
        }
    }

    pub fn with_profile(mut self, profile: ValidationProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Validates `input` under `run_id`, which must already be
    /// registered. On success the registry run completes with the
    /// summary CSV name; on failure it fails with the error message and,
    /// when writable, a one-row error report under the same name.
    pub fn run(&self, input: &Path, run_id: &str) -> Result<RunSummary, EngineError> {
        match self.process(input, run_id) {
            Ok(summary) => {
                let name = file_name(&summary.artifacts.summary_csv);
                self.registry.complete(run_id, &name);
                Ok(summary)
            }
            Err(err) => {
                let message = err.to_string();
                tracing::error!(run_id, error = %message, "validation run failed");
                let artifact = self.write_failure_report(input, &message);
                self.registry.fail(run_id, &message, artifact.as_deref());
                Err(err)
            }
        }
    }

    fn process(&self, input: &Path, run_id: &str) -> Result<RunSummary, EngineError> {
        let doc = PdfDocument::open_file(input)?;
        let total = doc.page_count();
        tracing::info!(run_id, pages = total, input = %input.display(), "starting validation run");

        let extractor = PatternExtractor::new(&self.profile.checklist);
        let provider = PageTextProvider::new(self.recognizer.as_ref(), self.options.clamped_dpi());

        let mut records: Vec<PageRecord> = Vec::with_capacity(total);
        for index in 0..total {
            let text = provider.page_text(&doc, index)?;
            records.push(extractor.extract(&text));
            let percent = ((index + 1) * 100 / total.max(1)).min(99) as u8;
            self.registry.set_percent(run_id, percent);
        }

        let report = aggregate(&self.profile, &records);
        let artifacts = self.write_artifacts(input, &report)?;
        tracing::info!(
            run_id,
            anomalies = report.anomaly_count(),
            critical = report.critical_count,
            "run complete"
        );
        Ok(RunSummary { report, artifacts })
    }

    fn write_artifacts(
        &self,
        input: &Path,
        report: &ValidationReport,
    ) -> Result<ArtifactSet, EngineError> {
        std::fs::create_dir_all(&self.options.export_dir)?;
        let artifacts = artifact_paths(&self.options.export_dir, input);
        write_summary_csv(&artifacts.summary_csv, report)?;
        write_summary_xlsx(&artifacts.summary_xlsx, report)?;
        write_presence_chart(&artifacts.dashboard_png, &report.presence, report.page_count)?;
        Ok(artifacts)
    }

    fn write_failure_report(&self, input: &Path, message: &str) -> Option<String> {
        if std::fs::create_dir_all(&self.options.export_dir).is_err() {
            return None;
        }
        let artifacts = artifact_paths(&self.options.export_dir, input);
        match write_error_report(&artifacts.summary_csv, message) {
            Ok(()) => Some(file_name(&artifacts.summary_csv)),
            Err(err) => {
                tracing::warn!(error = %err, "could not write error report");
                None
            }
        }
    }

    /// Accepts an already-tabular upload (CSV or XLSX) without
    /// inspecting it, writing a single-row acknowledgment next to the
    /// usual artifacts.
    pub fn run_passthrough(&self, input: &Path, run_id: &str) -> Result<PathBuf, EngineError> {
        std::fs::create_dir_all(&self.options.export_dir)?;
        let base = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        let out = self.options.export_dir.join(format!("{base}.csv"));
        let original = input
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| base.clone());
        write_passthrough_summary(&out, &original)?;
        self.registry.complete(run_id, &file_name(&out));
        Ok(out)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
