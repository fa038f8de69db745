use std::path::{Path, PathBuf};
use std::sync::Arc;

use lotcheck::ocr::TextRecognizer;
use lotcheck::{NullRecognizer, ProgressRegistry, RunOptions, Runner, TesseractCli};

use crate::cli::OutputFormat;

pub fn run(
    file: &Path,
    export_dir: &Path,
    format: &OutputFormat,
    ocr_dpi: u32,
    no_ocr: bool,
) -> Result<(), i32> {
    let recognizer: Arc<dyn TextRecognizer> = if no_ocr {
        Arc::new(NullRecognizer)
    } else {
        Arc::new(TesseractCli::new())
    };

    let registry = ProgressRegistry::new();
    let options = RunOptions {
        ocr_dpi,
        export_dir: PathBuf::from(export_dir),
    };
    let runner = Runner::new(registry.clone(), recognizer, options);

    let id = registry.create();
    let summary = runner.run(file, &id).map_err(|e| {
        eprintln!("Error validating {}: {e}", file.display());
        1
    })?;
    let report = &summary.report;

    match format {
        OutputFormat::Text => {
            for anomaly in &report.anomalies {
                println!("{anomaly}");
            }
            println!(
                "{} pages, {} anomalies ({} critical)",
                report.page_count,
                report.anomaly_count(),
                report.critical_count
            );
            println!("summary: {}", summary.artifacts.summary_csv.display());
            println!("workbook: {}", summary.artifacts.summary_xlsx.display());
            println!("dashboard: {}", summary.artifacts.dashboard_png.display());
        }
        OutputFormat::Json => {
            let anomalies: Vec<_> = report
                .anomalies
                .iter()
                .map(|a| {
                    serde_json::json!({
                        "location": a.location.to_string(),
                        "field": a.field,
                        "issue": a.issue.to_string(),
                    })
                })
                .collect();
            let obj = serde_json::json!({
                "pages": report.page_count,
                "anomalies": anomalies,
                "critical_count": report.critical_count,
                "artifacts": {
                    "summary_csv": summary.artifacts.summary_csv,
                    "summary_xlsx": summary.artifacts.summary_xlsx,
                    "dashboard_png": summary.artifacts.dashboard_png,
                },
            });
            println!("{}", serde_json::to_string_pretty(&obj).unwrap());
        }
    }

    Ok(())
}
