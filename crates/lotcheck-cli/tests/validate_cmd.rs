//! Integration tests for the `validate` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("lotcheck").unwrap()
}

/// Create a multi-page PDF. Each page carries the given lines of text.
fn pdf_with_pages(pages: &[&[&str]]) -> Vec<u8> {
    use lopdf::content::{Content, Operation};
    use lopdf::{Object, Stream, dictionary};

    let mut doc = lopdf::Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids = Vec::new();
    for lines in pages {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
            Operation::new("TL", vec![14.into()]),
        ];
        for line in *lines {
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("T*", vec![]));
        }
        operations.push(Operation::new("ET", vec![]));
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

#[test]
fn reports_out_of_range_value() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("lot.pdf");
    std::fs::write(
        &pdf,
        pdf_with_pages(&[&["Part Number: PN-1", "Resistance: 200 ohms"]]),
    )
    .unwrap();

    cmd()
        .arg("validate")
        .arg(&pdf)
        .arg("--no-ocr")
        .arg("--export-dir")
        .arg(dir.path().join("exports"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "page 1: Resistance: value out of range: 200",
        ));
}

#[test]
fn reports_missing_fields_per_page() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("lot.pdf");
    std::fs::write(&pdf, pdf_with_pages(&[&["Part Number: PN-1"]])).unwrap();

    cmd()
        .arg("validate")
        .arg(&pdf)
        .arg("--no-ocr")
        .arg("--export-dir")
        .arg(dir.path().join("exports"))
        .assert()
        .success()
        .stdout(predicate::str::contains("page 1: Lot Number: missing"));
}

#[test]
fn reports_inconsistent_identity_field() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("lot.pdf");
    std::fs::write(
        &pdf,
        pdf_with_pages(&[&["Lot Number: L-1"], &["Lot Number: L-2"]]),
    )
    .unwrap();

    cmd()
        .arg("validate")
        .arg(&pdf)
        .arg("--no-ocr")
        .arg("--export-dir")
        .arg(dir.path().join("exports"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "document-wide: Lot Number: inconsistent across pages",
        ));
}

#[test]
fn writes_all_three_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("report.pdf");
    std::fs::write(&pdf, pdf_with_pages(&[&["Part Number: PN-1"]])).unwrap();
    let exports = dir.path().join("exports");

    cmd()
        .arg("validate")
        .arg(&pdf)
        .arg("--no-ocr")
        .arg("--export-dir")
        .arg(&exports)
        .assert()
        .success();

    assert!(exports.join("report_validation_summary.csv").is_file());
    assert!(exports.join("report_validation_summary.xlsx").is_file());
    assert!(exports.join("report_dashboard.png").is_file());
}

#[test]
fn json_format_emits_anomaly_objects() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = dir.path().join("lot.pdf");
    std::fs::write(
        &pdf,
        pdf_with_pages(&[&["Part Number: PN-1", "Dimension: 1.5 in"]]),
    )
    .unwrap();

    let output = cmd()
        .arg("validate")
        .arg(&pdf)
        .arg("--no-ocr")
        .arg("--format")
        .arg("json")
        .arg("--export-dir")
        .arg(dir.path().join("exports"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["pages"], 1);
    let anomalies = parsed["anomalies"].as_array().unwrap();
    assert!(anomalies.iter().any(|a| {
        a["field"] == "Dimension" && a["issue"] == "value out of range: 1.5 in"
    }));
    assert_eq!(parsed["critical_count"], 1);
}

#[test]
fn missing_file_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    cmd()
        .arg("validate")
        .arg(dir.path().join("absent.pdf"))
        .arg("--no-ocr")
        .arg("--export-dir")
        .arg(dir.path().join("exports"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error validating"));
}
