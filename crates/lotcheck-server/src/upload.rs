//! Upload filename hygiene.

use std::path::Path;

/// Extensions the validate endpoint accepts. PDFs go through the full
/// pipeline; CSV and XLSX uploads are acknowledged without inspection.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["pdf", "csv", "xlsx"];

/// Whether the filename carries an accepted extension.
pub fn allowed_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&e.as_str())
        })
        .unwrap_or(false)
}

/// Whether the upload is a PDF (as opposed to a tabular passthrough).
pub fn is_pdf(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// Reduces a client-supplied filename to a safe basename: directory
/// components are stripped, every character outside `[A-Za-z0-9._-]`
/// becomes `_`, and leading dots are dropped so the result can never
/// name a hidden file or escape the upload directory.
pub fn sanitize_filename(name: &str) -> String {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let trimmed = cleaned.trim_start_matches('.');
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Whether a download name is a plain file name with no traversal.
pub fn safe_download_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_extensions_case_insensitively() {
        assert!(allowed_extension("report.pdf"));
        assert!(allowed_extension("report.PDF"));
        assert!(allowed_extension("data.csv"));
        assert!(allowed_extension("data.xlsx"));
        assert!(!allowed_extension("script.sh"));
        assert!(!allowed_extension("noext"));
    }

    #[test]
    fn detects_pdf_uploads() {
        assert!(is_pdf("lot.pdf"));
        assert!(is_pdf("LOT.Pdf"));
        assert!(!is_pdf("lot.csv"));
    }

    #[test]
    fn sanitize_strips_directories_and_odd_characters() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\temp\\lot.pdf"), "lot.pdf");
        assert_eq!(sanitize_filename("my lot (1).pdf"), "my_lot__1_.pdf");
        assert_eq!(sanitize_filename(".hidden"), "hidden");
        assert_eq!(sanitize_filename("..."), "upload");
    }

    #[test]
    fn sanitized_names_keep_their_extension() {
        assert!(sanitize_filename("weird name!.pdf").ends_with(".pdf"));
    }

    #[test]
    fn download_names_reject_traversal() {
        assert!(safe_download_name("lot_validation_summary.csv"));
        assert!(!safe_download_name("../secrets.txt"));
        assert!(!safe_download_name("a/b.csv"));
        assert!(!safe_download_name("a\\b.csv"));
        assert!(!safe_download_name(""));
    }
}
