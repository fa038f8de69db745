//! Field extraction via line-oriented pattern matching.
//!
//! Each checklist field is searched case-insensitively as the field
//! name followed by an optional colon/whitespace separator; the rest of
//! that line, trimmed, is the extracted value. The first match wins.
//! This is deliberately textual, not layout-aware; the trait is the
//! seam where a layout- or model-based extractor could be substituted
//! without touching validation.

use regex::Regex;

use crate::checklist::Checklist;
use crate::record::PageRecord;

/// Strategy for turning raw page text into a [`PageRecord`].
pub trait FieldExtractor {
    /// Extract every recognizable checklist field from `text`.
    ///
    /// A field absent from the text is simply absent from the record;
    /// that is not an error.
    fn extract(&self, text: &str) -> PageRecord;
}

/// Regex-based extractor matching `field[:\s]*<rest of line>`.
///
/// Patterns are compiled once per checklist at construction. Fields are
/// matched independently, so overlapping names ("Part Number" inside
/// "Customer Part Number") each run their own search over the full
/// text.
pub struct PatternExtractor {
    patterns: Vec<(String, Regex)>,
}

impl PatternExtractor {
    /// Compile one pattern per checklist field.
    pub fn new(checklist: &Checklist) -> Self {
        let patterns = checklist
            .fields()
            .iter()
            .map(|field| {
                let pattern = format!(r"(?i){}[:\s]*([^\n]+)", regex::escape(field));
                // Escaped literal plus a fixed tail; cannot fail to compile.
                let re = Regex::new(&pattern).unwrap_or_else(|_| Regex::new("$^").unwrap());
                (field.clone(), re)
            })
            .collect();
        Self { patterns }
    }
}

impl FieldExtractor for PatternExtractor {
    fn extract(&self, text: &str) -> PageRecord {
        let mut record = PageRecord::new();
        for (field, re) in &self.patterns {
            if let Some(caps) = re.captures(text) {
                if let Some(value) = caps.get(1) {
                    let trimmed = value.as_str().trim();
                    if !trimmed.is_empty() {
                        record.insert(field.clone(), trimmed);
                    }
                }
            }
        }
        record
    }
}
