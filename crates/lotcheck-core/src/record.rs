//! Per-page extraction records.

use std::collections::BTreeMap;

/// Field name → extracted value for one page.
///
/// Produced once per page by a [`FieldExtractor`](crate::FieldExtractor)
/// and never mutated afterwards; the run holds one record per page in
/// page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRecord {
    fields: BTreeMap<String, String>,
}

impl PageRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an extracted value. Used by extractors during record
    /// construction; existing entries are not overwritten (first match
    /// wins).
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.entry(field.into()).or_insert_with(|| value.into());
    }

    /// The extracted value for `field`, if it was found on this page.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Returns `true` if `field` was found on this page.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of fields found on this page.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if nothing was extracted from this page.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(field, value)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
