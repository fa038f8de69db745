//! Cross-page consistency checking for identity fields.

use std::collections::BTreeSet;

use crate::record::PageRecord;

/// Returns `true` if `field` holds at most one distinct value across
/// all pages where it was extracted.
///
/// Pages where the field is absent are excluded, not treated as a
/// mismatch; a field missing from every page is vacuously consistent.
/// Runs over the full record set after all pages are processed, never
/// incrementally.
pub fn is_consistent(field: &str, records: &[PageRecord]) -> bool {
    let distinct: BTreeSet<&str> = records.iter().filter_map(|r| r.get(field)).collect();
    distinct.len() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> PageRecord {
        let mut r = PageRecord::new();
        for (k, v) in pairs {
            r.insert(*k, *v);
        }
        r
    }

    #[test]
    fn same_value_on_every_page_is_consistent() {
        let records = vec![
            record(&[("Part Number", "12345")]),
            record(&[("Part Number", "12345")]),
        ];
        assert!(is_consistent("Part Number", &records));
    }

    #[test]
    fn two_distinct_values_are_inconsistent() {
        let records = vec![
            record(&[("Lot Number", "A1")]),
            record(&[("Lot Number", "B2")]),
        ];
        assert!(!is_consistent("Lot Number", &records));
    }

    #[test]
    fn absent_pages_are_excluded_not_mismatched() {
        let records = vec![
            record(&[("Date", "2024-05-01")]),
            record(&[]),
            record(&[("Date", "2024-05-01")]),
        ];
        assert!(is_consistent("Date", &records));
    }

    #[test]
    fn field_absent_everywhere_is_vacuously_consistent() {
        let records = vec![record(&[]), record(&[])];
        assert!(is_consistent("Lot Number", &records));
    }

    #[test]
    fn empty_record_set_is_consistent() {
        assert!(is_consistent("Part Number", &[]));
    }
}
