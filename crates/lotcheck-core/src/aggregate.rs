//! Anomaly aggregation over a document's page records.
//!
//! Runs after every page has been extracted. The output ordering is a
//! contract: for each page in order, missing-field findings in
//! checklist order, then range findings in range-rule declaration
//! order, followed by document-wide consistency findings in
//! identity-field declaration order.

use crate::anomaly::{Anomaly, Issue, Location, PresenceTally};
use crate::checklist::ValidationProfile;
use crate::consistency::is_consistent;
use crate::numeric::value_in_range;
use crate::record::PageRecord;

/// The aggregated outcome of one validation run.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    /// All findings, in discovery order.
    pub anomalies: Vec<Anomaly>,
    /// How many findings are critical (range or consistency failures).
    /// Critical issues are a counted subset of `anomalies`, not a
    /// separate report.
    pub critical_count: usize,
    /// Pages on which each checklist field was found.
    pub presence: PresenceTally,
    /// Number of pages processed.
    pub page_count: usize,
}

impl ValidationReport {
    /// Total number of findings.
    pub fn anomaly_count(&self) -> usize {
        self.anomalies.len()
    }
}

/// Aggregate per-page extraction results into a [`ValidationReport`].
pub fn aggregate(profile: &ValidationProfile, records: &[PageRecord]) -> ValidationReport {
    let mut anomalies = Vec::new();
    let mut critical_count = 0;
    let mut presence = PresenceTally::new(&profile.checklist);

    for (page_index, record) in records.iter().enumerate() {
        let page = Location::Page(page_index + 1);

        for field in profile.checklist.fields() {
            if record.contains(field) {
                presence.increment(field);
            } else {
                anomalies.push(Anomaly::new(page, field.clone(), Issue::Missing));
            }
        }

        for rule in &profile.range_rules {
            if let Some(value) = record.get(&rule.field) {
                if !value_in_range(value, rule) {
                    anomalies.push(Anomaly::new(
                        page,
                        rule.field.clone(),
                        Issue::OutOfRange(value.to_string()),
                    ));
                    critical_count += 1;
                }
            }
        }
    }

    for field in &profile.identity_fields {
        if !is_consistent(field, records) {
            anomalies.push(Anomaly::new(
                Location::Document,
                field.clone(),
                Issue::Inconsistent,
            ));
            critical_count += 1;
        }
    }

    ValidationReport {
        anomalies,
        critical_count,
        presence,
        page_count: records.len(),
    }
}
