//! Anomaly findings and the per-field presence tally.
//!
//! Provides [`Anomaly`] for recorded findings (missing field, value out
//! of range, inconsistent across pages), [`Location`] for where a
//! finding applies, and [`PresenceTally`] counting on how many pages
//! each checklist field was found.

use std::collections::HashMap;
use std::fmt;

use crate::checklist::Checklist;

/// Where a finding applies: one page, or the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// A single page, 1-based.
    Page(usize),
    /// A document-wide finding (cross-page consistency).
    Document,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Page(n) => write!(f, "{n}"),
            Location::Document => write!(f, "document-wide"),
        }
    }
}

/// The kind of finding recorded for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// The field was not found on the page.
    Missing,
    /// The field's leading numeric token was absent, unparsable, or
    /// outside its closed interval. Carries the raw extracted value.
    OutOfRange(String),
    /// An identity field held more than one distinct value across pages.
    Inconsistent,
}

impl Issue {
    /// Range and consistency failures are critical; plain "missing" is not.
    pub fn is_critical(&self) -> bool {
        !matches!(self, Issue::Missing)
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::Missing => write!(f, "missing"),
            Issue::OutOfRange(raw) => write!(f, "value out of range: {raw}"),
            Issue::Inconsistent => write!(f, "inconsistent across pages"),
        }
    }
}

/// A recorded finding: where, which field, what was wrong.
///
/// Anomalies accumulate in discovery order; that order is part of the
/// report contract (page-level findings in page order, then
/// document-wide findings).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anomaly {
    /// Page or document-wide location.
    pub location: Location,
    /// Checklist field the finding concerns.
    pub field: String,
    /// What was wrong.
    pub issue: Issue,
}

impl Anomaly {
    /// Create an anomaly.
    pub fn new(location: Location, field: impl Into<String>, issue: Issue) -> Self {
        Self {
            location,
            field: field.into(),
            issue,
        }
    }

    /// Returns `true` if this anomaly also counts as a critical issue.
    pub fn is_critical(&self) -> bool {
        self.issue.is_critical()
    }
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Location::Page(n) => write!(f, "page {n}: {}: {}", self.field, self.issue),
            Location::Document => write!(f, "document-wide: {}: {}", self.field, self.issue),
        }
    }
}

/// Count of pages on which each checklist field was found.
///
/// Every checklist field is present from the start with a zero count,
/// so iteration always yields one entry per field in checklist order,
/// including fields never seen on any page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceTally {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl PresenceTally {
    /// Create a tally with a zero count for every checklist field.
    pub fn new(checklist: &Checklist) -> Self {
        let order: Vec<String> = checklist.fields().to_vec();
        let counts = order.iter().map(|f| (f.clone(), 0)).collect();
        Self { order, counts }
    }

    /// Record that `field` was found on one more page. Unknown fields
    /// are ignored.
    pub fn increment(&mut self, field: &str) {
        if let Some(count) = self.counts.get_mut(field) {
            *count += 1;
        }
    }

    /// Pages on which `field` was found (0 for unknown fields).
    pub fn count(&self, field: &str) -> usize {
        self.counts.get(field).copied().unwrap_or(0)
    }

    /// Iterate `(field, count)` in checklist order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order
            .iter()
            .map(|f| (f.as_str(), self.counts[f.as_str()]))
    }

    /// The largest per-field count (0 for an empty checklist).
    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }
}
