//! lotcheck-core: Backend-independent extraction and validation logic.
//!
//! This crate provides the data model (checklists, range rules, page
//! records, anomalies) and the algorithms (field extraction, numeric
//! validation, cross-page consistency, anomaly aggregation) used by
//! lotcheck. It knows nothing about PDFs, OCR, or report files; those
//! live behind the boundaries in the `lotcheck` facade crate.

pub mod aggregate;
pub mod anomaly;
pub mod checklist;
pub mod consistency;
pub mod extract;
pub mod numeric;
pub mod record;

pub use aggregate::{ValidationReport, aggregate};
pub use anomaly::{Anomaly, Issue, Location, PresenceTally};
pub use checklist::{Checklist, RangeRule, ValidationProfile};
pub use consistency::is_consistent;
pub use extract::{FieldExtractor, PatternExtractor};
pub use numeric::{parse_leading_number, value_in_range};
pub use record::PageRecord;
