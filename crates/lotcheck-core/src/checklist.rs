//! Checklists, numeric range rules, and the validation profile.
//!
//! A [`Checklist`] is the ordered set of field names a document is
//! expected to contain. A [`ValidationProfile`] pairs a checklist with
//! the [`RangeRule`]s applying to a subset of its fields and the
//! identity fields that must hold one value across every page.

/// Ordered set of field names the document is expected to contain.
///
/// The order is a contract: extraction results, anomaly rows, and
/// presence-tally bars all follow checklist order. Immutable for the
/// lifetime of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    fields: Vec<String>,
}

impl Checklist {
    /// Create a checklist from an ordered list of field names.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// The fixed checklist for electronic-component lot traceability
    /// paperwork: identifiers, certifications, and measurements.
    pub fn aerospace_lot() -> Self {
        Self::new([
            "Customer Name",
            "Customer P.O. Number",
            "Customer Part Number",
            "Customer Part Number Revision",
            "OEM Part Number",
            "OEM Lot Number",
            "OEM Date Code",
            "OEM Cage Code",
            "AEM Part Number",
            "AEM Lot Number",
            "AEM Date Code",
            "AEM Cage Code",
            "Customer Quality Clauses",
            "FAI Form 3",
            "Solderability Test Report",
            "DPA",
            "Visual Inspection Record",
            "Shipment Quantity",
            "Reel Labels",
            "Certificate of Conformance",
            "Route Sheet",
            "Part Number",
            "Lot Number",
            "Date",
            "Resistance",
            "Dimension",
            "Test Result",
        ])
    }

    /// Field names in checklist order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of fields in the checklist.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the checklist has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `true` if `field` is a checklist entry (exact match).
    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }
}

/// A closed numeric interval `[min, max]` that an extracted value's
/// leading numeric token must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeRule {
    /// Checklist field this rule applies to.
    pub field: String,
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
}

impl RangeRule {
    /// Create a range rule for `field` over the closed interval `[min, max]`.
    pub fn new(field: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            field: field.into(),
            min,
            max,
        }
    }
}

/// Everything the aggregator needs to judge one document: the
/// checklist, the range rules (in declaration order), and the identity
/// fields that must be consistent across pages (in declaration order).
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationProfile {
    /// Ordered field checklist.
    pub checklist: Checklist,
    /// Range rules, applied in declaration order.
    pub range_rules: Vec<RangeRule>,
    /// Fields that must hold a single value across all pages.
    pub identity_fields: Vec<String>,
}

impl ValidationProfile {
    /// The default profile for electronic-component lot paperwork.
    pub fn aerospace_lot() -> Self {
        Self {
            checklist: Checklist::aerospace_lot(),
            range_rules: vec![
                RangeRule::new("Resistance", 95.0, 105.0),
                RangeRule::new("Dimension", 0.9, 1.1),
            ],
            identity_fields: vec![
                "Part Number".to_string(),
                "Lot Number".to_string(),
                "Date".to_string(),
            ],
        }
    }

    /// Look up the range rule for `field`, if one is defined.
    pub fn range_rule(&self, field: &str) -> Option<&RangeRule> {
        self.range_rules.iter().find(|r| r.field == field)
    }
}
