//! Numeric range validation for extracted field values.
//!
//! The validator parses the first decimal-number-shaped token out of
//! the raw extracted string and checks it against a closed interval.
//! A missing token, an unparsable token, and an out-of-bounds value are
//! all the same failure to the caller; the anomaly taxonomy does not
//! distinguish them.

use std::sync::OnceLock;

use regex::Regex;

use crate::checklist::RangeRule;

fn number_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\d.]+").unwrap())
}

/// Parse the first decimal-number-shaped token in `value`.
///
/// Returns `None` when no token exists or the token does not parse as
/// a number (e.g. a bare `"."`).
pub fn parse_leading_number(value: &str) -> Option<f64> {
    let m = number_token().find(value)?;
    m.as_str().parse::<f64>().ok()
}

/// Returns `true` if `value`'s leading numeric token lies inside the
/// rule's closed interval `[min, max]`. Boundary values pass.
pub fn value_in_range(value: &str, rule: &RangeRule) -> bool {
    match parse_leading_number(value) {
        Some(n) => rule.min <= n && n <= rule.max,
        None => false,
    }
}
