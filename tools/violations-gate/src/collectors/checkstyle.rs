use std::sync::LazyLock;

use regex::Regex;

use super::{attribute_values, element_pattern};
use crate::penalty::Counts;

static ERROR_TAG: LazyLock<Regex> = LazyLock::new(|| element_pattern("error"));

/// Checkstyle-format reports (also written by detekt and ktlint).
/// `info` and `ignore` severities are not counted.
pub fn count(xml: &str) -> Counts {
    let mut counts = Counts::default();
    let values = attribute_values(&ERROR_TAG, "severity", xml);
    for severity in values.into_iter().flatten() {
        match severity.as_str() {
            "error" => counts.errors += 1,
            "warning" => counts.warnings += 1,
            _ => {}
        }
    }
    counts
}
