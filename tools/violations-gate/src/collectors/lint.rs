use std::sync::LazyLock;

use regex::Regex;

use super::{attribute_values, element_pattern};
use crate::penalty::Counts;

static ISSUE_TAG: LazyLock<Regex> = LazyLock::new(|| element_pattern("issue"));

/// Android Lint `lint-results.xml`.
pub fn count(xml: &str) -> Counts {
    let mut counts = Counts::default();
    let values = attribute_values(&ISSUE_TAG, "severity", xml);
    for severity in values.into_iter().flatten() {
        match severity.as_str() {
            "Fatal" | "Error" => counts.errors += 1,
            "Warning" => counts.warnings += 1,
            _ => {}
        }
    }
    counts
}
