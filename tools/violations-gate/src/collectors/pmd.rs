use std::sync::LazyLock;

use regex::Regex;

use super::{attribute_values, element_pattern};
use crate::penalty::Counts;

static VIOLATION_TAG: LazyLock<Regex> = LazyLock::new(|| element_pattern("violation"));

/// PMD priorities 1 and 2 are errors, 3 to 5 are warnings.
pub fn count(xml: &str) -> Counts {
    let mut counts = Counts::default();
    let values = attribute_values(&VIOLATION_TAG, "priority", xml);
    for priority in values.into_iter().flatten() {
        match priority.trim().parse::<u8>() {
            Ok(1..=2) => counts.errors += 1,
            Ok(3..=5) => counts.warnings += 1,
            _ => {}
        }
    }
    counts
}
