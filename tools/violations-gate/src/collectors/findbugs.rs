use std::sync::LazyLock;

use regex::Regex;

use super::{attribute_values, element_pattern};
use crate::penalty::Counts;

static BUG_INSTANCE_TAG: LazyLock<Regex> = LazyLock::new(|| element_pattern("BugInstance"));

/// FindBugs and SpotBugs: high-priority bugs (priority 1) are errors,
/// everything else is a warning.
pub fn count(xml: &str) -> Counts {
    let mut counts = Counts::default();
    for priority in attribute_values(&BUG_INSTANCE_TAG, "priority", xml) {
        match priority.as_deref().map(str::trim) {
            Some("1") => counts.errors += 1,
            _ => counts.warnings += 1,
        }
    }
    counts
}
