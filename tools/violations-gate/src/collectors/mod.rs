pub mod checkstyle;
pub mod findbugs;
pub mod lint;
pub mod pmd;

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::GateError;
use crate::penalty::Counts;
use crate::violations::Violations;

/// XML layout a tool writes its report in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    Checkstyle,
    Pmd,
    Findbugs,
    Lint,
}

impl ReportFormat {
    /// Guess the format from a tool name. detekt and ktlint emit checkstyle XML.
    pub fn from_tool_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "checkstyle" | "detekt" | "ktlint" => Some(Self::Checkstyle),
            "pmd" => Some(Self::Pmd),
            "findbugs" | "spotbugs" => Some(Self::Findbugs),
            "lint" | "android-lint" => Some(Self::Lint),
            _ => None,
        }
    }

    pub fn count(self, xml: &str) -> Counts {
        match self {
            Self::Checkstyle => checkstyle::count(xml),
            Self::Pmd => pmd::count(xml),
            Self::Findbugs => findbugs::count(xml),
            Self::Lint => lint::count(xml),
        }
    }
}

/// Adds the counts from `xml_report` to `violations`.
///
/// A report that does not exist is skipped and `Ok(false)` is returned;
/// the tool simply contributes nothing.
pub fn collect_report(
    format: ReportFormat,
    xml_report: &Path,
    violations: &mut Violations,
) -> Result<bool, GateError> {
    if !xml_report.is_file() {
        tracing::debug!(
            tool = %violations.name,
            report = %xml_report.display(),
            "report missing, skipping"
        );
        return Ok(false);
    }

    let xml = fs::read_to_string(xml_report).map_err(|source| GateError::ReadReport {
        path: xml_report.to_path_buf(),
        source,
    })?;
    let counts = format.count(&xml);
    tracing::debug!(
        tool = %violations.name,
        report = %xml_report.display(),
        errors = counts.errors,
        warnings = counts.warnings,
        "collected report"
    );
    violations.accumulate(counts.errors, counts.warnings, xml_report);
    Ok(true)
}

static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([\w:.-]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap()
});

/// Pattern for an opening or self-closing `<tag ...>` element. Quoted
/// attribute values may contain `>`.
pub(crate) fn element_pattern(tag: &str) -> Regex {
    let pattern = format!(r#"<{}\s(?:[^>"']|"[^"]*"|'[^']*')*>"#, regex::escape(tag));
    Regex::new(&pattern).unwrap()
}

/// Value of `attribute` on every element matched by `element`, in document
/// order. Comments are skipped. Elements without the attribute yield `None`.
pub(crate) fn attribute_values(
    element: &Regex,
    attribute: &str,
    xml: &str,
) -> Vec<Option<String>> {
    let xml = COMMENT.replace_all(xml, "");
    element
        .find_iter(&xml)
        .map(|found| {
            ATTRIBUTE
                .captures_iter(found.as_str())
                .find(|caps| &caps[1] == attribute)
                .and_then(|caps| caps.get(2).or_else(|| caps.get(3)))
                .map(|m| m.as_str().to_string())
        })
        .collect()
}
