use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::renderer::ReportUrlRenderer;

/// Error and warning counts collected for one analysis tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violations {
    pub name: String,
    pub errors: u64,
    pub warnings: u64,
    pub reports: Vec<PathBuf>,
}

impl Violations {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            errors: 0,
            warnings: 0,
            reports: Vec::new(),
        }
    }

    pub fn accumulate(&mut self, errors: u64, warnings: u64, report: impl AsRef<Path>) {
        self.errors = self.errors.saturating_add(errors);
        self.warnings = self.warnings.saturating_add(warnings);
        self.reports.push(report.as_ref().to_path_buf());
    }

    pub fn has_violations(&self) -> bool {
        self.errors > 0 || self.warnings > 0
    }

    pub fn describe(&self, renderer: &dyn ReportUrlRenderer) -> String {
        let reports = self
            .reports
            .iter()
            .map(|report| format!("- {}", renderer.render(report)))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "{} rule violations were found ({} errors, {} warnings). See the reports at:\n{}",
            self.name, self.errors, self.warnings, reports
        )
    }
}

/// Records keyed by tool name, iterated in the order they were first created.
#[derive(Debug, Clone, Default)]
pub struct ViolationsContainer {
    entries: Vec<Violations>,
}

impl ViolationsContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record for `name`, creating an empty one on first use.
    pub fn maybe_create(&mut self, name: &str) -> &mut Violations {
        let index = match self.entries.iter().position(|v| v.name == name) {
            Some(index) => index,
            None => {
                self.entries.push(Violations::new(name));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index]
    }

    pub fn get(&self, name: &str) -> Option<&Violations> {
        self.entries.iter().find(|v| v.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violations> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ViolationsContainer {
    type Item = &'a Violations;
    type IntoIter = std::slice::Iter<'a, Violations>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
