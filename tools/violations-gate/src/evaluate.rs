use std::path::PathBuf;

use serde::Serialize;

use crate::error::GateError;
use crate::penalty::{Counts, Penalty};
use crate::renderer::ReportUrlRenderer;
use crate::violations::ViolationsContainer;

/// Outcome of comparing collected violations with a penalty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    Pass { message: String },
    Fail { message: String },
}

impl Evaluation {
    pub fn passed(&self) -> bool {
        matches!(self, Evaluation::Pass { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Evaluation::Pass { message } | Evaluation::Fail { message } => message,
        }
    }

    /// Logs the summary on pass; turns a failure into `GateError::LimitExceeded`.
    pub fn enforce(self) -> Result<(), GateError> {
        match self {
            Evaluation::Pass { message } => {
                tracing::warn!("{message}");
                Ok(())
            }
            Evaluation::Fail { message } => Err(GateError::LimitExceeded { message }),
        }
    }
}

/// Sum of counts over every record that has at least one violation.
pub fn totals(container: &ViolationsContainer) -> Counts {
    container
        .iter()
        .filter(|v| v.has_violations())
        .fold(Counts::default(), |acc, v| Counts {
            errors: acc.errors.saturating_add(v.errors),
            warnings: acc.warnings.saturating_add(v.warnings),
        })
}

pub fn evaluate(
    container: &ViolationsContainer,
    penalty: &Penalty,
    renderer: &dyn ReportUrlRenderer,
) -> Evaluation {
    let mut message = String::from("\n");
    for violations in container.iter().filter(|v| v.has_violations()) {
        message.push_str("> ");
        message.push_str(&violations.describe(renderer));
        message.push('\n');
    }

    let overage = penalty.overage(totals(container));
    if overage.is_zero() {
        Evaluation::Pass { message }
    } else {
        Evaluation::Fail {
            message: format!(
                "Violations limit exceeded by {} errors, {} warnings.\n{}",
                overage.errors, overage.warnings, message
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolReport {
    pub name: String,
    pub errors: u64,
    pub warnings: u64,
    pub reports: Vec<PathBuf>,
}

/// Machine-readable view of one evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct GateReport {
    pub passed: bool,
    pub totals: Counts,
    pub max_errors: u64,
    pub max_warnings: u64,
    pub overage: Counts,
    pub tools: Vec<ToolReport>,
}

impl GateReport {
    pub fn build(container: &ViolationsContainer, penalty: &Penalty) -> Self {
        let totals = totals(container);
        let overage = penalty.overage(totals);
        Self {
            passed: overage.is_zero(),
            totals,
            max_errors: penalty.clamped_max_errors(),
            max_warnings: penalty.clamped_max_warnings(),
            overage,
            tools: container
                .iter()
                .map(|v| ToolReport {
                    name: v.name.clone(),
                    errors: v.errors,
                    warnings: v.warnings,
                    reports: v.reports.clone(),
                })
                .collect(),
        }
    }
}
