pub mod collectors;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod penalty;
pub mod renderer;
pub mod reporter;
pub mod violations;

use config::GateConfig;
use error::GateError;
use violations::ViolationsContainer;

pub use evaluate::{evaluate, Evaluation, GateReport};
pub use penalty::Penalty;
pub use renderer::{FileUrlRenderer, PlainPathRenderer, ReportUrlRenderer};
pub use violations::Violations;

/// Reads every configured report into a fresh container.
///
/// Each tool gets a record even when none of its reports exist, so the
/// reporter can list it.
pub fn collect_all(config: &GateConfig) -> Result<ViolationsContainer, GateError> {
    let mut container = ViolationsContainer::new();
    for tool in &config.tools {
        let format = tool.report_format()?;
        let violations = container.maybe_create(&tool.name);
        for report in &tool.reports {
            collectors::collect_report(format, &config.resolve_report(report), violations)?;
        }
    }
    Ok(container)
}
