use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::evaluate::GateReport;
use crate::violations::Violations;

pub fn print_header() {
    println!(
        "{}",
        "\n=== Static Analysis Violations ===\n".if_supports_color(Stdout, |s| s.bold())
    );
}

pub fn print_tool(violations: &Violations) {
    if violations.reports.is_empty() {
        println!(
            "{} {}: {}",
            "-".if_supports_color(Stdout, |s| s.dimmed()),
            violations.name,
            "no reports found".if_supports_color(Stdout, |s| s.dimmed()),
        );
    } else if !violations.has_violations() {
        println!(
            "{} {}: {}",
            "\u{2713}".if_supports_color(Stdout, |s| s.green()),
            violations.name,
            "clean".if_supports_color(Stdout, |s| s.green()),
        );
    } else {
        let counts = format!(
            "{} error(s), {} warning(s)",
            violations.errors, violations.warnings
        );
        let painted = if violations.errors > 0 {
            counts.if_supports_color(Stdout, |s| s.red()).to_string()
        } else {
            counts.if_supports_color(Stdout, |s| s.yellow()).to_string()
        };
        println!(
            "{} {}: {}",
            "\u{26a0}".if_supports_color(Stdout, |s| s.yellow()),
            violations.name,
            painted,
        );
    }
}

pub fn print_summary(report: &GateReport) {
    println!(
        "{}",
        "\n--- Summary ---".if_supports_color(Stdout, |s| s.bold())
    );

    let line = summary_line(report);
    if report.passed {
        println!("{}", line.if_supports_color(Stdout, |s| s.green()));
    } else {
        println!("{}", line.if_supports_color(Stdout, |s| s.red()));
    }
}

fn summary_line(report: &GateReport) -> String {
    format!(
        "\n{} error(s) of {} allowed, {} warning(s) of {} allowed.\n",
        report.totals.errors,
        limit(report.max_errors),
        report.totals.warnings,
        limit(report.max_warnings),
    )
}

fn limit(max: u64) -> String {
    if max >= i64::MAX as u64 {
        "unlimited".to_string()
    } else {
        max.to_string()
    }
}
