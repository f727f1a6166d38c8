use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use violations_gate::config::{GateConfig, PenaltyConfig};
use violations_gate::error::GateError;
use violations_gate::penalty::PenaltyPreset;
use violations_gate::{
    evaluate, reporter, FileUrlRenderer, GateReport, PlainPathRenderer, ReportUrlRenderer,
};

/// Fail the build when static-analysis reports exceed the allowed violations.
#[derive(Debug, Parser)]
#[command(name = "violations-gate", version)]
struct Args {
    /// Config file. Defaults to the nearest violations-gate.toml at or above
    /// the current directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding violations-gate.toml.
    #[arg(long, conflicts_with = "config")]
    root_dir: Option<PathBuf>,

    /// Threshold preset; replaces the maxima from the config file.
    #[arg(long, value_enum)]
    penalty: Option<PenaltyPreset>,

    /// Maximum tolerated errors. Negative values count as 0.
    #[arg(long, allow_negative_numbers = true)]
    max_errors: Option<i64>,

    /// Maximum tolerated warnings. Negative values count as 0.
    #[arg(long, allow_negative_numbers = true)]
    max_warnings: Option<i64>,

    /// Show report paths as given instead of file:// URLs.
    #[arg(long)]
    plain_paths: bool,

    /// Print the gate report as JSON instead of the summary table.
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), GateError> {
    let config = load_config(args)?;
    let overrides = PenaltyConfig {
        preset: args.penalty,
        max_errors: args.max_errors,
        max_warnings: args.max_warnings,
    };
    let penalty = config.penalty.overridden_by(&overrides).resolve();
    tracing::debug!(
        root = %config.root_dir.display(),
        tools = config.tools.len(),
        max_errors = penalty.max_errors,
        max_warnings = penalty.max_warnings,
        "loaded config"
    );

    let container = violations_gate::collect_all(&config)?;
    let report = GateReport::build(&container, &penalty);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        reporter::print_header();
        container.iter().for_each(reporter::print_tool);
        reporter::print_summary(&report);
    }

    let renderer: &dyn ReportUrlRenderer = if args.plain_paths {
        &PlainPathRenderer
    } else {
        &FileUrlRenderer
    };
    evaluate(&container, &penalty, renderer).enforce()
}

fn load_config(args: &Args) -> Result<GateConfig, GateError> {
    if let Some(path) = &args.config {
        return GateConfig::from_file(path);
    }
    if let Some(root) = &args.root_dir {
        return GateConfig::from_root(root);
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    GateConfig::discover(&cwd)
}
