use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::collectors::ReportFormat;
use crate::error::GateError;
use crate::penalty::{Penalty, PenaltyPreset};

pub const CONFIG_FILE_NAME: &str = "violations-gate.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PenaltyConfig {
    pub preset: Option<PenaltyPreset>,
    pub max_errors: Option<i64>,
    pub max_warnings: Option<i64>,
}

impl PenaltyConfig {
    /// Preset first, then explicit maxima on top. Anything unset is 0.
    pub fn resolve(&self) -> Penalty {
        let mut penalty = self.preset.map(Penalty::from_preset).unwrap_or_default();
        if let Some(max_errors) = self.max_errors {
            penalty.max_errors = max_errors;
        }
        if let Some(max_warnings) = self.max_warnings {
            penalty.max_warnings = max_warnings;
        }
        penalty
    }

    /// Fields set in `other` replace ours. A preset in `other` also drops our maxima.
    pub fn overridden_by(&self, other: &PenaltyConfig) -> PenaltyConfig {
        let base = if other.preset.is_some() {
            PenaltyConfig {
                preset: other.preset,
                ..Default::default()
            }
        } else {
            self.clone()
        };
        PenaltyConfig {
            preset: base.preset,
            max_errors: other.max_errors.or(base.max_errors),
            max_warnings: other.max_warnings.or(base.max_warnings),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    pub name: String,
    pub format: Option<ReportFormat>,
    #[serde(default)]
    pub reports: Vec<PathBuf>,
}

impl ToolConfig {
    pub fn report_format(&self) -> Result<ReportFormat, GateError> {
        self.format
            .or_else(|| ReportFormat::from_tool_name(&self.name))
            .ok_or_else(|| GateError::UnknownFormat {
                tool: self.name.clone(),
            })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    penalty: PenaltyConfig,
    #[serde(default, rename = "tool")]
    tools: Vec<ToolConfig>,
}

pub struct GateConfig {
    /// Directory report paths are resolved against.
    pub root_dir: PathBuf,
    pub penalty: PenaltyConfig,
    pub tools: Vec<ToolConfig>,
}

impl GateConfig {
    pub fn from_file(path: &Path) -> Result<Self, GateError> {
        let raw = fs::read_to_string(path).map_err(|source| GateError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let root_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::parse(&raw, &root_dir).map_err(|source| GateError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(raw: &str, root_dir: &Path) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(raw)?;
        Ok(Self {
            root_dir: root_dir.to_path_buf(),
            penalty: file.penalty,
            tools: file.tools,
        })
    }

    pub fn from_root(root: &Path) -> Result<Self, GateError> {
        Self::from_file(&root.join(CONFIG_FILE_NAME))
    }

    /// Walk up from `start` to the first directory holding a config file.
    pub fn discover(start: &Path) -> Result<Self, GateError> {
        let mut dir = start.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return Self::from_file(&candidate);
            }
            if !dir.pop() {
                return Err(GateError::ConfigNotFound {
                    start: start.to_path_buf(),
                });
            }
        }
    }

    pub fn resolve_report(&self, report: &Path) -> PathBuf {
        if report.is_absolute() {
            report.to_path_buf()
        } else {
            self.root_dir.join(report)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[penalty]
max_errors = 0
max_warnings = 10

[[tool]]
name = "checkstyle"
reports = ["build/reports/checkstyle/main.xml", "build/reports/checkstyle/test.xml"]

[[tool]]
name = "custom"
format = "pmd"
reports = ["/abs/pmd.xml"]
"#;

    #[test]
    fn parses_penalty_and_tools() {
        let config = GateConfig::parse(SAMPLE, Path::new("/project")).unwrap();

        assert_eq!(config.penalty.resolve(), Penalty::new(0, 10));
        assert_eq!(config.tools.len(), 2);
        assert_eq!(
            config.tools[0].report_format().unwrap(),
            ReportFormat::Checkstyle
        );
        assert_eq!(config.tools[1].report_format().unwrap(), ReportFormat::Pmd);
    }

    #[test]
    #[cfg(unix)]
    fn relative_reports_resolve_against_root() {
        let config = GateConfig::parse(SAMPLE, Path::new("/project")).unwrap();
        assert_eq!(
            config.resolve_report(&config.tools[0].reports[0]),
            PathBuf::from("/project/build/reports/checkstyle/main.xml")
        );
        assert_eq!(
            config.resolve_report(&config.tools[1].reports[0]),
            PathBuf::from("/abs/pmd.xml")
        );
    }

    #[test]
    fn empty_config_means_zero_tolerance() {
        let config = GateConfig::parse("", Path::new(".")).unwrap();
        assert_eq!(config.penalty.resolve(), Penalty::new(0, 0));
        assert!(config.tools.is_empty());
    }

    #[test]
    fn unknown_tool_without_format_is_an_error() {
        let config = GateConfig::parse("[[tool]]\nname = \"sonar\"\n", Path::new(".")).unwrap();
        let err = config.tools[0].report_format().unwrap_err();
        assert!(err.to_string().contains("sonar"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let parsed = GateConfig::parse("[penalty]\nmax_error = 3\n", Path::new("."));
        assert!(parsed.is_err());
    }

    #[test]
    fn preset_is_refined_by_explicit_maxima() {
        let penalty = PenaltyConfig {
            preset: Some(PenaltyPreset::FailOnErrors),
            max_errors: Some(3),
            max_warnings: None,
        };
        assert_eq!(penalty.resolve(), Penalty::new(3, i64::MAX));
    }

    #[test]
    fn cli_preset_replaces_file_maxima() {
        let file = PenaltyConfig {
            preset: None,
            max_errors: Some(4),
            max_warnings: Some(9),
        };
        let cli = PenaltyConfig {
            preset: Some(PenaltyPreset::None),
            max_errors: None,
            max_warnings: Some(2),
        };
        assert_eq!(
            file.overridden_by(&cli).resolve(),
            Penalty::new(i64::MAX, 2)
        );
    }

    #[test]
    fn discover_walks_up_to_config() {
        let root = tempfile::tempdir().unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[penalty]\nmax_errors = 1\n",
        )
        .unwrap();
        let nested = root.path().join("app/src/main");
        fs::create_dir_all(&nested).unwrap();

        let config = GateConfig::discover(&nested).unwrap();

        assert_eq!(config.root_dir, root.path());
        assert_eq!(config.penalty.resolve(), Penalty::new(1, 0));
    }

    #[test]
    fn discover_without_config_fails() {
        let root = tempfile::tempdir().unwrap();
        let err = GateConfig::discover(root.path());
        assert!(matches!(err, Err(GateError::ConfigNotFound { .. })));
    }
}
