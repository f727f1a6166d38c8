use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GateError {
    /// Totals exceeded the configured penalty. Always fatal.
    #[error("{message}")]
    LimitExceeded { message: String },

    #[error("failed to read report {}: {source}", .path.display())]
    ReadReport {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read config {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(
        "could not find {} in {} or any parent directory. Use --config or --root-dir.",
        crate::config::CONFIG_FILE_NAME,
        .start.display()
    )]
    ConfigNotFound { start: PathBuf },

    #[error("no report format known for tool `{tool}`; set `format` explicitly")]
    UnknownFormat { tool: String },

    #[error("failed to serialize gate report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl GateError {
    pub fn is_limit_exceeded(&self) -> bool {
        matches!(self, GateError::LimitExceeded { .. })
    }
}
