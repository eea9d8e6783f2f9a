use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GrowthError>;

#[derive(Error, Debug)]
pub enum GrowthError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Malformed log line ({reason}): {line:?}")]
    MalformedLogLine { line: String, reason: String },
    #[error("Invalid timestamp '{raw}': {source}")]
    InvalidTimestamp {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("git diff-tree failed for {range} ({status}): {stderr}")]
    DiffFailed {
        range: String,
        status: String,
        stderr: String,
    },
    #[error("Invalid date format '{0}'")]
    InvalidDateFormat(String),
    #[error("Not a valid path {}", .0.display())]
    NotADirectory(PathBuf),
}

impl GrowthError {
    pub(crate) fn malformed(line: &str, reason: impl Into<String>) -> Self {
        GrowthError::MalformedLogLine {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}
