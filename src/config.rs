use crate::error::{GrowthError, Result};
use chrono::format::{Item, StrftimeItems};
use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Interactive two-panel chart
    #[default]
    Chart,
    Json,
    Ndjson,
    Table,
}

impl OutputFormat {
    /// Machine-readable formats keep stdout free of progress notices.
    pub fn is_machine_readable(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Ndjson)
    }
}

/// Everything one run needs, resolved up front.
#[derive(Debug, Clone)]
pub struct Config {
    pub repo_path: PathBuf,
    pub git_binary: OsString,
    pub output: OutputFormat,
    pub date_format: String,
    pub progress: bool,
}

impl Config {
    pub fn new(repo_path: Option<PathBuf>) -> Result<Self> {
        let repo_path = match repo_path {
            Some(path) => std::path::absolute(path)?,
            None => std::env::current_dir()?,
        };
        Ok(Self {
            repo_path,
            git_binary: OsString::from("git"),
            output: OutputFormat::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            progress: true,
        })
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        if output.is_machine_readable() {
            self.progress = false;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.repo_path.is_dir() {
            return Err(GrowthError::NotADirectory(self.repo_path.clone()));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(GrowthError::InvalidDateFormat(self.date_format.clone()));
        }
        Ok(())
    }
}
