use super::{DiffRange, HistorySource};
use crate::error::{GrowthError, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

/// `%H` is exactly 40 hex chars, immediately followed by the ISO-8601
/// committer date, then email and subject.
pub const LOG_FORMAT: &str = "--format=%H%cI;%ce;%s";

/// A repository read through the `git` command line.
pub struct GitRepo {
    path: PathBuf,
    git: OsString,
}

impl GitRepo {
    /// Open a repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let path = match path {
            Some(p) => p.as_ref().to_path_buf(),
            None => std::env::current_dir()?,
        };
        if !path.is_dir() {
            return Err(GrowthError::NotADirectory(path));
        }
        Ok(Self {
            path,
            git: OsString::from("git"),
        })
    }

    pub fn with_git_binary(mut self, git: impl Into<OsString>) -> Self {
        self.git = git.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn run(&self, args: &[&str]) -> std::io::Result<Output> {
        debug!(cwd = %self.path.display(), ?args, "running git");
        Command::new(&self.git)
            .args(args)
            .current_dir(&self.path)
            .output()
    }
}

impl HistorySource for GitRepo {
    fn log_lines(&self) -> Vec<String> {
        let output = match self.run(&["log", LOG_FORMAT, "--reverse"]) {
            Ok(output) => output,
            Err(e) => {
                eprintln!("Failed to run: {e}");
                return Vec::new();
            }
        };

        if !output.status.success() {
            eprintln!(
                "Failed to run: {}",
                String::from_utf8_lossy(&output.stderr).trim_end()
            );
            return Vec::new();
        }

        String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn numstat(&self, range: DiffRange<'_>) -> Result<String> {
        let output = match range {
            DiffRange::Root(id) => self.run(&["diff-tree", "--numstat", "--root", id])?,
            DiffRange::Pair { previous, current } => {
                self.run(&["diff-tree", "--numstat", previous, current])?
            }
        };

        if !output.status.success() {
            return Err(GrowthError::DiffFailed {
                range: range.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
