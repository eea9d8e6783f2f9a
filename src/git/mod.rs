pub mod repo;

pub use repo::{GitRepo, LOG_FORMAT};

use crate::error::Result;
use std::fmt;

/// Which pair of trees a numstat is computed between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffRange<'a> {
    /// The first commit in history, diffed against the empty tree.
    Root(&'a str),
    Pair { previous: &'a str, current: &'a str },
}

impl fmt::Display for DiffRange<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffRange::Root(id) => write!(f, "--root {id}"),
            DiffRange::Pair { previous, current } => write!(f, "{previous}..{current}"),
        }
    }
}

/// The two things the pipeline needs from version control.
pub trait HistorySource {
    /// Raw log lines, oldest first. A failing listing yields an empty list.
    fn log_lines(&self) -> Vec<String>;

    /// Raw `--numstat` output for `range`. A failing diff is an error.
    fn numstat(&self, range: DiffRange<'_>) -> Result<String>;
}
