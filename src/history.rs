//! Walks the log oldest-first and attaches a diff stat to every commit.
//!
//! Each commit is diffed against the commit listed just before it, which is
//! only meaningful for linear history: on merged histories the stat is the
//! tree difference between two neighbours in date order, not the change the
//! commit introduced.

use crate::error::Result;
use crate::git::{DiffRange, HistorySource};
use crate::model::CommitDelta;
use crate::parse::{parse_log_line, parse_numstat};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

/// A notice is printed after every this many commits.
pub const PROGRESS_INTERVAL: usize = 100;

/// Progress notices on stdout plus a spinner on stderr.
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    pub fn new(enabled: bool) -> Self {
        if !enabled {
            return Self::hidden();
        }
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar: Some(bar) }
    }

    pub fn hidden() -> Self {
        Self { bar: None }
    }

    fn start(&self, total: usize) {
        if let Some(bar) = &self.bar {
            bar.set_length(total as u64);
            bar.suspend(|| println!("Parsing {total} commits ..."));
        }
    }

    fn advance(&self, parsed: usize) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
            if is_report_point(parsed) {
                bar.suspend(|| println!("Parsed {parsed} so far"));
            }
        }
    }

    fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

fn is_report_point(parsed: usize) -> bool {
    parsed > 0 && parsed % PROGRESS_INTERVAL == 0
}

/// Pair every logged commit with its diff stat, oldest first.
///
/// An empty log is not an error: a notice goes to stderr and the result is
/// empty. A diff that cannot be fetched aborts the whole walk.
pub fn collect_history<S>(source: &S, progress: &Progress) -> Result<Vec<CommitDelta>>
where
    S: HistorySource + ?Sized,
{
    let lines = source.log_lines();
    let Some((first, rest)) = lines.split_first() else {
        eprintln!("No commits found");
        return Ok(Vec::new());
    };

    info!(commits = lines.len(), "collecting history");
    progress.start(lines.len());

    let root = parse_log_line(first)?;
    let stat = parse_numstat(&source.numstat(DiffRange::Root(&root.id))?);
    progress.advance(0);

    let mut previous_id = root.id.clone();
    let mut deltas = Vec::with_capacity(lines.len());
    deltas.push(CommitDelta { commit: root, stat });

    for (parsed, line) in (1..).zip(rest) {
        let commit = parse_log_line(line)?;
        let range = DiffRange::Pair {
            previous: &previous_id,
            current: &commit.id,
        };
        let stat = parse_numstat(&source.numstat(range)?);
        debug!(id = commit.short_id(), added = stat.added, removed = stat.removed, "commit");

        previous_id.clone_from(&commit.id);
        deltas.push(CommitDelta { commit, stat });
        progress.advance(parsed);
    }

    progress.finish();
    Ok(deltas)
}
