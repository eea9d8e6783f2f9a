use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::git::{GitRepo, HistorySource};
use crate::history::{collect_history, Progress};
use crate::model::{CommitDelta, CumulativeSeries};
use crate::output::{output_json, output_ndjson, output_table};
use anyhow::Context;
use tracing::info;

/// The aggregated history and its running totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Growth {
    pub history: Vec<CommitDelta>,
    pub series: CumulativeSeries,
}

impl Growth {
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

pub fn analyze<S>(source: &S, progress: &Progress) -> Result<Growth>
where
    S: HistorySource + ?Sized,
{
    let history = collect_history(source, progress)?;
    let series = CumulativeSeries::from_history(&history);
    Ok(Growth { history, series })
}

pub fn exec(config: &Config) -> anyhow::Result<()> {
    let repo = GitRepo::open(Some(&config.repo_path))?.with_git_binary(config.git_binary.clone());
    let progress = Progress::new(config.progress);

    let growth = analyze(&repo, &progress).context("Failed to collect commit history")?;
    if growth.is_empty() {
        return Ok(());
    }
    info!(commits = growth.history.len(), "history collected");

    match config.output {
        OutputFormat::Json => output_json(&growth, repo.path()),
        OutputFormat::Ndjson => output_ndjson(&growth),
        OutputFormat::Table => output_table(&growth, &config.date_format),
        OutputFormat::Chart => crate::tui::run(&growth.series, repo.path(), &config.date_format)
            .context("Failed to draw chart"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::tests::FakeSource;
    use pretty_assertions::assert_eq;

    #[test]
    fn end_to_end_two_commits() {
        let source = FakeSource::default()
            .commit(1, 1, "5\t0\tmain.rs\n")
            .commit(2, 2, "3\t2\tmain.rs\n");

        let growth = analyze(&source, &Progress::hidden()).unwrap();
        assert_eq!(growth.series.added, vec![5, 8]);
        assert_eq!(growth.series.removed, vec![0, 2]);
        assert_eq!(growth.series.total, vec![5, 6]);
    }

    #[test]
    fn empty_source_does_nothing() {
        let growth = analyze(&FakeSource::default(), &Progress::hidden()).unwrap();
        assert!(growth.is_empty());
        assert!(growth.series.is_empty());
    }

    #[test]
    fn deterministic() {
        let source = FakeSource::default()
            .commit(1, 1, "10\t0\ta\n")
            .commit(2, 3, "2\t8\ta\n")
            .commit(3, 5, "-\t-\tb.png\n1\t0\ta\n");
        let a = analyze(&source, &Progress::hidden()).unwrap();
        let b = analyze(&source, &Progress::hidden()).unwrap();
        assert_eq!(a, b);
    }
}
