use crate::model::{CommitDelta, CumulativeSeries, GrowthPoint};
use chrono::{DateTime, FixedOffset};

impl CumulativeSeries {
    /// Running totals over `history`, which must already be in log order.
    pub fn from_history(history: &[CommitDelta]) -> Self {
        let mut series = CumulativeSeries {
            dates: Vec::with_capacity(history.len()),
            added: Vec::with_capacity(history.len()),
            removed: Vec::with_capacity(history.len()),
            total: Vec::with_capacity(history.len()),
        };

        let (mut added, mut removed) = (0u64, 0u64);
        for delta in history {
            added += delta.stat.added;
            removed += delta.stat.removed;
            series.dates.push(delta.commit.timestamp);
            series.added.push(added);
            series.removed.push(removed);
            series.total.push(added as i64 - removed as i64);
        }
        series
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn last(&self) -> Option<(DateTime<FixedOffset>, u64, u64, i64)> {
        let i = self.len().checked_sub(1)?;
        Some((self.dates[i], self.added[i], self.removed[i], self.total[i]))
    }

    /// Per-commit rows combining `history` with the running totals.
    pub fn points(&self, history: &[CommitDelta]) -> Vec<GrowthPoint> {
        history
            .iter()
            .zip(self.added.iter().zip(&self.removed).zip(&self.total))
            .map(|(delta, ((&cumulative_added, &cumulative_removed), &total))| GrowthPoint {
                id: delta.commit.id.clone(),
                timestamp: delta.commit.timestamp,
                author: delta.commit.author.clone(),
                subject: delta.commit.subject.clone(),
                added: delta.stat.added,
                removed: delta.stat.removed,
                cumulative_added,
                cumulative_removed,
                total,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CommitRecord, DiffStat};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn delta(day: u32, added: u64, removed: u64) -> CommitDelta {
        let tz = FixedOffset::east_opt(0).unwrap();
        CommitDelta {
            commit: CommitRecord {
                id: format!("{day:040x}"),
                timestamp: tz.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap(),
                author: "dev@example.com".to_string(),
                subject: format!("day {day}"),
            },
            stat: DiffStat::new(added, removed),
        }
    }

    #[test]
    fn two_commit_history() {
        let series = CumulativeSeries::from_history(&[delta(1, 5, 0), delta(2, 3, 2)]);
        assert_eq!(series.added, vec![5, 8]);
        assert_eq!(series.removed, vec![0, 2]);
        assert_eq!(series.total, vec![5, 6]);
        assert_eq!(series.dates.len(), 2);
    }

    #[test]
    fn empty_history_is_empty_series() {
        let series = CumulativeSeries::from_history(&[]);
        assert!(series.is_empty());
        assert_eq!(series.last(), None);
    }

    #[test]
    fn totals_can_go_negative_and_stay_consistent() {
        let history = [delta(1, 2, 0), delta(2, 0, 10), delta(3, 1, 1), delta(4, 7, 3)];
        let series = CumulativeSeries::from_history(&history);

        assert_eq!(series.total, vec![2, -8, -8, -4]);
        for i in 0..series.len() {
            assert_eq!(series.total[i], series.added[i] as i64 - series.removed[i] as i64);
            if i > 0 {
                assert!(series.added[i] >= series.added[i - 1]);
                assert!(series.removed[i] >= series.removed[i - 1]);
            }
        }
    }

    #[test]
    fn points_carry_own_and_running_counts() {
        let history = [delta(1, 5, 0), delta(2, 3, 2)];
        let series = CumulativeSeries::from_history(&history);
        let points = series.points(&history);

        assert_eq!(points.len(), 2);
        assert_eq!((points[1].added, points[1].removed), (3, 2));
        assert_eq!((points[1].cumulative_added, points[1].cumulative_removed), (8, 2));
        assert_eq!(points[1].total, 6);
        assert_eq!(series.last().map(|l| l.3), Some(6));
    }
}
