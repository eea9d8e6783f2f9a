use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

pub const SCHEMA_VERSION: u32 = 1;

/// Length of a full SHA-1 commit id as printed by `%H`.
pub const COMMIT_ID_LEN: usize = 40;

/// One commit as listed by the log, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub id: String,
    pub timestamp: DateTime<FixedOffset>,
    pub author: String,
    pub subject: String,
}

impl CommitRecord {
    pub fn short_id(&self) -> &str {
        self.id.get(..8).unwrap_or(&self.id)
    }
}

/// Lines added and removed between two trees, binary files excluded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStat {
    pub added: u64,
    pub removed: u64,
}

impl DiffStat {
    pub fn new(added: u64, removed: u64) -> Self {
        Self { added, removed }
    }

    pub fn net(&self) -> i64 {
        self.added as i64 - self.removed as i64
    }
}

impl Add for DiffStat {
    type Output = DiffStat;

    fn add(self, rhs: DiffStat) -> DiffStat {
        DiffStat {
            added: self.added + rhs.added,
            removed: self.removed + rhs.removed,
        }
    }
}

impl Sum for DiffStat {
    fn sum<I: Iterator<Item = DiffStat>>(iter: I) -> DiffStat {
        iter.fold(DiffStat::default(), Add::add)
    }
}

/// A commit together with its diff against the previous listed commit
/// (or against the empty tree for the root).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitDelta {
    #[serde(flatten)]
    pub commit: CommitRecord,
    #[serde(flatten)]
    pub stat: DiffStat,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CumulativeSeries {
    pub dates: Vec<DateTime<FixedOffset>>,
    pub added: Vec<u64>,
    pub removed: Vec<u64>,
    pub total: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub commits: Vec<CommitDelta>,
    pub series: CumulativeSeries,
}

/// One NDJSON line: a commit with its own stat and the running totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub id: String,
    pub timestamp: DateTime<FixedOffset>,
    pub author: String,
    pub subject: String,
    pub added: u64,
    pub removed: u64,
    pub cumulative_added: u64,
    pub cumulative_removed: u64,
    pub total: i64,
}
