use crate::model::DiffStat;
use tracing::warn;

/// Placeholder git prints instead of counts for binary files.
const BINARY_MARKER: &str = "-";

/// Sum `added<TAB>removed<TAB>path` lines from `git diff-tree --numstat`.
///
/// Lines without exactly three fields are ignored, as are binary entries.
pub fn parse_numstat(output: &str) -> DiffStat {
    output
        .lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split('\t').collect();
            let [added, removed, _path] = fields.as_slice() else {
                return None;
            };
            if *added == BINARY_MARKER || *removed == BINARY_MARKER {
                return None;
            }
            match (added.parse::<u64>(), removed.parse::<u64>()) {
                (Ok(a), Ok(r)) => Some(DiffStat::new(a, r)),
                _ => {
                    warn!(line = %line, "skipping numstat line with non-numeric counts");
                    None
                }
            }
        })
        .sum()
}
