use crate::error::{GrowthError, Result};
use crate::model::{CommitRecord, COMMIT_ID_LEN};
use chrono::{DateTime, FixedOffset};

/// Separates timestamp, committer email and subject in a log line.
pub const LOG_FIELD_SEPARATOR: char = ';';

/// Parse one `%H%cI;%ce;%s` line.
///
/// The id is the fixed-width prefix, the rest is split on the first two
/// separators only since the subject is free text.
pub fn parse_log_line(line: &str) -> Result<CommitRecord> {
    let id = line
        .get(..COMMIT_ID_LEN)
        .ok_or_else(|| GrowthError::malformed(line, "shorter than a commit id"))?;
    if !id.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(GrowthError::malformed(line, "commit id is not hexadecimal"));
    }

    let mut fields = line[COMMIT_ID_LEN..].splitn(3, LOG_FIELD_SEPARATOR);
    let (Some(raw_time), Some(author), Some(subject)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(GrowthError::malformed(line, "expected timestamp;email;subject"));
    };

    Ok(CommitRecord {
        id: id.to_string(),
        timestamp: parse_timestamp(raw_time)?,
        author: author.to_string(),
        subject: subject.to_string(),
    })
}

/// Accepts strict ISO-8601 (`+01:00`) as well as the colon-less `+0100` offset.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z"))
        .map_err(|source| GrowthError::InvalidTimestamp {
            raw: raw.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    const ID: &str = "0123456789abcdef0123456789abcdef01234567";

    fn plus_one() -> FixedOffset {
        FixedOffset::east_opt(3600).unwrap()
    }

    #[test]
    fn parses_colonless_offset_line() {
        let line = format!("{ID}2024-01-15T10:30:00+0100;dev@example.com;Fix bug in parser");
        let record = parse_log_line(&line).unwrap();

        assert_eq!(record.id, ID);
        assert_eq!(
            record.timestamp,
            plus_one().with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
        );
        assert_eq!(record.timestamp.offset().local_minus_utc(), 3600);
        assert_eq!(record.author, "dev@example.com");
        assert_eq!(record.subject, "Fix bug in parser");
    }

    #[test]
    fn parses_strict_iso_offset() {
        let line = format!("{ID}2024-01-15T10:30:00+01:00;dev@example.com;x");
        let record = parse_log_line(&line).unwrap();
        assert_eq!(
            record.timestamp,
            plus_one().with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
        );
    }

    #[test]
    fn subject_keeps_separators() {
        let line = format!("{ID}2024-01-15T10:30:00+00:00;a@b.c;fix: a; b; c");
        let record = parse_log_line(&line).unwrap();
        assert_eq!(record.author, "a@b.c");
        assert_eq!(record.subject, "fix: a; b; c");
    }

    #[test]
    fn empty_subject_is_allowed() {
        let line = format!("{ID}2024-01-15T10:30:00+00:00;a@b.c;");
        assert_eq!(parse_log_line(&line).unwrap().subject, "");
    }

    #[test]
    fn rejects_short_line() {
        let err = parse_log_line("abc123").unwrap_err();
        assert!(matches!(err, GrowthError::MalformedLogLine { .. }));
    }

    #[test]
    fn rejects_non_hex_id() {
        let line = format!("{}2024-01-15T10:30:00+00:00;a@b.c;x", "z".repeat(40));
        assert!(matches!(
            parse_log_line(&line),
            Err(GrowthError::MalformedLogLine { .. })
        ));
    }

    #[test]
    fn rejects_missing_fields() {
        let line = format!("{ID}2024-01-15T10:30:00+00:00;a@b.c");
        assert!(matches!(
            parse_log_line(&line),
            Err(GrowthError::MalformedLogLine { .. })
        ));
    }

    #[test]
    fn rejects_bad_timestamp() {
        let line = format!("{ID}yesterday;a@b.c;x");
        assert!(matches!(
            parse_log_line(&line),
            Err(GrowthError::InvalidTimestamp { .. })
        ));
    }

    #[test]
    fn multibyte_text_before_id_width_is_rejected_not_panicking() {
        let line = "é".repeat(30);
        assert!(parse_log_line(&line).is_err());
    }
}
