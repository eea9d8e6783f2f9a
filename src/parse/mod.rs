pub mod commit;
pub mod numstat;

pub use commit::{parse_log_line, parse_timestamp, LOG_FIELD_SEPARATOR};
pub use numstat::parse_numstat;
