//! Entry timestamps in the fixed `dd/mm/yy HH:MM` format

use crate::error::{MamaError, Result};
use chrono::{Local, NaiveDateTime, Timelike};

/// Textual timestamp format shared by list lines and storage lines
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%y %H:%M";

/// Current local time truncated to the minute.
///
/// Storage keeps minute precision only, so anything finer would not survive a
/// save/load cycle.
pub fn now() -> NaiveDateTime {
    truncate_to_minute(Local::now().naive_local())
}

pub fn truncate_to_minute(when: NaiveDateTime) -> NaiveDateTime {
    when.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(when)
}

pub fn format(when: &NaiveDateTime) -> String {
    when.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a `dd/mm/yy HH:MM` timestamp
pub fn parse(input: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input.trim(), TIMESTAMP_FORMAT)
        .map_err(|e| MamaError::Storage(format!("bad timestamp '{}': {}", input, e)))
}
