//! Parsing of date-time arguments typed on the command line.
//! Everything the user types is Belgrade wall-clock time.

use crate::core::clock;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};

/// `YYYY-MM-DDTHH:MM` (or with a space) in Belgrade time → UTC instant.
pub fn parse_local_arg(s: &str) -> AppResult<DateTime<Utc>> {
    clock::local_wall_clock_to_utc(s).ok_or_else(|| AppError::InvalidDateTime(s.to_string()))
}

pub fn parse_optional_local(input: Option<&String>) -> AppResult<Option<DateTime<Utc>>> {
    input.map(|s| parse_local_arg(s)).transpose()
}
