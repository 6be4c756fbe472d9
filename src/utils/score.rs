//! Score arguments (`3:1`, `2-2`).

use crate::errors::{AppError, AppResult};

/// Parse `HOME:AWAY`; `-` is accepted as separator too.
pub fn parse_score(s: &str) -> AppResult<(i32, i32)> {
    let invalid = || AppError::InvalidScore(s.to_string());

    let (home, away) = s.trim().split_once([':', '-']).ok_or_else(invalid)?;
    let home: i32 = home.trim().parse().map_err(|_| invalid())?;
    let away: i32 = away.trim().parse().map_err(|_| invalid())?;

    if home < 0 || away < 0 {
        return Err(invalid());
    }
    Ok((home, away))
}

pub fn parse_optional_score(input: Option<&String>) -> AppResult<Option<(i32, i32)>> {
    input.map(|s| parse_score(s)).transpose()
}
