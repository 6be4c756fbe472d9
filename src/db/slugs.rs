//! Slug uniqueness against stored rows.

use crate::core::slug::slugify;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, params};

/// Give up on numbered suffixes after this many tries.
const MAX_SUFFIX: u32 = 1000;

/// Tables whose rows carry a public slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugTable {
    Games,
    TrainingSessions,
    Tournaments,
    Albums,
    Players,
}

impl SlugTable {
    pub fn table_name(&self) -> &'static str {
        match self {
            SlugTable::Games => "games",
            SlugTable::TrainingSessions => "training_sessions",
            SlugTable::Tournaments => "tournaments",
            SlugTable::Albums => "albums",
            SlugTable::Players => "players",
        }
    }
}

/// Whether another row of `table` already uses `slug`.
/// `exclude_id` is the row being edited, which may keep its own slug.
pub fn slug_exists(
    conn: &Connection,
    table: SlugTable,
    slug: &str,
    exclude_id: Option<i64>,
) -> AppResult<bool> {
    let sql = format!(
        "SELECT id FROM {} WHERE slug = ?1 AND id != ?2 LIMIT 1",
        table.table_name()
    );

    let found: Option<i64> = conn
        .query_row(&sql, params![slug, exclude_id.unwrap_or(-1)], |row| row.get(0))
        .optional()?;

    Ok(found.is_some())
}

/// `base` if free, otherwise the first free `base-2`, `base-3`, ...
pub fn unique_slug(
    conn: &Connection,
    table: SlugTable,
    base: &str,
    exclude_id: Option<i64>,
) -> AppResult<String> {
    if !slug_exists(conn, table, base, exclude_id)? {
        return Ok(base.to_string());
    }

    for n in 2..=MAX_SUFFIX {
        let candidate = format!("{base}-{n}");
        if !slug_exists(conn, table, &candidate, exclude_id)? {
            return Ok(candidate);
        }
    }

    Err(AppError::SlugTaken(base.to_string()))
}

/// Slug chosen by an admin: used as-is, rejected if another row has it.
pub fn require_free_slug(
    conn: &Connection,
    table: SlugTable,
    slug: &str,
    exclude_id: Option<i64>,
) -> AppResult<String> {
    let normalized = slugify(slug);
    if normalized.is_empty() {
        return Err(AppError::InvalidSlug(slug.to_string()));
    }
    if slug_exists(conn, table, &normalized, exclude_id)? {
        return Err(AppError::SlugTaken(normalized));
    }
    Ok(normalized)
}

/// Explicit slug when given, otherwise a disambiguated `generated` one.
pub fn assign_slug(
    conn: &Connection,
    table: SlugTable,
    explicit: Option<&str>,
    generated: &str,
    exclude_id: Option<i64>,
) -> AppResult<String> {
    match explicit {
        Some(s) => require_free_slug(conn, table, s, exclude_id),
        None => unique_slug(conn, table, generated, exclude_id),
    }
}
