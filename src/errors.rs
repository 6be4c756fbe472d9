//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),

    #[error("Invalid score: {0} (expected HOME:AWAY)")]
    InvalidScore(String),

    #[error("Invalid login: {0}")]
    InvalidLogin(String),

    #[error("Rate limit reached for {0}: retry in {1}s")]
    RateLimited(String, u64),

    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Lookup / validation errors
    // ---------------------------
    #[error("Team not found: {0}")]
    TeamNotFound(i64),

    #[error("Tournament not found: {0}")]
    TournamentNotFound(i64),

    #[error("Match not found: {0}")]
    MatchNotFound(i64),

    #[error("A match needs two different teams (got {0} twice)")]
    SameTeam(i64),

    #[error("Slug already taken: {0}")]
    SlugTaken(String),

    #[error("Invalid slug: {0:?}")]
    InvalidSlug(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
