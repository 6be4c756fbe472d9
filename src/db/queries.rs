use crate::core::{clock, stats};
use crate::errors::{AppError, AppResult};
use crate::models::{Game, Match, MatchStage, Team, Tournament, TrainingSession};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

fn get_stage(row: &Row, col: &str) -> Result<MatchStage> {
    let raw: String = row.get(col)?;
    MatchStage::from_db_str(&raw)
        .ok_or_else(|| conversion_error(0, AppError::Other(format!("Invalid stage: {}", raw))))
}

fn get_instant(row: &Row, col: &str) -> Result<Option<DateTime<Utc>>> {
    let raw: Option<String> = row.get(col)?;
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => clock::parse_utc(&s)
            .map(Some)
            .ok_or_else(|| conversion_error(0, AppError::InvalidDateTime(s))),
    }
}

fn to_db_instant(dt: Option<DateTime<Utc>>) -> Option<String> {
    dt.map(|d| d.to_rfc3339())
}

// ---------------------------
// Teams
// ---------------------------

pub fn map_team(row: &Row) -> Result<Team> {
    Ok(Team {
        id: row.get("id")?,
        name: row.get("name")?,
        is_home_club: row.get::<_, i32>("is_home_club")? == 1,
        logo_url: row.get("logo_url")?,
    })
}

pub fn insert_team(conn: &Connection, team: &Team) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO teams (name, is_home_club, logo_url) VALUES (?1, ?2, ?3)",
        params![
            team.name.trim(),
            if team.is_home_club { 1 } else { 0 },
            team.logo_url
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_teams(conn: &Connection) -> AppResult<Vec<Team>> {
    let mut stmt = conn.prepare("SELECT * FROM teams ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_team)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_team(conn: &Connection, id: i64) -> AppResult<Team> {
    conn.query_row("SELECT * FROM teams WHERE id = ?1", [id], map_team)
        .optional()?
        .ok_or(AppError::TeamNotFound(id))
}

/// Teams that appear in at least one match of a tournament, by id.
pub fn load_tournament_teams(conn: &Connection, tournament_id: i64) -> AppResult<Vec<Team>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM teams
         WHERE id IN (
            SELECT home_team_id FROM tournament_matches WHERE tournament_id = ?1
            UNION
            SELECT away_team_id FROM tournament_matches WHERE tournament_id = ?1
         )
         ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([tournament_id], map_team)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Tournaments
// ---------------------------

fn map_tournament(row: &Row) -> Result<Tournament> {
    Ok(Tournament {
        id: row.get("id")?,
        name: row.get("name")?,
        slug: row.get("slug")?,
    })
}

pub fn insert_tournament(conn: &Connection, name: &str, slug: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO tournaments (name, slug) VALUES (?1, ?2)",
        params![name.trim(), slug],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_tournaments(conn: &Connection) -> AppResult<Vec<Tournament>> {
    let mut stmt = conn.prepare("SELECT * FROM tournaments ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_tournament)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_tournament(conn: &Connection, id: i64) -> AppResult<Tournament> {
    conn.query_row("SELECT * FROM tournaments WHERE id = ?1", [id], map_tournament)
        .optional()?
        .ok_or(AppError::TournamentNotFound(id))
}

// ---------------------------
// Tournament matches
// ---------------------------

pub fn map_match(row: &Row) -> Result<Match> {
    Ok(Match {
        id: row.get("id")?,
        home_team_id: row.get("home_team_id")?,
        away_team_id: row.get("away_team_id")?,
        home_score: row.get("home_score")?,
        away_score: row.get("away_score")?,
        is_completed: row.get::<_, i32>("is_completed")? == 1,
        stage: get_stage(row, "stage")?,
        group_name: row.get("group_name")?,
        shootout_winner_id: row.get("shootout_winner_id")?,
        starts_at: get_instant(row, "starts_at")?,
    })
}

pub fn insert_match(conn: &Connection, tournament_id: i64, m: &Match) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO tournament_matches
            (tournament_id, stage, group_name, home_team_id, away_team_id,
             home_score, away_score, is_completed, shootout_winner_id, starts_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            tournament_id,
            m.stage.to_db_str(),
            m.group_name,
            m.home_team_id,
            m.away_team_id,
            m.home_score,
            m.away_score,
            if m.is_completed { 1 } else { 0 },
            m.shootout_winner_id,
            to_db_instant(m.starts_at),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All matches of a tournament, ordered by start time then id.
pub fn load_matches(conn: &Connection, tournament_id: i64) -> AppResult<Vec<Match>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM tournament_matches
         WHERE tournament_id = ?1
         ORDER BY starts_at IS NULL, starts_at ASC, id ASC",
    )?;
    let rows = stmt.query_map([tournament_id], map_match)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Record a final score and mark the match completed.
pub fn set_match_result(
    conn: &Connection,
    match_id: i64,
    home_score: i32,
    away_score: i32,
    shootout_winner_id: Option<i64>,
) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE tournament_matches
         SET home_score = ?1, away_score = ?2, is_completed = 1, shootout_winner_id = ?3
         WHERE id = ?4",
        params![home_score, away_score, shootout_winner_id, match_id],
    )?;

    if changed == 0 {
        return Err(AppError::MatchNotFound(match_id));
    }
    Ok(())
}

pub fn load_match(conn: &Connection, match_id: i64) -> AppResult<Match> {
    conn.query_row(
        "SELECT * FROM tournament_matches WHERE id = ?1",
        [match_id],
        map_match,
    )
    .optional()?
    .ok_or(AppError::MatchNotFound(match_id))
}

// ---------------------------
// Club games
// ---------------------------

fn map_game(row: &Row) -> Result<Game> {
    Ok(Game {
        id: row.get("id")?,
        opponent: row.get("opponent")?,
        tournament_name: row.get("tournament_name")?,
        stage: get_stage(row, "stage")?,
        starts_at: get_instant(row, "starts_at")?,
        slug: row.get("slug")?,
    })
}

pub fn insert_game(conn: &Connection, game: &Game) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO games (opponent, tournament_name, stage, starts_at, slug)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            game.opponent.trim(),
            game.tournament_name.trim(),
            game.stage.to_db_str(),
            to_db_instant(game.starts_at),
            game.slug,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_games(conn: &Connection) -> AppResult<Vec<Game>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM games ORDER BY starts_at IS NULL, starts_at ASC, id ASC",
    )?;
    let rows = stmt.query_map([], map_game)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Training sessions
// ---------------------------

fn map_training_session(row: &Row) -> Result<TrainingSession> {
    let raw_json: String = row.get("matches_json")?;
    let starts_at = get_instant(row, "starts_at")?.ok_or_else(|| {
        conversion_error(0, AppError::InvalidDateTime("missing starts_at".to_string()))
    })?;

    Ok(TrainingSession {
        id: row.get("id")?,
        title: row.get("title")?,
        slug: row.get("slug")?,
        starts_at,
        matches: stats::parse_training_matches_str(&raw_json),
    })
}

pub fn insert_training_session(
    conn: &Connection,
    title: &str,
    starts_at: DateTime<Utc>,
    slug: &str,
    matches_json: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO training_sessions (title, starts_at, slug, matches_json)
         VALUES (?1, ?2, ?3, ?4)",
        params![title.trim(), starts_at.to_rfc3339(), slug, matches_json],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_training_sessions(conn: &Connection) -> AppResult<Vec<TrainingSession>> {
    let mut stmt = conn.prepare("SELECT * FROM training_sessions ORDER BY starts_at ASC, id ASC")?;
    let rows = stmt.query_map([], map_training_session)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Log
// ---------------------------

/// Rows of the internal log, oldest first: (id, date, operation, target, message).
pub fn load_log(conn: &Connection) -> AppResult<Vec<(i64, String, String, String, String)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
