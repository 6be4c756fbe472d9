use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Migrations record themselves here.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Teams, tournaments and tournament matches.
fn create_competition_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS teams (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL,
            is_home_club  INTEGER NOT NULL DEFAULT 0,
            logo_url      TEXT
        );

        CREATE TABLE IF NOT EXISTS tournaments (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            name  TEXT NOT NULL,
            slug  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS tournament_matches (
            id                  INTEGER PRIMARY KEY AUTOINCREMENT,
            tournament_id       INTEGER NOT NULL REFERENCES tournaments(id),
            stage               TEXT NOT NULL DEFAULT 'group' CHECK(stage IN ('group','playoff')),
            group_name          TEXT,
            home_team_id        INTEGER NOT NULL REFERENCES teams(id),
            away_team_id        INTEGER NOT NULL REFERENCES teams(id),
            home_score          INTEGER NOT NULL DEFAULT 0,
            away_score          INTEGER NOT NULL DEFAULT 0,
            is_completed        INTEGER NOT NULL DEFAULT 0,
            shootout_winner_id  INTEGER REFERENCES teams(id),
            starts_at           TEXT
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_tournaments_slug ON tournaments(slug);
        CREATE INDEX IF NOT EXISTS idx_tmatches_tournament ON tournament_matches(tournament_id, stage);
        "#,
    )
}

/// Public-site content: games, training sessions, albums, players.
fn create_content_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS games (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            opponent         TEXT NOT NULL,
            tournament_name  TEXT NOT NULL DEFAULT '',
            stage            TEXT NOT NULL DEFAULT 'group' CHECK(stage IN ('group','playoff')),
            starts_at        TEXT,
            slug             TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS training_sessions (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            title         TEXT NOT NULL,
            starts_at     TEXT NOT NULL,
            slug          TEXT NOT NULL,
            matches_json  TEXT NOT NULL DEFAULT '[]'
        );

        CREATE TABLE IF NOT EXISTS albums (
            id     INTEGER PRIMARY KEY AUTOINCREMENT,
            title  TEXT NOT NULL,
            slug   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS players (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name  TEXT NOT NULL,
            last_name   TEXT NOT NULL,
            number      INTEGER,
            slug        TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_games_slug ON games(slug);
        CREATE UNIQUE INDEX IF NOT EXISTS idx_training_slug ON training_sessions(slug);
        CREATE UNIQUE INDEX IF NOT EXISTS idx_albums_slug ON albums(slug);
        CREATE UNIQUE INDEX IF NOT EXISTS idx_players_slug ON players(slug);
        "#,
    )
}

type Migration = (&'static str, &'static str, fn(&Connection) -> Result<()>);

const MIGRATIONS: [Migration; 2] = [
    (
        "20240301_0001_competition_tables",
        "Created teams, tournaments and tournament_matches",
        create_competition_tables,
    ),
    (
        "20240315_0002_content_tables",
        "Created games, training_sessions, albums and players",
        create_content_tables,
    ),
];

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for (version, message, apply) in MIGRATIONS {
        if migration_applied(conn, version)? {
            continue;
        }

        apply(conn)?;
        mark_applied(conn, version, message)?;

        success(format!("Migration applied: {} → {}", version, message));
    }

    Ok(())
}
