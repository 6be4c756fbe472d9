use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use rusqlite::Connection;

/// `PRAGMA integrity_check` plus dangling references
/// (a match pointing at a deleted team, and so on).
fn check_database(conn: &Connection) -> AppResult<bool> {
    let integrity: String = conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    if integrity != "ok" {
        warning(format!("Integrity check failed: {}", integrity));
        return Ok(false);
    }

    let mut stmt = conn.prepare("PRAGMA foreign_key_check;")?;
    let dangling: Vec<(String, i64, String)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
        .collect::<Result<_, _>>()?;

    for (table, rowid, parent) in &dangling {
        warning(format!("{} row {} references a missing {} row", table, rowid, parent));
    }
    Ok(dangling.is_empty())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    // opening the pool already applies pending migrations
    let mut pool = DbPool::new(&cfg.database)?;

    if *migrate {
        info("Running migrations…");
        run_pending_migrations(&pool.conn).map_err(|e| AppError::Migration(e.to_string()))?;
        success("Schema is up to date.");
    }

    if *show_info {
        stats::print_db_info(&mut pool, &cfg.database)?;
    }

    if *check {
        info("Checking database…");
        if check_database(&pool.conn)? {
            success("Integrity check passed.");
        }
    }

    if *vacuum {
        info("Running VACUUM…");
        pool.conn.execute_batch("VACUUM;")?;
        success("Vacuum completed.");
    }

    Ok(())
}
