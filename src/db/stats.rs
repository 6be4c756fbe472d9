use crate::core::clock::{DisplayFormat, display_iso};
use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

const COUNTED_TABLES: [(&str, &str); 6] = [
    ("teams", "Teams"),
    ("tournaments", "Tournaments"),
    ("tournament_matches", "Tournament matches"),
    ("games", "Club games"),
    ("training_sessions", "Training sessions"),
    ("players", "Players"),
];

/// `db --info`: file, row counts and the span of the game schedule.
pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    let bytes = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);

    println!();
    println!("{CYAN}• File:{RESET} {YELLOW}{db_path}{RESET}");
    println!("{CYAN}• Size:{RESET} {:.1} KiB", bytes as f64 / 1024.0);

    for (table, label) in COUNTED_TABLES {
        let count: i64 =
            pool.conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
        println!("{CYAN}• {label}:{RESET} {GREEN}{count}{RESET}");
    }

    // RFC 3339 UTC text sorts chronologically
    let (first, last): (Option<String>, Option<String>) = pool.conn.query_row(
        "SELECT MIN(starts_at), MAX(starts_at) FROM games WHERE starts_at IS NOT NULL",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let shown = |v: Option<String>| {
        let s = display_iso(v.as_deref(), "en", &DisplayFormat::DateTime);
        if s.is_empty() { format!("{GREY}--{RESET}") } else { s }
    };

    println!("{CYAN}• Game schedule (Belgrade):{RESET}");
    println!("    from: {}", shown(first));
    println!("    to:   {}", shown(last));
    println!();

    Ok(())
}
