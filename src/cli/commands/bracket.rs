use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{DisplayFormat, to_zoned_display};
use crate::core::standings::bracket_progress;
use crate::db::pool::DbPool;
use crate::db::queries::{load_matches, load_tournament, load_tournament_teams};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREY, RESET, color_for_result};

/// Handle the `bracket` command: one line per playoff match.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Bracket { tournament } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let t = load_tournament(&pool.conn, *tournament)?;
        let teams = load_tournament_teams(&pool.conn, t.id)?;
        let matches = load_matches(&pool.conn, t.id)?;

        let entries = bracket_progress(&teams, &matches);
        if entries.is_empty() {
            info(format!("No playoff matches in {} yet.", t.name));
            return Ok(());
        }

        header(format!("{} · playoff", t.name));

        for e in &entries {
            let when = e
                .starts_at
                .map(|dt| to_zoned_display(dt, &cfg.locale, &DisplayFormat::DateTime))
                .unwrap_or_else(|| "--".to_string());

            let score = if e.is_completed {
                let colour = color_for_result(e.home_score, e.away_score, true);
                format!("{colour}{}:{}{RESET}", e.home_score, e.away_score)
            } else {
                format!("{GREY}-:-{RESET}")
            };

            let outcome = match e.winner_name() {
                Some(name) if e.decided_by_shootout => format!("→ {} (SO)", name),
                Some(name) => format!("→ {}", name),
                None if e.is_completed => "→ undecided".to_string(),
                None => String::new(),
            };

            println!(
                "#{:<4} {:<24} {} vs {}  {}  {}",
                e.match_id, when, e.home_team, e.away_team, score, outcome
            );
        }
    }

    Ok(())
}
