use crate::cli::parser::MatchAction;
use crate::config::Config;
use crate::core::clock::{DisplayFormat, to_zoned_display};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    insert_match, load_match, load_matches, load_team, load_teams, load_tournament,
    set_match_result,
};
use crate::errors::{AppError, AppResult};
use crate::models::{Match, MatchStage};
use crate::ui::messages::{header, info, success};
use crate::utils::date::parse_optional_local;
use crate::utils::score::{parse_optional_score, parse_score};
use crate::utils::table::{Column, Table};
use std::collections::HashMap;

fn parse_stage(s: &str) -> AppResult<MatchStage> {
    MatchStage::from_input(s).ok_or_else(|| AppError::Other(format!("Invalid stage: {}", s)))
}

/// A shootout winner must be one of the two teams.
fn check_shootout_winner(m: &Match, winner: Option<i64>) -> AppResult<()> {
    match winner {
        Some(id) if id != m.home_team_id && id != m.away_team_id => Err(AppError::Other(format!(
            "Shootout winner #{} is neither team #{} nor team #{}",
            id, m.home_team_id, m.away_team_id
        ))),
        _ => Ok(()),
    }
}

pub fn handle(action: &MatchAction, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    match action {
        MatchAction::Add {
            tournament,
            home,
            away,
            group,
            stage,
            at,
            score,
            shootout_winner,
        } => {
            load_tournament(&pool.conn, *tournament)?;
            if home == away {
                return Err(AppError::SameTeam(*home));
            }
            let home_team = load_team(&pool.conn, *home)?;
            let away_team = load_team(&pool.conn, *away)?;

            let stage = parse_stage(stage)?;
            let starts_at = parse_optional_local(at.as_ref())?;
            let result = parse_optional_score(score.as_ref())?;

            let mut m = Match::scheduled(0, home_team.id, away_team.id).with_stage(stage);
            m.group_name = group.as_ref().map(|g| g.trim().to_string());
            m.starts_at = starts_at;
            if let Some((h, a)) = result {
                m.home_score = h;
                m.away_score = a;
                m.is_completed = true;
            }
            check_shootout_winner(&m, *shootout_winner)?;
            m.shootout_winner_id = *shootout_winner;

            let id = insert_match(&pool.conn, *tournament, &m)?;

            let label = format!("{} vs {}", home_team.name, away_team.name);
            ttlog(&pool.conn, "match_add", &id.to_string(), &label)?;
            success(format!("Match #{} added: {} ({})", id, label, m.score_str()));
        }

        MatchAction::Result {
            id,
            score,
            shootout_winner,
        } => {
            let (h, a) = parse_score(score)?;
            let m = load_match(&pool.conn, *id)?;
            check_shootout_winner(&m, *shootout_winner)?;

            set_match_result(&pool.conn, *id, h, a, *shootout_winner)?;

            ttlog(&pool.conn, "match_result", &id.to_string(), &format!("{}:{}", h, a))?;
            success(format!("Match #{} result recorded: {}:{}", id, h, a));
        }

        MatchAction::List { tournament } => {
            let t = load_tournament(&pool.conn, *tournament)?;
            let matches = load_matches(&pool.conn, t.id)?;
            if matches.is_empty() {
                info(format!("No matches in {} yet.", t.name));
                return Ok(());
            }

            let names: HashMap<i64, String> = load_teams(&pool.conn)?
                .into_iter()
                .map(|t| (t.id, t.name))
                .collect();
            let name_of = |id: i64| names.get(&id).cloned().unwrap_or_else(|| format!("#{id}"));

            header(&t.name);

            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("Start"),
                Column::left("Stage"),
                Column::left("Home"),
                Column::left("Away"),
                Column::right("Score"),
            ])
            .with_separator(&cfg.separator_char);

            for m in matches {
                let start = m
                    .starts_at
                    .map(|dt| to_zoned_display(dt, &cfg.locale, &DisplayFormat::DateTime))
                    .unwrap_or_default();
                let stage = match (&m.stage, &m.group_name) {
                    (MatchStage::Group, Some(g)) => format!("group {}", g),
                    (s, _) => s.tag().to_string(),
                };
                table.add_row(vec![
                    m.id.to_string(),
                    start,
                    stage,
                    name_of(m.home_team_id),
                    name_of(m.away_team_id),
                    m.score_str(),
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
