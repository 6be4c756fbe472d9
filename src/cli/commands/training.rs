use crate::cli::parser::TrainingAction;
use crate::config::Config;
use crate::core::clock::belgrade_date;
use crate::core::slug::slugify;
use crate::core::stats::{aggregate_training_stats, parse_training_matches};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_training_session, load_training_sessions};
use crate::db::slugs::{SlugTable, assign_slug};
use crate::errors::{AppError, AppResult};
use crate::models::TrainingMatch;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::parse_local_arg;
use crate::utils::table::{Column, Table};
use serde_json::Value;
use std::fs;

pub fn handle(action: &TrainingAction, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    match action {
        TrainingAction::Add {
            title,
            at,
            file,
            slug,
        } => {
            if title.trim().is_empty() {
                return Err(AppError::Other("training title cannot be empty".to_string()));
            }
            let starts_at = parse_local_arg(at)?;

            let matches = match file {
                Some(path) => read_scrimmages(path)?,
                None => Vec::new(),
            };

            let generated = format!("{}-{}", belgrade_date(starts_at).format("%Y-%m-%d"), slugify(title));
            let generated = generated.trim_end_matches('-').to_string();
            let slug = assign_slug(
                &pool.conn,
                SlugTable::TrainingSessions,
                slug.as_deref(),
                &generated,
                None,
            )?;

            // stored in normalized form
            let matches_json = serde_json::to_string(&matches)?;
            let id = insert_training_session(&pool.conn, title, starts_at, &slug, &matches_json)?;

            ttlog(
                &pool.conn,
                "training_add",
                &slug,
                &format!("{} ({} scrimmages)", title.trim(), matches.len()),
            )?;
            success(format!(
                "Training #{} added: {} [{}], {} scrimmage(s)",
                id,
                title.trim(),
                slug,
                matches.len()
            ));
        }

        TrainingAction::Stats => {
            let sessions = load_training_sessions(&pool.conn)?;
            let matches: Vec<TrainingMatch> =
                sessions.into_iter().flat_map(|s| s.matches).collect();

            let stats = aggregate_training_stats(&matches);
            if stats.is_empty() {
                info("No training scrimmages recorded yet.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::right("#"),
                Column::right("Player"),
                Column::right("M"),
                Column::right("W"),
                Column::right("D"),
                Column::right("L"),
                Column::right("G"),
                Column::right("A"),
                Column::right("Pts"),
            ])
            .with_separator(&cfg.separator_char);

            for (i, s) in stats.iter().enumerate() {
                table.add_row(vec![
                    (i + 1).to_string(),
                    s.player_id.to_string(),
                    s.matches.to_string(),
                    s.wins.to_string(),
                    s.draws.to_string(),
                    s.losses.to_string(),
                    s.goals.to_string(),
                    s.assists.to_string(),
                    s.points().to_string(),
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}

/// Scrimmage log from a JSON file. The file must be valid JSON; the
/// entries themselves are parsed leniently.
fn read_scrimmages(path: &str) -> AppResult<Vec<TrainingMatch>> {
    let raw = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&raw)?;

    let expected = match &value {
        Value::Array(items) => items.len(),
        Value::Object(_) => 1,
        _ => {
            return Err(AppError::Other(format!(
                "{}: expected a JSON array of scrimmages",
                path
            )));
        }
    };

    let matches = parse_training_matches(&value);
    if matches.len() < expected {
        warning(format!(
            "{} of {} entries in {} skipped (not objects)",
            expected - matches.len(),
            expected,
            path
        ));
    }
    Ok(matches)
}
