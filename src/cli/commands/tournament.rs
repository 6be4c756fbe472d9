use crate::cli::parser::TournamentAction;
use crate::config::Config;
use crate::core::slug::slugify;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_tournament, load_tournaments};
use crate::db::slugs::{SlugTable, assign_slug};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(action: &TournamentAction, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    match action {
        TournamentAction::Add { name, slug } => {
            let generated = slugify(name);
            if generated.is_empty() && slug.is_none() {
                return Err(AppError::InvalidSlug(name.clone()));
            }

            let slug = assign_slug(
                &pool.conn,
                SlugTable::Tournaments,
                slug.as_deref(),
                &generated,
                None,
            )?;
            let id = insert_tournament(&pool.conn, name, &slug)?;

            ttlog(&pool.conn, "tournament_add", &slug, name.trim())?;
            success(format!("Tournament #{} added: {} [{}]", id, name.trim(), slug));
        }

        TournamentAction::List => {
            let tournaments = load_tournaments(&pool.conn)?;
            if tournaments.is_empty() {
                info("No tournaments yet.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("Tournament"),
                Column::left("Slug"),
            ])
            .with_separator(&cfg.separator_char);

            for t in tournaments {
                table.add_row(vec![t.id.to_string(), t.name, t.slug]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
