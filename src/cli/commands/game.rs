use crate::cli::parser::GameAction;
use crate::config::Config;
use crate::core::clock::{DisplayFormat, to_zoned_display};
use crate::core::slug::{MatchSlugParts, build_match_slug};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_game, load_games};
use crate::db::slugs::{SlugTable, assign_slug};
use crate::errors::{AppError, AppResult};
use crate::models::{Game, MatchStage};
use crate::ui::messages::{info, success};
use crate::utils::date::parse_optional_local;
use crate::utils::table::{Column, Table};

pub fn handle(action: &GameAction, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    match action {
        GameAction::Add {
            opponent,
            tournament,
            stage,
            at,
            slug,
        } => {
            if opponent.trim().is_empty() {
                return Err(AppError::Other("opponent cannot be empty".to_string()));
            }
            let stage = MatchStage::from_input(stage)
                .ok_or_else(|| AppError::Other(format!("Invalid stage: {}", stage)))?;
            let starts_at = parse_optional_local(at.as_ref())?;

            // the slug date is the Belgrade date the admin typed
            let generated = build_match_slug(&MatchSlugParts {
                date: at.as_deref(),
                opponent_name: opponent,
                tournament_name: tournament,
                stage,
            });
            let slug = assign_slug(&pool.conn, SlugTable::Games, slug.as_deref(), &generated, None)?;

            let game = Game {
                id: 0,
                opponent: opponent.trim().to_string(),
                tournament_name: tournament.trim().to_string(),
                stage,
                starts_at,
                slug,
            };
            let id = insert_game(&pool.conn, &game)?;

            ttlog(&pool.conn, "game_add", &game.slug, &game.opponent)?;
            success(format!("Game #{} added: {} [{}]", id, game.opponent, game.slug));
        }

        GameAction::List { locale } => {
            let games = load_games(&pool.conn)?;
            if games.is_empty() {
                info("No games scheduled.");
                return Ok(());
            }

            let locale = locale.as_deref().unwrap_or(&cfg.locale);

            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("When"),
                Column::left("Opponent"),
                Column::left("Tournament"),
                Column::left("Stage"),
                Column::left("Slug"),
            ])
            .with_separator(&cfg.separator_char);

            for g in games {
                let when = g
                    .starts_at
                    .map(|dt| to_zoned_display(dt, locale, &DisplayFormat::WeekdayDate))
                    .unwrap_or_default();
                let time = g
                    .starts_at
                    .map(|dt| to_zoned_display(dt, locale, &DisplayFormat::Time))
                    .unwrap_or_default();

                table.add_row(vec![
                    g.id.to_string(),
                    format!("{} {}", when, time).trim().to_string(),
                    g.opponent,
                    g.tournament_name,
                    g.stage.tag().to_string(),
                    g.slug,
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
