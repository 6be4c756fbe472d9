use crate::cli::parser::TeamAction;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_team, load_teams};
use crate::errors::{AppError, AppResult};
use crate::models::Team;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(action: &TeamAction, cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;

    match action {
        TeamAction::Add { name, home, logo } => {
            if name.trim().is_empty() {
                return Err(AppError::Other("team name cannot be empty".to_string()));
            }

            let team = Team {
                id: 0,
                name: name.trim().to_string(),
                is_home_club: *home,
                logo_url: logo.clone(),
            };
            let id = insert_team(&pool.conn, &team)?;

            ttlog(&pool.conn, "team_add", &id.to_string(), &team.name)?;
            success(format!("Team #{} added: {}", id, team.name));
        }

        TeamAction::List => {
            let teams = load_teams(&pool.conn)?;
            if teams.is_empty() {
                info("No teams yet.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::right("ID"),
                Column::left("Team"),
                Column::left("Home"),
            ])
            .with_separator(&cfg.separator_char);

            for t in teams {
                table.add_row(vec![
                    t.id.to_string(),
                    t.name,
                    if t.is_home_club { "yes" } else { "" }.to_string(),
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
