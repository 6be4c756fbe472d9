use crate::cli::parser::{Commands, OutputFormat};
use crate::config::Config;
use crate::core::standings::tournament_standings;
use crate::db::pool::DbPool;
use crate::db::queries::{load_matches, load_tournament, load_tournament_teams};
use crate::errors::AppResult;
use crate::export::write_standings;
use crate::models::GroupStandings;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{home_club_marker, signed};
use crate::utils::table::{Column, Table};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Standings {
        tournament,
        group,
        format,
        file,
        force,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let t = load_tournament(&pool.conn, *tournament)?;
        let teams = load_tournament_teams(&pool.conn, t.id)?;
        let matches = load_matches(&pool.conn, t.id)?;

        let groups = tournament_standings(&teams, &matches, group.as_deref());

        match format {
            OutputFormat::Table => {
                if groups.iter().all(|g| g.rows.is_empty()) {
                    info(format!("No standings for {} yet.", t.name));
                    return Ok(());
                }
                header(&t.name);
                for g in &groups {
                    print_group(g, cfg);
                }
            }
            _ => write_standings(&groups, *format, file.as_deref().map(Path::new), *force)?,
        }
    }

    Ok(())
}

fn print_group(g: &GroupStandings, cfg: &Config) {
    if let Some(name) = &g.group {
        println!("\nGroup {}", name);
    }

    let mut table = Table::new(vec![
        Column::right("Pos"),
        Column::left("Team"),
        Column::right("GP"),
        Column::right("W"),
        Column::right("D"),
        Column::right("L"),
        Column::right("GF"),
        Column::right("GA"),
        Column::right("GD"),
        Column::right("Pts"),
    ])
    .with_separator(&cfg.separator_char);

    for (i, row) in g.rows.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            home_club_marker(&row.team_name, row.is_home_club),
            row.played.to_string(),
            row.won.to_string(),
            row.drawn.to_string(),
            row.lost.to_string(),
            row.goals_for.to_string(),
            row.goals_against.to_string(),
            signed(row.goal_difference()),
            row.points().to_string(),
        ]);
    }

    print!("{}", table.render());
}
