// src/export/model.rs

use crate::models::GroupStandings;
use serde::Serialize;

/// Flat standings line for CSV.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct StandingExport {
    pub group: String,
    pub position: usize,
    pub team_id: i64,
    pub team: String,
    pub home_club: bool,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: i64,
    pub goals_against: i64,
    pub goal_difference: i64,
    pub points: i64,
}

pub(crate) fn flatten(groups: &[GroupStandings]) -> Vec<StandingExport> {
    groups
        .iter()
        .flat_map(|g| {
            let group = g.group.clone().unwrap_or_default();
            g.rows.iter().enumerate().map(move |(i, r)| StandingExport {
                group: group.clone(),
                position: i + 1,
                team_id: r.team_id,
                team: r.team_name.clone(),
                home_club: r.is_home_club,
                played: r.played,
                won: r.won,
                drawn: r.drawn,
                lost: r.lost,
                goals_for: r.goals_for,
                goals_against: r.goals_against,
                goal_difference: r.goal_difference(),
                points: r.points(),
            })
        })
        .collect()
}
