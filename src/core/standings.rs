//! Group standings and playoff progress.
//!
//! Everything here is recomputed from the raw team and match lists on each
//! call. Nothing is cached or mutated incrementally.

use crate::models::{GroupStandings, Match, MatchStage, StandingRow, Team};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Compute standings for `teams` from the completed matches in `matches`.
///
/// - matches whose teams are not both in `teams` are skipped
/// - scheduled matches are ignored
/// - a tied score is a draw, whatever the shootout marker says
///
/// Rows are ordered by points, goal difference and goals scored (all
/// descending). Teams tied on all three keep the order they had in `teams`.
pub fn compute_standings(teams: &[Team], matches: &[Match]) -> Vec<StandingRow> {
    let mut rows: Vec<StandingRow> = teams
        .iter()
        .map(|t| StandingRow {
            team_id: t.id,
            team_name: t.name.clone(),
            is_home_club: t.is_home_club,
            ..Default::default()
        })
        .collect();

    // First occurrence wins when ids repeat.
    let mut index: HashMap<i64, usize> = HashMap::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        index.entry(row.team_id).or_insert(i);
    }

    for m in matches.iter().filter(|m| m.is_completed) {
        let (Some(&home), Some(&away)) = (index.get(&m.home_team_id), index.get(&m.away_team_id))
        else {
            continue;
        };

        record_side(&mut rows[home], m.home_score, m.away_score);
        record_side(&mut rows[away], m.away_score, m.home_score);
    }

    rows.sort_by(compare_rows);
    rows
}

/// Standings of one group: only group-stage matches tagged with `group`,
/// and only teams that played (or are scheduled) in it.
pub fn compute_group_standings(teams: &[Team], matches: &[Match], group: &str) -> Vec<StandingRow> {
    let group_matches: Vec<Match> = matches
        .iter()
        .filter(|m| m.stage == MatchStage::Group && m.group_name.as_deref() == Some(group))
        .cloned()
        .collect();

    let ids: HashSet<i64> = group_matches
        .iter()
        .flat_map(|m| [m.home_team_id, m.away_team_id])
        .collect();

    let group_teams: Vec<Team> = teams.iter().filter(|t| ids.contains(&t.id)).cloned().collect();

    compute_standings(&group_teams, &group_matches)
}

/// Distinct group names, in first-seen order.
pub fn group_names(matches: &[Match]) -> Vec<String> {
    let mut seen = HashSet::new();
    matches
        .iter()
        .filter(|m| m.stage == MatchStage::Group)
        .filter_map(|m| m.group_name.clone())
        .filter(|g| seen.insert(g.clone()))
        .collect()
}

/// Standings of a whole tournament, one table per group.
///
/// With `only_group` set, just that group. When no group-stage match has a
/// group name, a single unnamed table covers every group-stage match.
pub fn tournament_standings(
    teams: &[Team],
    matches: &[Match],
    only_group: Option<&str>,
) -> Vec<GroupStandings> {
    if let Some(g) = only_group {
        return vec![GroupStandings {
            group: Some(g.to_string()),
            rows: compute_group_standings(teams, matches, g),
        }];
    }

    let groups = group_names(matches);
    if groups.is_empty() {
        let league: Vec<Match> = matches
            .iter()
            .filter(|m| m.stage == MatchStage::Group)
            .cloned()
            .collect();
        return vec![GroupStandings {
            group: None,
            rows: compute_standings(teams, &league),
        }];
    }

    groups
        .into_iter()
        .map(|g| GroupStandings {
            rows: compute_group_standings(teams, matches, &g),
            group: Some(g),
        })
        .collect()
}

fn record_side(row: &mut StandingRow, scored: i32, conceded: i32) {
    row.played += 1;
    row.goals_for += scored as i64;
    row.goals_against += conceded as i64;

    match scored.cmp(&conceded) {
        Ordering::Greater => row.won += 1,
        Ordering::Less => row.lost += 1,
        Ordering::Equal => row.drawn += 1,
    }
}

fn compare_rows(a: &StandingRow, b: &StandingRow) -> Ordering {
    b.points()
        .cmp(&a.points())
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
}

/// One playoff match, resolved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketEntry {
    pub match_id: i64,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub home_team: String,
    pub away_team: String,
    pub home_score: i32,
    pub away_score: i32,
    pub is_completed: bool,
    pub winner_id: Option<i64>,
    pub decided_by_shootout: bool,
    pub starts_at: Option<DateTime<Utc>>,
}

/// Playoff-stage matches with their winners.
///
/// A tied completed match is won by `shootout_winner_id` when it names one
/// of the two teams; otherwise it has no winner yet. Entries are ordered
/// by start time (undated last), then by id.
pub fn bracket_progress(teams: &[Team], matches: &[Match]) -> Vec<BracketEntry> {
    let names: HashMap<i64, &str> = teams.iter().map(|t| (t.id, t.name.as_str())).collect();
    let name_of = |id: i64| -> String {
        names
            .get(&id)
            .map(|n| n.to_string())
            .unwrap_or_else(|| format!("#{id}"))
    };

    let mut out: Vec<BracketEntry> = matches
        .iter()
        .filter(|m| m.stage.is_playoff())
        .map(|m| {
            let (winner_id, decided_by_shootout) = playoff_winner(m);
            BracketEntry {
                match_id: m.id,
                home_team_id: m.home_team_id,
                away_team_id: m.away_team_id,
                home_team: name_of(m.home_team_id),
                away_team: name_of(m.away_team_id),
                home_score: m.home_score,
                away_score: m.away_score,
                is_completed: m.is_completed,
                winner_id,
                decided_by_shootout,
                starts_at: m.starts_at,
            }
        })
        .collect();

    out.sort_by(|a, b| match (a.starts_at, b.starts_at) {
        (Some(x), Some(y)) => x.cmp(&y).then(a.match_id.cmp(&b.match_id)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.match_id.cmp(&b.match_id),
    });

    out
}

impl BracketEntry {
    pub fn winner_name(&self) -> Option<&str> {
        match self.winner_id {
            Some(id) if id == self.home_team_id => Some(&self.home_team),
            Some(id) if id == self.away_team_id => Some(&self.away_team),
            _ => None,
        }
    }
}

fn playoff_winner(m: &Match) -> (Option<i64>, bool) {
    if !m.is_completed {
        return (None, false);
    }

    match m.home_score.cmp(&m.away_score) {
        Ordering::Greater => (Some(m.home_team_id), false),
        Ordering::Less => (Some(m.away_team_id), false),
        Ordering::Equal => match m.shootout_winner_id {
            Some(id) if id == m.home_team_id || id == m.away_team_id => (Some(id), true),
            _ => (None, false),
        },
    }
}
