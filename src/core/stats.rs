//! Training scrimmage statistics.
//!
//! Payloads come from `training_sessions.matches_json`, which has been
//! edited by hand and by older admin builds, so parsing never fails: every
//! field is checked on its own and replaced by a neutral value when it is
//! missing or malformed.

use crate::models::{GoalEvent, PlayerTrainingStats, TrainingMatch, TrainingSide};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

/// Scores above this are treated as typos.
const MAX_SCORE: u64 = 99;
const MAX_MINUTE: u64 = 240;

fn as_id(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64().filter(|id| *id > 0),
        Value::String(s) => s.trim().parse::<i64>().ok().filter(|id| *id > 0),
        _ => None,
    }
}

fn as_score(v: Option<&Value>) -> u32 {
    v.and_then(Value::as_u64)
        .filter(|s| *s <= MAX_SCORE)
        .map(|s| s as u32)
        .unwrap_or(0)
}

fn as_roster(v: Option<&Value>) -> Vec<i64> {
    let mut seen = HashSet::new();
    v.and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(as_id)
                .filter(|id| seen.insert(*id))
                .collect()
        })
        .unwrap_or_default()
}

fn parse_goal(v: &Value) -> Option<GoalEvent> {
    let obj = v.as_object()?;
    let team = obj
        .get("team")
        .and_then(Value::as_str)
        .and_then(TrainingSide::from_str_loose)?;

    Some(GoalEvent {
        team,
        scorer_id: obj.get("scorer_id").and_then(as_id),
        assist_id: obj.get("assist_id").and_then(as_id),
        minute: obj
            .get("minute")
            .and_then(Value::as_u64)
            .filter(|m| *m <= MAX_MINUTE)
            .map(|m| m as u32),
    })
}

/// Parse one stored scrimmage. `None` only when `v` is not an object.
pub fn parse_training_match(v: &Value) -> Option<TrainingMatch> {
    let obj = v.as_object()?;

    let goals = obj
        .get("goals")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(parse_goal).collect())
        .unwrap_or_default();

    Some(TrainingMatch {
        team_a: as_roster(obj.get("team_a")),
        team_b: as_roster(obj.get("team_b")),
        score_a: as_score(obj.get("score_a")),
        score_b: as_score(obj.get("score_b")),
        goals,
    })
}

/// Parse a stored list of scrimmages, skipping entries that are not objects.
/// A single object is accepted as a one-element list.
pub fn parse_training_matches(v: &Value) -> Vec<TrainingMatch> {
    match v {
        Value::Array(items) => items.iter().filter_map(parse_training_match).collect(),
        Value::Object(_) => parse_training_match(v).into_iter().collect(),
        _ => Vec::new(),
    }
}

/// Same as [`parse_training_matches`] for raw text; unparseable JSON gives
/// an empty list.
pub fn parse_training_matches_str(raw: &str) -> Vec<TrainingMatch> {
    serde_json::from_str::<Value>(raw)
        .map(|v| parse_training_matches(&v))
        .unwrap_or_default()
}

/// Per-player totals over all scrimmages, best first (points, goals, id).
pub fn aggregate_training_stats(matches: &[TrainingMatch]) -> Vec<PlayerTrainingStats> {
    let mut by_player: BTreeMap<i64, PlayerTrainingStats> = BTreeMap::new();

    fn entry(map: &mut BTreeMap<i64, PlayerTrainingStats>, id: i64) -> &mut PlayerTrainingStats {
        map.entry(id).or_insert_with(|| PlayerTrainingStats {
            player_id: id,
            ..Default::default()
        })
    }

    for m in matches {
        for (roster, own, other) in [
            (&m.team_a, m.score_a, m.score_b),
            (&m.team_b, m.score_b, m.score_a),
        ] {
            for &id in roster {
                let s = entry(&mut by_player, id);
                s.matches += 1;
                match own.cmp(&other) {
                    Ordering::Greater => s.wins += 1,
                    Ordering::Less => s.losses += 1,
                    Ordering::Equal => s.draws += 1,
                }
            }
        }

        for g in &m.goals {
            if let Some(id) = g.scorer_id {
                entry(&mut by_player, id).goals += 1;
            }
            // An assist credited to the scorer is a data-entry slip.
            if let Some(id) = g.assist_id.filter(|a| Some(*a) != g.scorer_id) {
                entry(&mut by_player, id).assists += 1;
            }
        }
    }

    let mut out: Vec<PlayerTrainingStats> = by_player.into_values().collect();
    out.sort_by(|a, b| {
        b.points()
            .cmp(&a.points())
            .then_with(|| b.goals.cmp(&a.goals))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    out
}
