use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Side of an internal training scrimmage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingSide {
    A,
    B,
}

impl TrainingSide {
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "a" | "team_a" => Some(TrainingSide::A),
            "b" | "team_b" => Some(TrainingSide::B),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalEvent {
    pub team: TrainingSide,
    pub scorer_id: Option<i64>,
    pub assist_id: Option<i64>,
    pub minute: Option<u32>,
}

/// One scrimmage played during a training session, as stored in
/// `training_sessions.matches_json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingMatch {
    pub team_a: Vec<i64>,
    pub team_b: Vec<i64>,
    pub score_a: u32,
    pub score_b: u32,
    pub goals: Vec<GoalEvent>,
}

#[derive(Debug, Clone)]
pub struct TrainingSession {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub starts_at: DateTime<Utc>,
    pub matches: Vec<TrainingMatch>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayerTrainingStats {
    pub player_id: i64,
    pub matches: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals: u32,
    pub assists: u32,
}

impl PlayerTrainingStats {
    pub fn points(&self) -> u32 {
        self.goals + self.assists
    }
}
