use super::stage::MatchStage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tournament match between two teams.
///
/// Only matches with `is_completed` set take part in standings; scheduled
/// ones are still stored and listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: i64,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub home_score: i32,
    pub away_score: i32,
    pub is_completed: bool,
    pub stage: MatchStage,
    pub group_name: Option<String>,
    /// Display-only marker; a tied score stays a draw for standings.
    pub shootout_winner_id: Option<i64>,
    pub starts_at: Option<DateTime<Utc>>,
}

impl Match {
    /// Completed group-stage match with a final score.
    pub fn completed(id: i64, home: i64, away: i64, home_score: i32, away_score: i32) -> Self {
        Self {
            id,
            home_team_id: home,
            away_team_id: away,
            home_score,
            away_score,
            is_completed: true,
            stage: MatchStage::Group,
            group_name: None,
            shootout_winner_id: None,
            starts_at: None,
        }
    }

    /// Scheduled match, no result yet.
    pub fn scheduled(id: i64, home: i64, away: i64) -> Self {
        Self {
            is_completed: false,
            ..Self::completed(id, home, away, 0, 0)
        }
    }

    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group_name = Some(group.into());
        self
    }

    pub fn with_stage(mut self, stage: MatchStage) -> Self {
        self.stage = stage;
        self
    }

    pub fn with_shootout_winner(mut self, team_id: i64) -> Self {
        self.shootout_winner_id = Some(team_id);
        self
    }

    pub fn with_start(mut self, starts_at: DateTime<Utc>) -> Self {
        self.starts_at = Some(starts_at);
        self
    }

    pub fn score_str(&self) -> String {
        if self.is_completed {
            format!("{}:{}", self.home_score, self.away_score)
        } else {
            "-:-".to_string()
        }
    }
}
