use super::stage::MatchStage;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// An official club game, shown on the public schedule.
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    pub id: i64,
    pub opponent: String,
    pub tournament_name: String,
    pub stage: MatchStage,
    pub starts_at: Option<DateTime<Utc>>, // ⇔ games.starts_at (TEXT, RFC 3339 UTC)
    pub slug: String,
}
