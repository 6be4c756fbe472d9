use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// One team's line in a standings table. Rebuilt from scratch on every
/// computation; goal difference and points are derived from the counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandingRow {
    pub team_id: i64,
    pub team_name: String,
    pub is_home_club: bool,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: i64,
    pub goals_against: i64,
}

impl StandingRow {
    pub const POINTS_FOR_WIN: i64 = 3;
    pub const POINTS_FOR_DRAW: i64 = 1;

    pub fn goal_difference(&self) -> i64 {
        self.goals_for - self.goals_against
    }

    pub fn points(&self) -> i64 {
        Self::POINTS_FOR_WIN * self.won as i64 + Self::POINTS_FOR_DRAW * self.drawn as i64
    }
}

// Derived values go out with the counters so JSON consumers don't recompute them.
impl Serialize for StandingRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("StandingRow", 11)?;
        s.serialize_field("team_id", &self.team_id)?;
        s.serialize_field("team_name", &self.team_name)?;
        s.serialize_field("is_home_club", &self.is_home_club)?;
        s.serialize_field("played", &self.played)?;
        s.serialize_field("won", &self.won)?;
        s.serialize_field("drawn", &self.drawn)?;
        s.serialize_field("lost", &self.lost)?;
        s.serialize_field("goals_for", &self.goals_for)?;
        s.serialize_field("goals_against", &self.goals_against)?;
        s.serialize_field("goal_difference", &self.goal_difference())?;
        s.serialize_field("points", &self.points())?;
        s.end()
    }
}

/// Standings of one group (`None` when the tournament has no groups).
#[derive(Debug, Clone, Serialize)]
pub struct GroupStandings {
    pub group: Option<String>,
    pub rows: Vec<StandingRow>,
}
