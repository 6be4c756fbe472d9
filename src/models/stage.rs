use serde::{Deserialize, Serialize};

/// Stage of a match inside a tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStage {
    #[default]
    Group,
    Playoff,
}

impl MatchStage {
    /// Tag used in slugs and in the `stage` column.
    pub fn tag(&self) -> &'static str {
        match self {
            MatchStage::Group => "group",
            MatchStage::Playoff => "playoff",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.tag()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "group" => Some(MatchStage::Group),
            "playoff" => Some(MatchStage::Playoff),
            _ => None,
        }
    }

    /// Helper: parse user input (case-insensitive, a few aliases)
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "group" | "g" | "league" => Some(MatchStage::Group),
            "playoff" | "playoffs" | "p" | "knockout" => Some(MatchStage::Playoff),
            _ => None,
        }
    }

    pub fn is_playoff(&self) -> bool {
        matches!(self, MatchStage::Playoff)
    }
}
