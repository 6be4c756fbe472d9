use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub is_home_club: bool,     // ⇔ teams.is_home_club (INT 0/1)
    pub logo_url: Option<String>,
}

impl Team {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_home_club: false,
            logo_url: None,
        }
    }

    /// Same team, flagged as the club this site belongs to.
    pub fn home_club(id: i64, name: impl Into<String>) -> Self {
        Self {
            is_home_club: true,
            ..Self::new(id, name)
        }
    }
}
