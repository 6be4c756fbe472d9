pub mod game;
pub mod game_match;
pub mod stage;
pub mod standing;
pub mod team;
pub mod tournament;
pub mod training;

pub use game::Game;
pub use game_match::Match;
pub use stage::MatchStage;
pub use standing::{GroupStandings, StandingRow};
pub use team::Team;
pub use tournament::Tournament;
pub use training::{GoalEvent, PlayerTrainingStats, TrainingMatch, TrainingSession, TrainingSide};
