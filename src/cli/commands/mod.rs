pub mod bracket;
pub mod config;
pub mod db;
pub mod game;
pub mod game_match;
pub mod init;
pub mod log;
pub mod login;
pub mod slug;
pub mod standings;
pub mod team;
pub mod time;
pub mod tournament;
pub mod training;
