//! rinkboard library root.
//! Domain logic of the club website back-office (standings, Belgrade
//! time, slugs, training stats) plus the admin CLI built on top of it.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Team { action } => commands::team::handle(action, cfg),
        Commands::Tournament { action } => commands::tournament::handle(action, cfg),
        Commands::Match { action } => commands::game_match::handle(action, cfg),
        Commands::Standings { .. } => commands::standings::handle(&cli.command, cfg),
        Commands::Bracket { .. } => commands::bracket::handle(&cli.command, cfg),
        Commands::Game { action } => commands::game::handle(action, cfg),
        Commands::Training { action } => commands::training::handle(action, cfg),
        Commands::Slug { text } => commands::slug::handle(text),
        Commands::Time { action } => commands::time::handle(action, cfg),
        Commands::Login { usernames } => commands::login::handle(usernames, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once
    let mut cfg = Config::load()?;

    // --db on the command line wins over the config file
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
