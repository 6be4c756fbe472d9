use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rinkboard
/// Back-office tool for the club website: teams, tournaments, games, training
#[derive(Parser)]
#[command(
    name = "rinkboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Hockey club back-office: standings, schedule in Belgrade time, URL slugs (SQLite)",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage teams
    Team {
        #[command(subcommand)]
        action: TeamAction,
    },

    /// Manage tournaments
    Tournament {
        #[command(subcommand)]
        action: TournamentAction,
    },

    /// Record tournament matches and results
    Match {
        #[command(subcommand)]
        action: MatchAction,
    },

    /// Group standings of a tournament
    Standings {
        #[arg(long = "tournament", help = "Tournament id")]
        tournament: i64,

        #[arg(long = "group", help = "Only this group (default: every group)")]
        group: Option<String>,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        #[arg(long, value_name = "FILE", help = "Write csv/json output to FILE")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite FILE if it exists")]
        force: bool,
    },

    /// Playoff progress of a tournament
    Bracket {
        #[arg(long = "tournament", help = "Tournament id")]
        tournament: i64,
    },

    /// Club games shown on the public schedule
    Game {
        #[command(subcommand)]
        action: GameAction,
    },

    /// Training sessions and scrimmage statistics
    Training {
        #[command(subcommand)]
        action: TrainingAction,
    },

    /// Print the URL slug for a text
    Slug {
        /// Free text (names may be Cyrillic)
        text: Vec<String>,
    },

    /// Convert between Belgrade wall-clock time and UTC
    Time {
        #[command(subcommand)]
        action: TimeAction,
    },

    /// Show the normalized login and auth email for one or more club usernames
    Login {
        #[arg(required = true, num_args = 1..)]
        usernames: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum TeamAction {
    /// Add a team
    Add {
        name: String,

        #[arg(long = "home", help = "Mark as the home club")]
        home: bool,

        #[arg(long = "logo", value_name = "URL")]
        logo: Option<String>,
    },

    /// List teams
    List,
}

#[derive(Subcommand)]
pub enum TournamentAction {
    /// Add a tournament
    Add {
        name: String,

        #[arg(long = "slug", help = "Use this slug instead of generating one")]
        slug: Option<String>,
    },

    /// List tournaments
    List,
}

#[derive(Subcommand)]
pub enum MatchAction {
    /// Add a match to a tournament
    Add {
        #[arg(long = "tournament")]
        tournament: i64,

        #[arg(long = "home", help = "Home team id")]
        home: i64,

        #[arg(long = "away", help = "Away team id")]
        away: i64,

        #[arg(long = "group", help = "Group name (group stage)")]
        group: Option<String>,

        #[arg(long = "stage", default_value = "group", help = "group | playoff")]
        stage: String,

        #[arg(long = "at", help = "Start, Belgrade time (YYYY-MM-DDTHH:MM)")]
        at: Option<String>,

        #[arg(long = "score", help = "Final score HOME:AWAY (marks the match completed)")]
        score: Option<String>,

        #[arg(long = "shootout-winner", help = "Team id that won the shootout")]
        shootout_winner: Option<i64>,
    },

    /// Record the final score of a match
    Result {
        id: i64,

        score: String,

        #[arg(long = "shootout-winner", help = "Team id that won the shootout")]
        shootout_winner: Option<i64>,
    },

    /// List matches of a tournament
    List {
        #[arg(long = "tournament")]
        tournament: i64,
    },
}

#[derive(Subcommand)]
pub enum GameAction {
    /// Add a club game
    Add {
        #[arg(long = "opponent")]
        opponent: String,

        #[arg(long = "tournament", default_value = "")]
        tournament: String,

        #[arg(long = "stage", default_value = "group", help = "group | playoff")]
        stage: String,

        #[arg(long = "at", help = "Start, Belgrade time (YYYY-MM-DDTHH:MM)")]
        at: Option<String>,

        #[arg(long = "slug", help = "Use this slug instead of generating one")]
        slug: Option<String>,
    },

    /// List club games in Belgrade time
    List {
        #[arg(long = "locale", help = "sr, sr-Latn, ru, en (default: config)")]
        locale: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum TrainingAction {
    /// Add a training session with its scrimmage log
    Add {
        #[arg(long = "title")]
        title: String,

        #[arg(long = "at", help = "Start, Belgrade time (YYYY-MM-DDTHH:MM)")]
        at: String,

        #[arg(long = "file", value_name = "JSON", help = "Scrimmage log (JSON array)")]
        file: Option<String>,

        #[arg(long = "slug", help = "Use this slug instead of generating one")]
        slug: Option<String>,
    },

    /// Per-player scrimmage statistics over all sessions
    Stats,
}

#[derive(Subcommand)]
pub enum TimeAction {
    /// Belgrade wall-clock time → UTC (RFC 3339)
    ToUtc { local: String },

    /// UTC instant → Belgrade time
    Show {
        utc: String,

        #[arg(long = "locale")]
        locale: Option<String>,

        #[arg(long = "format", default_value = "datetime", help = "time | date | datetime | weekday")]
        format: String,

        #[arg(long = "pattern", help = "strftime pattern, overrides --format")]
        pattern: Option<String>,
    },
}
