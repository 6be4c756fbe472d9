use crate::core::rate_limit::{SlidingWindowLimiter, SystemClock};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Language tag for month and weekday names (sr, sr-Latn, ru, en).
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Domain used for synthetic login emails.
    #[serde(default = "default_auth_email_domain")]
    pub auth_email_domain: String,
    #[serde(default = "default_rate_limit_max")]
    pub rate_limit_max: u32,
    #[serde(default = "default_rate_limit_window_secs")]
    pub rate_limit_window_secs: u64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_locale() -> String {
    "sr-Latn".to_string()
}
fn default_auth_email_domain() -> String {
    "members.hkclub.rs".to_string()
}
fn default_rate_limit_max() -> u32 {
    30
}
fn default_rate_limit_window_secs() -> u64 {
    60
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            locale: default_locale(),
            auth_email_domain: default_auth_email_domain(),
            rate_limit_max: default_rate_limit_max(),
            rate_limit_window_secs: default_rate_limit_window_secs(),
            separator_char: default_separator_char(),
        }
    }

    /// `~/.rinkboard`, or `%APPDATA%\rinkboard` on Windows.
    pub fn config_dir() -> PathBuf {
        let base = if cfg!(target_os = "windows") {
            dirs::config_dir()
        } else {
            dirs::home_dir().map(|h| h.join(".rinkboard"))
        };
        match base {
            Some(p) if cfg!(target_os = "windows") => p.join("rinkboard"),
            Some(p) => p,
            None => PathBuf::from(".rinkboard"),
        }
    }

    /// `<config dir>/rinkboard.conf`
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rinkboard.conf")
    }

    /// Default database location, next to the config file.
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rinkboard.sqlite")
    }

    /// Read the YAML config. A missing file means defaults.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    /// Login limiter configured from `rate_limit_max` / `rate_limit_window_secs`.
    pub fn rate_limiter(&self) -> SlidingWindowLimiter<SystemClock> {
        SlidingWindowLimiter::new(
            self.rate_limit_max,
            Duration::from_secs(self.rate_limit_window_secs),
            SystemClock,
        )
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Create the config file (unless `is_test`) and an empty database file.
    /// Returns the database path.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // relative names live in the config dir
        let db_path = match custom_name.as_deref().map(expand_tilde) {
            Some(p) if p.is_absolute() => p,
            Some(p) => dir.join(p),
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = Self::with_database(db_path.clone()).to_yaml()?;
            fs::write(Self::config_file(), yaml)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        if !db_path.exists() {
            fs::File::create(&db_path).map_err(|e| {
                io::Error::new(e.kind(), format!("{}: {}", db_path.display(), e))
            })?;
        }

        success(format!("Database: {}", db_path.display()));
        Ok(db_path)
    }
}
