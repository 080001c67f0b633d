use crate::balancer::SeparationGroup;
use crate::constants::{DEFAULT_TEAM_COUNT, LOG_FILE_NAME, env_vars};
use crate::error::AppError;
use crate::roster::GameType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::warn;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Number of teams formed when `--teams` is not given.
    #[serde(default = "default_team_count")]
    pub default_team_count: usize,
    /// Match format used for roster checks. No checks beyond the basics when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_type: Option<GameType>,
    /// Reject position labels that match no alias instead of treating them as midfielders.
    #[serde(default)]
    pub strict_positions: bool,
    /// Groups of player names that must never share a team.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub separation_groups: Vec<Vec<String>>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_team_count() -> usize {
    DEFAULT_TEAM_COUNT
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_team_count: default_team_count(),
            game_type: None,
            strict_positions: false,
            separation_groups: Vec::new(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing file yields the defaults. Environment variables override
    /// file values.
    ///
    /// # Environment Variables
    /// - `TEAM_BALANCER_TEAMS` - Override the default team count
    /// - `TEAM_BALANCER_GAME_TYPE` - Override the game type (futsal, society, campo)
    /// - `TEAM_BALANCER_STRICT_POSITIONS` - `true`/`1` to reject unknown positions
    /// - `TEAM_BALANCER_LOG_FILE` - Override log file path
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = Config::load_file_or_default(&config_path).await?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads the config file at `path` as written, or the defaults when it
    /// does not exist. No environment overrides are applied.
    pub async fn load_file_or_default(path: &str) -> Result<Self, AppError> {
        if Path::new(path).exists() {
            Config::load_from_path(path).await
        } else {
            Ok(Config::default())
        }
    }

    /// Applies environment variable overrides. Values that fail to parse are
    /// logged and ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(teams) = std::env::var(env_vars::TEAMS) {
            match teams.trim().parse::<usize>() {
                Ok(teams) => self.default_team_count = teams,
                Err(_) => warn!("Ignoring {}={teams}: not a team count", env_vars::TEAMS),
            }
        }

        if let Ok(game_type) = std::env::var(env_vars::GAME_TYPE) {
            match game_type.parse::<GameType>() {
                Ok(game_type) => self.game_type = Some(game_type),
                Err(e) => warn!("Ignoring {}: {e}", env_vars::GAME_TYPE),
            }
        }

        if let Ok(strict) = std::env::var(env_vars::STRICT_POSITIONS) {
            self.strict_positions = matches!(
                strict.trim().to_lowercase().as_str(),
                "1" | "true" | "yes"
            );
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            self.default_team_count,
            &self.separation_groups,
            &self.log_file_path,
        )
    }

    /// Separation groups in the form the balancer takes them
    pub fn separation_groups(&self) -> Vec<SeparationGroup> {
        self.separation_groups
            .iter()
            .map(|names| SeparationGroup::new(names.iter().cloned()))
            .collect()
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("(Using defaults: {DEFAULT_TEAM_COUNT} teams, no game type)");
            return Ok(());
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Default Team Count:");
        println!("{}", config.default_team_count);
        println!("────────────────────────────────────");
        println!("Game Type:");
        match config.game_type {
            Some(game_type) => println!(
                "{game_type} ({} players per team)",
                game_type.players_per_team()
            ),
            None => println!("(Not set)"),
        }
        println!("────────────────────────────────────");
        println!("Strict Positions:");
        println!("{}", if config.strict_positions { "on" } else { "off" });
        println!("────────────────────────────────────");
        println!("Separation Groups:");
        if config.separation_groups.is_empty() {
            println!("(None)");
        } else {
            for group in &config.separation_groups {
                println!("{}", group.join(", "));
            }
        }
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{LOG_FILE_NAME}");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory if needed.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
