//! Application-wide constants and configuration values
//!
//! This module centralizes the magic numbers used by the balancer, the roster
//! loader and the terminal output.

/// Rating used for players whose roster entry carries neither a rating nor stars.
/// Midpoint of the 1-5 scale.
pub const DEFAULT_RATING: f64 = 3.0;

/// Number of teams formed when neither the command line nor the config says otherwise
pub const DEFAULT_TEAM_COUNT: usize = 2;

/// Name of the application directory under the platform config dir
pub const APP_DIR_NAME: &str = "team_balancer";

/// Default log file name
pub const LOG_FILE_NAME: &str = "team_balancer.log";

/// Glove emoji used in shared rosters to mark goalkeepers
pub const GOALKEEPER_MARKER: char = '🧤';

/// Position label assigned to marked goalkeepers that have no position of their own
pub const GOALKEEPER_LABEL: &str = "Goleiro";

/// Environment variable names that override config file values
pub mod env_vars {
    pub const TEAMS: &str = "TEAM_BALANCER_TEAMS";
    pub const GAME_TYPE: &str = "TEAM_BALANCER_GAME_TYPE";
    pub const STRICT_POSITIONS: &str = "TEAM_BALANCER_STRICT_POSITIONS";
    pub const LOG_FILE: &str = "TEAM_BALANCER_LOG_FILE";
}

/// Terminal output layout
pub mod display {
    /// Width of the position tag column
    pub const POSITION_COLUMN_WIDTH: usize = 4;

    /// Width of the player name column
    pub const NAME_COLUMN_WIDTH: usize = 24;

    /// Width of the horizontal rule under each team header
    pub const RULE_WIDTH: usize = 36;
}
