use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    // Roster input errors
    #[error("Failed to parse {format} roster: {message}")]
    RosterParse { format: String, message: String },

    #[error("Invalid roster file {path}: {message}")]
    RosterFormat { path: String, message: String },

    #[error("Unknown position '{label}' for player {player}")]
    UnknownPosition { player: String, label: String },

    #[error("Roster check failed: {0}")]
    Precondition(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a roster format error for the given file
    pub fn roster_format(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RosterFormat {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an error for roster content that does not parse
    pub fn roster_parse(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RosterParse {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Create an error for a position label that matches no known alias
    pub fn unknown_position(player: impl Into<String>, label: impl Into<String>) -> Self {
        Self::UnknownPosition {
            player: player.into(),
            label: label.into(),
        }
    }

    /// Create a failed roster precondition error
    pub fn precondition_failed(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    /// Check if the error can be fixed by editing the roster rather than the
    /// environment (files, permissions, configuration).
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::RosterParse { .. }
                | AppError::RosterFormat { .. }
                | AppError::UnknownPosition { .. }
                | AppError::Precondition(_)
        )
    }
}
