use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Match formats with a fixed number of players per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    /// Five-a-side indoor
    Futsal,
    /// Eight-a-side on small pitches
    Society,
    /// Full eleven-a-side
    Campo,
}

impl GameType {
    pub fn players_per_team(self) -> usize {
        match self {
            GameType::Futsal => 5,
            GameType::Society => 8,
            GameType::Campo => 11,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GameType::Futsal => "futsal",
            GameType::Society => "society",
            GameType::Campo => "campo",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "futsal" => Ok(GameType::Futsal),
            "society" => Ok(GameType::Society),
            "campo" => Ok(GameType::Campo),
            other => Err(format!(
                "unknown game type '{other}' (expected futsal, society or campo)"
            )),
        }
    }
}
