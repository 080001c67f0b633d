//! Reading rosters from JSON or TOML files.
//!
//! JSON rosters are either a bare array of entries or an object with a
//! `players` array; TOML rosters use `[[players]]` tables. Every entry needs a
//! `name`; `id`, `position`, `rating` and `stars` are optional.

use crate::balancer::{Player, try_normalize_position};
use crate::constants::{GOALKEEPER_LABEL, GOALKEEPER_MARKER};
use crate::error::AppError;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// Supported roster file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Json,
    Toml,
}

impl RosterFormat {
    pub fn name(self) -> &'static str {
        match self {
            RosterFormat::Json => "JSON",
            RosterFormat::Toml => "TOML",
        }
    }

    /// Picks the format from the file extension.
    pub fn from_path(path: &str) -> Result<Self, AppError> {
        let extension = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(RosterFormat::Json),
            Some("toml") => Ok(RosterFormat::Toml),
            Some(other) => Err(AppError::roster_format(
                path,
                format!("unsupported extension '.{other}' (use .json or .toml)"),
            )),
            None => Err(AppError::roster_format(
                path,
                "missing file extension (use .json or .toml)",
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EntryId {
    Text(String),
    Number(i64),
}

#[derive(Debug, Deserialize)]
struct RosterEntry {
    #[serde(default)]
    id: Option<EntryId>,
    name: String,
    #[serde(default)]
    position: Option<String>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    stars: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonRoster {
    List(Vec<RosterEntry>),
    Wrapped { players: Vec<RosterEntry> },
}

#[derive(Debug, Deserialize)]
struct TomlRoster {
    #[serde(default)]
    players: Vec<RosterEntry>,
}

/// Loads a roster file, choosing the parser from the extension.
pub async fn load_roster(path: &str) -> Result<Vec<Player>, AppError> {
    let format = RosterFormat::from_path(path)?;
    let content = fs::read_to_string(path).await?;
    let players = parse_roster(&content, format)?;
    info!("Loaded {} players from {path}", players.len());
    Ok(players)
}

/// Parses roster content in the given format.
///
/// # Examples
/// ```
/// use team_balancer::roster::{RosterFormat, parse_roster};
///
/// let players = parse_roster(
///     r#"[{"name": "Boka", "position": "Ata", "rating": 4}, {"name": "Kebler 🧤"}]"#,
///     RosterFormat::Json,
/// )
/// .unwrap();
///
/// assert_eq!(players[0].id, "p1");
/// assert_eq!(players[1].position_label, "Goleiro");
/// ```
pub fn parse_roster(content: &str, format: RosterFormat) -> Result<Vec<Player>, AppError> {
    let entries = match format {
        RosterFormat::Json => {
            let roster = serde_json::from_str::<JsonRoster>(content)
                .map_err(|e| AppError::roster_parse(format.name(), e.to_string()))?;
            match roster {
                JsonRoster::List(entries) => entries,
                JsonRoster::Wrapped { players } => players,
            }
        }
        RosterFormat::Toml => {
            toml::from_str::<TomlRoster>(content)
                .map_err(|e| AppError::roster_parse(format.name(), e.to_string()))?
                .players
        }
    };

    Ok(entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| into_player(i, entry))
        .collect())
}

fn into_player(index: usize, entry: RosterEntry) -> Player {
    let id = match entry.id {
        Some(EntryId::Text(id)) if !id.trim().is_empty() => id,
        Some(EntryId::Number(id)) => id.to_string(),
        _ => format!("p{}", index + 1),
    };

    let position_label = match entry.position {
        Some(label) if !label.trim().is_empty() => label,
        _ if entry.name.contains(GOALKEEPER_MARKER) => {
            debug!("{} is marked as goalkeeper", entry.name);
            GOALKEEPER_LABEL.to_string()
        }
        _ => String::new(),
    };

    Player {
        id,
        name: entry.name,
        position_label,
        rating: entry.rating,
        stars: entry.stars,
    }
}

/// Rejects players whose position label matches no known alias.
///
/// The balancer itself treats such labels as midfielders; this check is for
/// callers who would rather fix the roster than rely on that default.
pub fn ensure_known_positions(players: &[Player]) -> Result<(), AppError> {
    match players
        .iter()
        .find(|p| try_normalize_position(&p.position_label).is_none())
    {
        Some(player) => Err(AppError::unknown_position(
            &player.name,
            &player.position_label,
        )),
        None => Ok(()),
    }
}
