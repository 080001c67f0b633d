//! Canonical playing positions and the free-text label normalizer.
//!
//! Rosters arrive with whatever position labels the people typing them used:
//! Portuguese names ("Zagueiro", "Pivô"), abbreviations ("Zag", "Lat E") or
//! English ones ("Right back", "GK"). Everything is mapped onto the closed
//! [`CanonicalPosition`] set through one ordered alias table.

use super::models::Player;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Playing position categories used by the balancer.
///
/// Declaration order is the processing order of the assigner: goalkeepers are
/// distributed first, forwards last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CanonicalPosition {
    Goalkeeper,
    CenterBack,
    RightBack,
    LeftBack,
    DefensiveMid,
    Mid,
    Forward,
}

impl CanonicalPosition {
    /// All positions in processing order
    pub const ALL: [CanonicalPosition; 7] = [
        CanonicalPosition::Goalkeeper,
        CanonicalPosition::CenterBack,
        CanonicalPosition::RightBack,
        CanonicalPosition::LeftBack,
        CanonicalPosition::DefensiveMid,
        CanonicalPosition::Mid,
        CanonicalPosition::Forward,
    ];

    /// Position labels that match no alias end up here
    pub const DEFAULT: CanonicalPosition = CanonicalPosition::Mid;

    /// Short tag used in terminal output
    pub fn tag(self) -> &'static str {
        match self {
            CanonicalPosition::Goalkeeper => "GK",
            CanonicalPosition::CenterBack => "CB",
            CanonicalPosition::RightBack => "RB",
            CanonicalPosition::LeftBack => "LB",
            CanonicalPosition::DefensiveMid => "DM",
            CanonicalPosition::Mid => "MID",
            CanonicalPosition::Forward => "FW",
        }
    }
}

impl fmt::Display for CanonicalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Alias table used by [`normalize_position`]. Matching is a case-insensitive
/// substring test on the label with `-` and `_` read as spaces. The first hit wins, so every phrase precedes every
/// abbreviation ("midfielder" contains "ld").
const POSITION_ALIASES: &[(&str, CanonicalPosition)] = &[
    // Phrases
    ("goleiro", CanonicalPosition::Goalkeeper),
    ("goalkeeper", CanonicalPosition::Goalkeeper),
    ("keeper", CanonicalPosition::Goalkeeper),
    ("zagueiro", CanonicalPosition::CenterBack),
    ("center back", CanonicalPosition::CenterBack),
    ("centre back", CanonicalPosition::CenterBack),
    ("fixo", CanonicalPosition::CenterBack),
    ("lateral direito", CanonicalPosition::RightBack),
    ("right back", CanonicalPosition::RightBack),
    ("lat d", CanonicalPosition::RightBack),
    ("lateral esquerdo", CanonicalPosition::LeftBack),
    ("left back", CanonicalPosition::LeftBack),
    ("lat e", CanonicalPosition::LeftBack),
    ("volante", CanonicalPosition::DefensiveMid),
    ("defensive mid", CanonicalPosition::DefensiveMid),
    ("meia", CanonicalPosition::Mid),
    ("meio", CanonicalPosition::Mid),
    ("midfield", CanonicalPosition::Mid),
    ("atacante", CanonicalPosition::Forward),
    ("centroavante", CanonicalPosition::Forward),
    ("pivô", CanonicalPosition::Forward),
    ("pivo", CanonicalPosition::Forward),
    ("ponta", CanonicalPosition::Forward),
    ("ponte", CanonicalPosition::Forward),
    ("forward", CanonicalPosition::Forward),
    ("striker", CanonicalPosition::Forward),
    ("winger", CanonicalPosition::Forward),
    // Abbreviations
    ("ala", CanonicalPosition::Mid),
    ("gol", CanonicalPosition::Goalkeeper),
    ("gk", CanonicalPosition::Goalkeeper),
    ("zag", CanonicalPosition::CenterBack),
    ("cb", CanonicalPosition::CenterBack),
    ("ld", CanonicalPosition::RightBack),
    ("rb", CanonicalPosition::RightBack),
    ("le", CanonicalPosition::LeftBack),
    ("lb", CanonicalPosition::LeftBack),
    ("vol", CanonicalPosition::DefensiveMid),
    ("cdm", CanonicalPosition::DefensiveMid),
    ("dm", CanonicalPosition::DefensiveMid),
    ("mei", CanonicalPosition::Mid),
    ("mid", CanonicalPosition::Mid),
    ("ata", CanonicalPosition::Forward),
    ("fw", CanonicalPosition::Forward),
    ("st", CanonicalPosition::Forward),
];

/// Maps a free-text label to a canonical position, or `None` when no alias matches.
///
/// # Examples
/// ```
/// use team_balancer::balancer::{CanonicalPosition, try_normalize_position};
///
/// assert_eq!(try_normalize_position("Zagueiro"), Some(CanonicalPosition::CenterBack));
/// assert_eq!(try_normalize_position("  LAT E "), Some(CanonicalPosition::LeftBack));
/// assert_eq!(try_normalize_position("Libero"), None);
/// ```
pub fn try_normalize_position(label: &str) -> Option<CanonicalPosition> {
    let key = label.to_lowercase().replace(['-', '_'], " ");
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    POSITION_ALIASES
        .iter()
        .find(|(alias, _)| key.contains(alias))
        .map(|&(_, position)| position)
}

/// Maps a free-text label to a canonical position.
///
/// Unknown labels resolve to [`CanonicalPosition::DEFAULT`] so every player
/// always lands in exactly one position group.
pub fn normalize_position(label: &str) -> CanonicalPosition {
    try_normalize_position(label).unwrap_or(CanonicalPosition::DEFAULT)
}

/// Players sharing one canonical position
#[derive(Debug, Clone)]
pub struct PositionGroup<'a> {
    pub position: CanonicalPosition,
    pub players: Vec<&'a Player>,
}

impl PositionGroup<'_> {
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Strongest first. The sort is stable, so equal ratings keep roster order.
    pub fn sort_by_rating_desc(&mut self) {
        self.players.sort_by(|a, b| b.resolved_rating().total_cmp(&a.resolved_rating()));
    }
}

/// Partitions the roster into one group per canonical position, in processing
/// order. Groups keep roster order and may be empty.
pub fn group_by_position(players: &[Player]) -> Vec<PositionGroup<'_>> {
    let mut groups: Vec<PositionGroup<'_>> = CanonicalPosition::ALL
        .iter()
        .map(|&position| PositionGroup {
            position,
            players: Vec::new(),
        })
        .collect();

    for player in players {
        let position = player.canonical_position();
        // ALL is in declaration order, so the discriminant is the group index
        groups[position as usize].players.push(player);
    }

    groups
}
