use super::position::{CanonicalPosition, normalize_position};
use super::rating::resolve_rating;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A roster entry as handed to the balancer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    /// Free-text position label, e.g. "Zagueiro" or "Lat E"
    #[serde(rename = "position")]
    pub position_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Legacy 1-5 star score, used only when `rating` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<f64>,
}

impl Player {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position_label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position_label: position_label.into(),
            rating: None,
            stars: None,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_stars(mut self, stars: f64) -> Self {
        self.stars = Some(stars);
        self
    }

    pub fn canonical_position(&self) -> CanonicalPosition {
        normalize_position(&self.position_label)
    }

    pub fn resolved_rating(&self) -> f64 {
        resolve_rating(self)
    }
}

/// One team of a balanced partition.
///
/// `total_rating` and `position_counts` always agree with `players`; the only
/// way to add a player is [`Team::add_player`], which updates all three.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub index: usize,
    pub players: Vec<Player>,
    pub total_rating: f64,
    pub position_counts: BTreeMap<CanonicalPosition, usize>,
}

impl Team {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            players: Vec::new(),
            total_rating: 0.0,
            position_counts: CanonicalPosition::ALL.iter().map(|&p| (p, 0)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Number of players of the given position on this team
    pub fn count_of(&self, position: CanonicalPosition) -> usize {
        self.position_counts.get(&position).copied().unwrap_or(0)
    }

    pub(crate) fn add_player(&mut self, player: Player, position: CanonicalPosition, rating: f64) {
        self.players.push(player);
        self.total_rating += rating;
        *self.position_counts.entry(position).or_insert(0) += 1;
    }

    /// Display name, counted from one
    pub fn display_name(&self) -> String {
        format!("Team {}", self.index + 1)
    }
}

/// Difference between the strongest and the weakest team's total rating.
/// Zero for fewer than two teams.
pub fn rating_spread(teams: &[Team]) -> f64 {
    if teams.len() < 2 {
        return 0.0;
    }
    let max = teams.iter().map(|t| t.total_rating).fold(f64::NEG_INFINITY, f64::max);
    let min = teams.iter().map(|t| t.total_rating).fold(f64::INFINITY, f64::min);
    max - min
}
