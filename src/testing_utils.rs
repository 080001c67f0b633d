use crate::balancer::{CanonicalPosition, Player, Team};

/// Test utilities for building rosters and checking balanced teams
#[derive(Debug, Default)]
pub struct RosterBuilder {
    players: Vec<Player>,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> String {
        format!("p{}", self.players.len() + 1)
    }

    /// Adds a player with an explicit rating
    pub fn player(mut self, name: &str, position: &str, rating: f64) -> Self {
        let id = self.next_id();
        self.players
            .push(Player::new(id, name, position).with_rating(rating));
        self
    }

    /// Adds a player rated only by legacy stars
    pub fn player_with_stars(mut self, name: &str, position: &str, stars: f64) -> Self {
        let id = self.next_id();
        self.players
            .push(Player::new(id, name, position).with_stars(stars));
        self
    }

    /// Adds a player with neither rating nor stars
    pub fn unrated(mut self, name: &str, position: &str) -> Self {
        let id = self.next_id();
        self.players.push(Player::new(id, name, position));
        self
    }

    /// Adds `ratings.len()` players of one position, named `{prefix}{n}`
    pub fn group(mut self, prefix: &str, position: &str, ratings: &[f64]) -> Self {
        for (i, &rating) in ratings.iter().enumerate() {
            self = self.player(&format!("{prefix}{}", i + 1), position, rating);
        }
        self
    }

    pub fn build(self) -> Vec<Player> {
        self.players
    }
}

/// Sorted player ids across all teams, for partition checks
pub fn assigned_ids(teams: &[Team]) -> Vec<String> {
    let mut ids: Vec<String> = teams
        .iter()
        .flat_map(|t| t.players.iter().map(|p| p.id.clone()))
        .collect();
    ids.sort();
    ids
}

/// Largest difference in team size
pub fn size_gap(teams: &[Team]) -> usize {
    let max = teams.iter().map(Team::len).max().unwrap_or(0);
    let min = teams.iter().map(Team::len).min().unwrap_or(0);
    max - min
}

/// Largest difference in the count of `position` between any two teams
pub fn position_gap(teams: &[Team], position: CanonicalPosition) -> usize {
    let max = teams.iter().map(|t| t.count_of(position)).max().unwrap_or(0);
    let min = teams.iter().map(|t| t.count_of(position)).min().unwrap_or(0);
    max - min
}

/// Player names of one team in listing order
pub fn team_names(team: &Team) -> Vec<&str> {
    team.players.iter().map(|p| p.name.as_str()).collect()
}
