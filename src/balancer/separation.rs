//! Pairwise separation constraints between players.

use super::models::{Player, Team};
use crate::constants::GOALKEEPER_MARKER;
use serde::{Deserialize, Serialize};

/// Players, by name, that must not end up on the same team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeparationGroup {
    names: Vec<String>,
}

impl SeparationGroup {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        let key = name_key(name);
        self.names.iter().any(|member| name_key(member) == key)
    }
}

/// Comparison key for player names: trimmed, lowercased, goalkeeper marker removed.
pub fn name_key(name: &str) -> String {
    name.replace(GOALKEEPER_MARKER, "").trim().to_lowercase()
}

/// Separation groups prepared for repeated lookups during one balancing run.
#[derive(Debug, Default)]
pub(crate) struct SeparationRules {
    groups: Vec<Vec<String>>,
}

impl SeparationRules {
    pub(crate) fn new(groups: &[SeparationGroup]) -> Self {
        Self {
            groups: groups
                .iter()
                .map(|g| g.names.iter().map(|n| name_key(n)).collect::<Vec<_>>())
                .filter(|keys| keys.len() > 1)
                .collect(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// True when `candidate` shares a separation group with someone already on `team`.
    pub(crate) fn blocks(&self, team: &Team, candidate: &Player) -> bool {
        if self.is_empty() {
            return false;
        }
        let candidate_key = name_key(&candidate.name);
        self.groups
            .iter()
            .filter(|keys| keys.contains(&candidate_key))
            .any(|keys| {
                team.players
                    .iter()
                    .any(|member| keys.contains(&name_key(&member.name)))
            })
    }
}
