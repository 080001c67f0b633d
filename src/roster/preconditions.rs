//! Checks a roster must pass before it is worth balancing.
//!
//! The balancer accepts any roster and always returns its best partition.
//! These rules decide whether that partition is worth showing.

use super::game_type::GameType;
use crate::balancer::{CanonicalPosition, Player};
use crate::error::AppError;

/// Validates the roster for the requested number of teams.
///
/// # Rules
/// - At least one team must be requested and the roster must not be empty
/// - With a game type, the roster must fill every team
/// - With a game type, every team needs a goalkeeper
pub fn check_roster(
    players: &[Player],
    team_count: usize,
    game_type: Option<GameType>,
) -> Result<(), AppError> {
    if team_count == 0 {
        return Err(AppError::precondition_failed(
            "at least one team is required",
        ));
    }

    if players.is_empty() {
        return Err(AppError::precondition_failed("the roster is empty"));
    }

    let Some(game_type) = game_type else {
        return Ok(());
    };

    let needed = game_type.players_per_team() * team_count;
    if players.len() < needed {
        return Err(AppError::precondition_failed(format!(
            "{} needs at least {needed} players for {team_count} teams, roster has {}",
            game_type,
            players.len()
        )));
    }

    let goalkeepers = players
        .iter()
        .filter(|p| p.canonical_position() == CanonicalPosition::Goalkeeper)
        .count();
    if goalkeepers < team_count {
        return Err(AppError::precondition_failed(format!(
            "{team_count} teams need {team_count} goalkeepers, roster has {goalkeepers}"
        )));
    }

    Ok(())
}
