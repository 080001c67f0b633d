use super::models::Player;
use crate::constants::DEFAULT_RATING;

/// Returns the rating the balancer uses for a player.
///
/// Explicit ratings win; rosters from older data entry only carry `stars`, and
/// manually added players may carry neither, in which case the neutral
/// [`DEFAULT_RATING`] applies.
pub fn resolve_rating(player: &Player) -> f64 {
    player.rating.or(player.stars).unwrap_or(DEFAULT_RATING)
}
