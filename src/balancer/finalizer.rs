use super::models::Team;

/// Orders each team's players by canonical position, then by name.
///
/// Only the order inside a team changes; membership, totals and position
/// counts are left as the assigner produced them.
pub fn finalize_teams(teams: &mut [Team]) {
    for team in teams.iter_mut() {
        team.players.sort_by(|a, b| {
            a.canonical_position()
                .cmp(&b.canonical_position())
                .then_with(|| a.name.cmp(&b.name))
        });
    }
}
