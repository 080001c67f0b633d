//! Greedy, deterministic distribution of players into teams.

use super::finalizer::finalize_teams;
use super::models::{Player, Team, rating_spread};
use super::position::{CanonicalPosition, group_by_position};
use super::quota::team_quotas_from;
use super::separation::{SeparationGroup, SeparationRules};
use tracing::{debug, info, warn};

/// Splits `players` into `num_teams` teams balanced by position and rating.
///
/// Equivalent to [`balance_teams_with_separation`] without separation groups.
///
/// # Examples
/// ```
/// use team_balancer::balancer::{Player, balance_teams};
///
/// let roster = vec![
///     Player::new("1", "Boka", "Ata").with_rating(5.0),
///     Player::new("2", "Lucas", "Ata").with_rating(4.0),
///     Player::new("3", "Lopes", "Zag").with_rating(3.0),
///     Player::new("4", "Wedson", "Zag").with_rating(2.0),
/// ];
///
/// let teams = balance_teams(&roster, 2);
/// assert_eq!(teams.len(), 2);
/// assert!(teams.iter().all(|t| t.len() == 2));
/// ```
pub fn balance_teams(players: &[Player], num_teams: usize) -> Vec<Team> {
    balance_teams_with_separation(players, num_teams, &[])
}

/// Splits `players` into `num_teams` teams balanced by position and rating,
/// keeping the members of each separation group on different teams whenever
/// some team can still take the player.
///
/// Position groups are processed in canonical order, each strongest first.
/// Every player joins, among the teams below `ceil(players / num_teams)` and
/// not blocked by a separation group:
/// 1. a team still under its quota for the player's position, if any;
/// 2. the one with the lowest current total rating;
/// 3. the lowest index on ties.
///
/// When every open team is blocked the separation constraint is dropped for
/// that player instead of leaving them out.
///
/// Returns no teams when `num_teams` is zero and `num_teams` empty teams for
/// an empty roster.
pub fn balance_teams_with_separation(
    players: &[Player],
    num_teams: usize,
    separation_groups: &[SeparationGroup],
) -> Vec<Team> {
    if num_teams == 0 {
        return Vec::new();
    }

    let mut teams: Vec<Team> = (0..num_teams).map(Team::new).collect();
    if players.is_empty() {
        return teams;
    }

    let capacity = players.len().div_ceil(num_teams);
    let rules = SeparationRules::new(separation_groups);
    let mut first_extra_team = 0;

    for mut group in group_by_position(players) {
        if group.is_empty() {
            continue;
        }
        group.sort_by_rating_desc();

        let quotas = team_quotas_from(group.len(), num_teams, first_extra_team);
        first_extra_team = (first_extra_team + group.len() % num_teams) % num_teams;
        debug!(
            "Distributing {} {} players with quotas {:?}",
            group.len(),
            group.position,
            quotas
        );

        for player in group.players {
            let chosen = choose_team(&teams, &quotas, group.position, capacity, player, &rules);
            let rating = player.resolved_rating();
            teams[chosen].add_player(player.clone(), group.position, rating);
            debug!(
                "{} ({}, {:.1}) -> team {} (total {:.1})",
                player.name,
                group.position,
                rating,
                chosen + 1,
                teams[chosen].total_rating
            );
        }
    }

    finalize_teams(&mut teams);

    info!(
        "Balanced {} players into {} teams (rating spread {:.1})",
        players.len(),
        num_teams,
        rating_spread(&teams)
    );

    teams
}

fn choose_team(
    teams: &[Team],
    quotas: &[usize],
    position: CanonicalPosition,
    capacity: usize,
    player: &Player,
    rules: &SeparationRules,
) -> usize {
    let mut open: Vec<usize> = (0..teams.len())
        .filter(|&i| teams[i].len() < capacity)
        .collect();
    // capacity * teams >= players, so some team is always open
    if open.is_empty() {
        open = (0..teams.len()).collect();
    }

    if rules.is_empty() {
        return best_team(teams, quotas, position, &open);
    }

    let allowed: Vec<usize> = open
        .iter()
        .copied()
        .filter(|&i| !rules.blocks(&teams[i], player))
        .collect();

    if allowed.is_empty() {
        warn!(
            "Every open team already has a player separated from {}; placing them anyway",
            player.name
        );
        best_team(teams, quotas, position, &open)
    } else {
        best_team(teams, quotas, position, &allowed)
    }
}

/// Under-quota teams first, then lowest total rating, then lowest index.
fn best_team(
    teams: &[Team],
    quotas: &[usize],
    position: CanonicalPosition,
    candidates: &[usize],
) -> usize {
    let under_quota = |i: usize| teams[i].count_of(position) < quotas[i];

    candidates
        .iter()
        .copied()
        .min_by(|&a, &b| {
            under_quota(b)
                .cmp(&under_quota(a))
                .then_with(|| teams[a].total_rating.total_cmp(&teams[b].total_rating))
                .then_with(|| a.cmp(&b))
        })
        .unwrap_or(0)
}
