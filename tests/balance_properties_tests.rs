use proptest::prelude::*;
use team_balancer::balancer::{CanonicalPosition, Player, balance_teams};
use team_balancer::testing_utils::{
    RosterBuilder, assigned_ids, position_gap, size_gap, team_names,
};

/// Labels covering every position, aliases with hyphens and unknown labels
const LABELS: &[&str] = &[
    "Goleiro", "Gol", "Zagueiro", "Fixo", "Centre-Back", "Lat D", "right-back", "Lat E",
    "Volante", "Meia", "Ala D", "Ala E", "Pivô", "Ata", "Striker", "", "Libero",
];

/// One label per canonical position, in processing order
const POSITION_LABELS: [&str; 7] = ["Gol", "Zag", "Lat D", "Lat E", "Volante", "Meia", "Ata"];

fn rating_strategy() -> impl Strategy<Value = Option<f64>> {
    // Whole numbers produce plenty of rating ties
    prop_oneof![
        Just(None),
        (1u8..=5).prop_map(|r| Some(f64::from(r))),
        (0.5f64..5.0).prop_map(Some),
    ]
}

/// Any mix of labels, ratings and stars
fn roster_strategy() -> impl Strategy<Value = Vec<Player>> {
    prop::collection::vec(
        (0..LABELS.len(), rating_strategy(), rating_strategy()),
        0..40,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (label, rating, stars))| {
                let mut player = Player::new(format!("p{i}"), format!("Player {i}"), LABELS[label]);
                player.rating = rating;
                player.stars = stars;
                player
            })
            .collect()
    })
}

/// Zero to three players per position, so most groups leave extra seats to hand out
fn sparse_roster_strategy() -> impl Strategy<Value = Vec<Player>> {
    (
        prop::collection::vec(0usize..=3, POSITION_LABELS.len()),
        prop::collection::vec(1u8..=5, 21),
    )
        .prop_map(|(counts, ratings)| {
            let mut builder = RosterBuilder::new();
            let mut next = 0;
            for (label, &count) in POSITION_LABELS.iter().zip(&counts) {
                for _ in 0..count {
                    builder = builder.player(&format!("{label} {next}"), label, f64::from(ratings[next]));
                    next += 1;
                }
            }
            builder.build()
        })
}

fn any_roster() -> impl Strategy<Value = Vec<Player>> {
    prop_oneof![roster_strategy(), sparse_roster_strategy()]
}

proptest! {
    /// Every player lands on exactly one team
    #[test]
    fn test_partition_completeness(players in any_roster(), t in 1usize..8) {
        let teams = balance_teams(&players, t);

        let mut expected: Vec<String> = players.iter().map(|p| p.id.clone()).collect();
        expected.sort();
        prop_assert_eq!(teams.len(), t);
        prop_assert_eq!(assigned_ids(&teams), expected);
    }

    /// Team sizes and per-position counts differ by at most one; no team exceeds capacity
    #[test]
    fn test_position_spread_and_capacity(players in any_roster(), t in 1usize..8) {
        let teams = balance_teams(&players, t);
        let capacity = players.len().div_ceil(t);

        prop_assert!(size_gap(&teams) <= 1);
        prop_assert!(teams.iter().all(|team| team.len() <= capacity));
        for position in CanonicalPosition::ALL {
            prop_assert!(
                position_gap(&teams, position) <= 1,
                "{} counts differ by more than one", position
            );
        }
    }

    /// The same input always yields the same teams
    #[test]
    fn test_determinism(players in any_roster(), t in 1usize..8) {
        prop_assert_eq!(balance_teams(&players, t), balance_teams(&players, t));
    }
}

/// A mixed roster with uneven position groups and every kind of rating input
fn weekend_roster() -> Vec<Player> {
    RosterBuilder::new()
        .group("Gk", "Goleiro", &[4.0, 3.5, 2.0])
        .group("Cb", "Zagueiro", &[5.0, 3.0, 3.0, 1.5])
        .group("Rb", "Lat D", &[4.0, 2.5])
        .player("Jean", "Lat E", 3.0)
        .group("Dm", "Volante", &[4.5, 2.0])
        .group("Mid", "Meia", &[5.0, 4.0, 3.5, 3.0, 2.0, 1.0])
        .player_with_stars("Boka", "Ata", 5.0)
        .player_with_stars("Lopes", "Atacante", 4.0)
        .unrated("Davi", "Pivô")
        .player("Mariano", "Ponta", 2.0)
        .player("Cassio", "Centroavante", 1.0)
        .build()
}

/// Single-player groups pass their extra seat along so the midfield still splits evenly
#[test]
fn test_single_seat_groups_rotate() {
    let players = RosterBuilder::new()
        .player("Kebler", "Goleiro", 3.0)
        .player("Lopes", "Zagueiro", 3.0)
        .player("Mariano", "Lat D", 3.0)
        .player("Jean", "Lat E", 3.0)
        .group("Mid", "Meia", &[4.0, 3.0, 2.0, 1.0])
        .build();

    let teams = balance_teams(&players, 2);

    assert_eq!(size_gap(&teams), 0);
    for team in &teams {
        assert_eq!(team.count_of(CanonicalPosition::Mid), 2);
    }
}

/// Test that totals and counts agree with the assigned players
#[test]
fn test_team_bookkeeping() {
    let teams = balance_teams(&weekend_roster(), 3);

    for team in &teams {
        let total: f64 = team.players.iter().map(Player::resolved_rating).sum();
        assert!((team.total_rating - total).abs() < 1e-9);

        for position in CanonicalPosition::ALL {
            let count = team
                .players
                .iter()
                .filter(|p| p.canonical_position() == position)
                .count();
            assert_eq!(team.count_of(position), count);
        }
    }
}

/// Test that each team lists players by position, then name
#[test]
fn test_finalized_order() {
    for team in balance_teams(&weekend_roster(), 2) {
        let keys: Vec<(CanonicalPosition, String)> = team
            .players
            .iter()
            .map(|p| (p.canonical_position(), p.name.clone()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}

/// Ten players, five forwards rated 5..1, two teams
#[test]
fn test_forward_split_scenario() {
    let players = RosterBuilder::new()
        .group("Gk", "Goleiro", &[2.0, 1.0, 1.0])
        .group("Cb", "Zagueiro", &[3.0, 1.0])
        .group("F", "Atacante", &[5.0, 4.0, 3.0, 2.0, 1.0])
        .build();

    let teams = balance_teams(&players, 2);

    let forwards: Vec<usize> = teams
        .iter()
        .map(|t| t.count_of(CanonicalPosition::Forward))
        .collect();
    assert!(forwards == [2, 3] || forwards == [3, 2]);

    let subtotals: Vec<f64> = teams
        .iter()
        .map(|t| {
            t.players
                .iter()
                .filter(|p| p.canonical_position() == CanonicalPosition::Forward)
                .map(Player::resolved_rating)
                .sum()
        })
        .collect();
    assert!((subtotals[0] - subtotals[1]).abs() <= 1.0);

    assert_eq!(team_names(&teams[0]), ["Gk1", "Gk3", "Cb2", "F1", "F4"]);
    assert_eq!(team_names(&teams[1]), ["Gk2", "Cb1", "F2", "F3", "F5"]);
    assert_eq!(teams[0].total_rating, 11.0);
    assert_eq!(teams[1].total_rating, 12.0);
}

/// A position nobody plays stays at zero everywhere
#[test]
fn test_missing_position_scenario() {
    let players = RosterBuilder::new()
        .group("Gk", "Goleiro", &[3.0, 3.0, 3.0])
        .group("Mid", "Meio", &[4.0, 3.0, 2.0, 1.0, 5.0, 2.5])
        .build();

    let teams = balance_teams(&players, 3);
    assert_eq!(teams.len(), 3);
    for team in &teams {
        assert_eq!(team.count_of(CanonicalPosition::LeftBack), 0);
        assert_eq!(team.count_of(CanonicalPosition::Goalkeeper), 1);
        assert_eq!(team.count_of(CanonicalPosition::Mid), 2);
    }
}

/// Zero teams requested
#[test]
fn test_zero_teams_scenario() {
    assert!(balance_teams(&weekend_roster(), 0).is_empty());
}

/// Empty roster split into four teams
#[test]
fn test_empty_roster_scenario() {
    let teams = balance_teams(&[], 4);
    assert_eq!(teams.len(), 4);
    for (i, team) in teams.iter().enumerate() {
        assert_eq!(team.index, i);
        assert!(team.is_empty());
        assert_eq!(team.total_rating, 0.0);
    }
}

/// More teams than players leaves the extra teams empty
#[test]
fn test_more_teams_than_players() {
    let players = RosterBuilder::new()
        .player("Boka", "Ata", 5.0)
        .player("Lopes", "Zag", 3.0)
        .player("Jean", "Meia", 4.0)
        .build();

    let teams = balance_teams(&players, 5);
    assert_eq!(teams.iter().filter(|t| t.len() == 1).count(), 3);
    assert_eq!(teams.iter().filter(|t| t.is_empty()).count(), 2);
}

/// Unknown and blank labels count as midfielders
#[test]
fn test_unknown_labels_default_to_mid() {
    let players = RosterBuilder::new()
        .player("Davi", "", 3.0)
        .player("Cassio", "Libero", 3.0)
        .player("Jean", "Meia", 3.0)
        .player("Lucas", "Meia", 3.0)
        .build();

    let teams = balance_teams(&players, 2);
    for team in &teams {
        assert_eq!(team.count_of(CanonicalPosition::Mid), 2);
    }
}
