//! Per-team quotas for a position group.

/// Splits `group_size` players of one position across `team_count` teams.
///
/// Every team gets `group_size / team_count`; the first `group_size % team_count`
/// teams by index get one extra.
///
/// # Examples
/// ```
/// use team_balancer::balancer::team_quotas;
///
/// assert_eq!(team_quotas(8, 2), vec![4, 4]);
/// assert_eq!(team_quotas(7, 2), vec![4, 3]);
/// assert_eq!(team_quotas(2, 3), vec![1, 1, 0]);
/// ```
pub fn team_quotas(group_size: usize, team_count: usize) -> Vec<usize> {
    team_quotas_from(group_size, team_count, 0)
}

/// Same split as [`team_quotas`], but the extra players go to the teams
/// starting at `first_team` and wrapping around.
///
/// The assigner advances `first_team` by each group's remainder, so the extra
/// seats of consecutive position groups land on different teams and no team's
/// summed quota exceeds `ceil(roster / team_count)`.
pub fn team_quotas_from(group_size: usize, team_count: usize, first_team: usize) -> Vec<usize> {
    if team_count == 0 {
        return Vec::new();
    }

    let base = group_size / team_count;
    let remainder = group_size % team_count;
    let first_team = first_team % team_count;

    (0..team_count)
        .map(|team| {
            // Distance from the first team receiving an extra player
            let offset = (team + team_count - first_team) % team_count;
            base + usize::from(offset < remainder)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split() {
        assert_eq!(team_quotas(8, 2), vec![4, 4]);
        assert_eq!(team_quotas(9, 3), vec![3, 3, 3]);
    }

    #[test]
    fn test_remainder_goes_to_first_teams() {
        assert_eq!(team_quotas(7, 2), vec![4, 3]);
        assert_eq!(team_quotas(5, 3), vec![2, 2, 1]);
        assert_eq!(team_quotas(1, 4), vec![1, 0, 0, 0]);
    }

    #[test]
    fn test_empty_group() {
        assert_eq!(team_quotas(0, 3), vec![0, 0, 0]);
    }

    #[test]
    fn test_zero_teams() {
        assert!(team_quotas(5, 0).is_empty());
        assert!(team_quotas_from(5, 0, 2).is_empty());
    }

    #[test]
    fn test_quotas_sum_to_group_size_and_differ_by_at_most_one() {
        for group_size in 0..20 {
            for team_count in 1..6 {
                for first_team in 0..team_count {
                    let quotas = team_quotas_from(group_size, team_count, first_team);
                    assert_eq!(quotas.len(), team_count);
                    assert_eq!(quotas.iter().sum::<usize>(), group_size);
                    let max = *quotas.iter().max().unwrap();
                    let min = *quotas.iter().min().unwrap();
                    assert!(max - min <= 1, "{quotas:?}");
                    assert!(min == group_size / team_count);
                }
            }
        }
    }

    #[test]
    fn test_offset_wraps_around() {
        assert_eq!(team_quotas_from(2, 3, 2), vec![1, 0, 1]);
        assert_eq!(team_quotas_from(1, 2, 1), vec![0, 1]);
        assert_eq!(team_quotas_from(5, 2, 1), vec![2, 3]);
        // Out of range starts wrap as well
        assert_eq!(team_quotas_from(1, 3, 4), vec![0, 1, 0]);
    }
}
