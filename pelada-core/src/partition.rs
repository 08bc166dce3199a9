//! Team partitioning engine.
//!
//! `partition` is a pure function of its inputs plus an injected random
//! source. It validates the two preconditions up front, resolves the strategy
//! to an ordering step, and deals players into freshly built teams:
//!
//! - `Random` / `MixGroups`: uniform shuffle, then round-robin.
//! - `BalancedBySkill`: stable sort by skill (high first), then round-robin.
//! - `SeparateGroups`: group `j` goes whole to team `(j mod n) + 1`, then the
//!   ungrouped players are dealt round-robin in roster order.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, trace};

use crate::domain::{Group, Player, PlayerId, Team};
use crate::strategy::{Ordering, Strategy};

/// Fewest teams a partition can have.
pub const MIN_TEAMS: usize = 2;

/// Precondition failures. Detected before any work; no partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PartitionError {
    #[error("at least 2 teams are required, got {0}")]
    InvalidTeamCount(i64),
    #[error("not enough players: need {required}, have {available}")]
    InsufficientPlayers { required: usize, available: usize },
}

/// Validate a signed team count (config files, CLI arguments).
///
/// Zero, one and negative values are all `InvalidTeamCount`.
pub fn resolve_team_count(requested: i64) -> Result<usize, PartitionError> {
    match usize::try_from(requested) {
        Ok(count) if count >= MIN_TEAMS => Ok(count),
        _ => Err(PartitionError::InvalidTeamCount(requested)),
    }
}

/// Partition `players` into `team_count` teams using the thread-local RNG.
///
/// See [`partition_with_rng`] for the seeded form.
pub fn partition<'a>(
    players: &'a [Player],
    team_count: usize,
    strategy: Strategy,
    groups: &[Group],
) -> Result<Vec<Team<'a>>, PartitionError> {
    partition_with_rng(players, team_count, strategy, groups, &mut rand::thread_rng())
}

/// Partition `players` into `team_count` teams, drawing randomness from `rng`.
///
/// Returns exactly `team_count` teams numbered `1..=team_count`. `rng` is only
/// consulted by the shuffling strategies.
pub fn partition_with_rng<'a, R: Rng + ?Sized>(
    players: &'a [Player],
    team_count: usize,
    strategy: Strategy,
    groups: &[Group],
    rng: &mut R,
) -> Result<Vec<Team<'a>>, PartitionError> {
    check_preconditions(players.len(), team_count)?;

    debug!(
        players = players.len(),
        team_count,
        %strategy,
        groups = groups.len(),
        "partitioning roster"
    );

    let teams = match strategy.ordering() {
        Ordering::Shuffle => {
            let mut ordered: Vec<&Player> = players.iter().collect();
            ordered.shuffle(rng);
            deal_round_robin(ordered, team_count)
        }
        Ordering::SkillDescending => {
            // sort_by is stable: equal skills keep roster order.
            let mut ordered: Vec<&Player> = players.iter().collect();
            ordered.sort_by(|a, b| b.skill.cmp(&a.skill));
            deal_round_robin(ordered, team_count)
        }
        Ordering::GroupsFirst => separate_groups(players, team_count, groups),
    };

    Ok(teams)
}

fn check_preconditions(available: usize, team_count: usize) -> Result<(), PartitionError> {
    if team_count < MIN_TEAMS {
        return Err(PartitionError::InvalidTeamCount(
            i64::try_from(team_count).unwrap_or(i64::MAX),
        ));
    }
    if available < team_count {
        return Err(PartitionError::InsufficientPlayers {
            required: team_count,
            available,
        });
    }
    Ok(())
}

/// Deal `ordered` into `team_count` new teams: position `i` goes to team
/// `(i mod team_count) + 1`.
pub fn deal_round_robin<'a, I>(ordered: I, team_count: usize) -> Vec<Team<'a>>
where
    I: IntoIterator<Item = &'a Player>,
{
    let mut teams = Team::empty_set(team_count);
    deal_into(&mut teams, ordered);
    teams
}

/// Append `ordered` to existing teams round-robin, starting at team 1.
fn deal_into<'a, I>(teams: &mut [Team<'a>], ordered: I)
where
    I: IntoIterator<Item = &'a Player>,
{
    let n = teams.len();
    for (i, player) in ordered.into_iter().enumerate() {
        let slot = i % n;
        trace!(player = %player.id, team = %teams[slot].id, "assign");
        teams[slot].players.push(player);
    }
}

/// Two-pass group-aware distribution.
///
/// Pass one appends each group's roster members (in roster order) to team
/// `(j mod team_count) + 1`; member ids that are not on the roster are
/// skipped. A player listed by several groups is appended once per group.
/// Pass two deals the players that no group lists, round-robin over their
/// own sub-sequence. Team sizes are not rebalanced between passes.
fn separate_groups<'a>(players: &'a [Player], team_count: usize, groups: &[Group]) -> Vec<Team<'a>> {
    let mut teams = Team::empty_set(team_count);

    for (j, group) in groups.iter().enumerate() {
        let slot = j % team_count;
        let before = teams[slot].len();
        teams[slot]
            .players
            .extend(players.iter().filter(|p| group.contains(&p.id)));
        trace!(
            group = %group.id,
            team = %teams[slot].id,
            placed = teams[slot].len() - before,
            "group placed"
        );
    }

    let grouped: HashSet<&PlayerId> = groups.iter().flat_map(|g| g.members.iter()).collect();
    deal_into(
        &mut teams,
        players.iter().filter(|p| !grouped.contains(&p.id)),
    );

    teams
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Skill;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn roster(entries: &[(&str, Skill)]) -> Vec<Player> {
        entries
            .iter()
            .map(|(id, skill)| Player::new(*id, id.to_uppercase(), *skill))
            .collect()
    }

    fn ids(team: &Team<'_>) -> Vec<String> {
        team.players.iter().map(|p| p.id.0.clone()).collect()
    }

    #[test]
    fn resolve_team_count_rejects_small_and_negative() {
        assert_eq!(resolve_team_count(2), Ok(2));
        assert_eq!(resolve_team_count(10), Ok(10));
        for bad in [1, 0, -1, -50] {
            assert_eq!(
                resolve_team_count(bad),
                Err(PartitionError::InvalidTeamCount(bad))
            );
        }
    }

    #[test]
    fn team_count_checked_before_player_count() {
        let players = roster(&[("a", Skill::Low)]);
        let err = partition(&players, 1, Strategy::Random, &[]).unwrap_err();
        assert_eq!(err, PartitionError::InvalidTeamCount(1));
    }

    #[test]
    fn insufficient_players_reports_both_counts() {
        let players = roster(&[("a", Skill::Low), ("b", Skill::Low), ("c", Skill::Low)]);
        let err = partition(&players, 5, Strategy::BalancedBySkill, &[]).unwrap_err();
        assert_eq!(
            err,
            PartitionError::InsufficientPlayers {
                required: 5,
                available: 3
            }
        );
        assert_eq!(err.to_string(), "not enough players: need 5, have 3");
    }

    #[test]
    fn balanced_sorted_roster_is_dealt_in_place() {
        let players = roster(&[
            ("a", Skill::High),
            ("b", Skill::High),
            ("c", Skill::Medium),
            ("d", Skill::Low),
        ]);
        let teams = partition(&players, 2, Strategy::BalancedBySkill, &[]).unwrap();
        assert_eq!(ids(&teams[0]), vec!["a", "c"]);
        assert_eq!(ids(&teams[1]), vec!["b", "d"]);
    }

    #[test]
    fn balanced_sort_is_stable_within_a_tier() {
        let players = roster(&[
            ("l1", Skill::Low),
            ("h1", Skill::High),
            ("m1", Skill::Medium),
            ("h2", Skill::High),
            ("l2", Skill::Low),
            ("m2", Skill::Medium),
        ]);
        let teams = partition(&players, 3, Strategy::BalancedBySkill, &[]).unwrap();
        assert_eq!(ids(&teams[0]), vec!["h1", "m2"]);
        assert_eq!(ids(&teams[1]), vec!["h2", "l1"]);
        assert_eq!(ids(&teams[2]), vec!["m1", "l2"]);
    }

    #[test]
    fn balanced_is_round_robin_not_bin_packing() {
        // One strong player and nine weak ones: team 1 ends up stronger.
        let mut entries = vec![("h", Skill::High)];
        let lows: Vec<String> = (0..9).map(|i| format!("l{i}")).collect();
        entries.extend(lows.iter().map(|id| (id.as_str(), Skill::Low)));
        let players = roster(&entries);

        let teams = partition(&players, 2, Strategy::BalancedBySkill, &[]).unwrap();
        assert_eq!(teams[0].len(), 5);
        assert_eq!(teams[1].len(), 5);
        assert_eq!(teams[0].skill_total(), 3 + 4);
        assert_eq!(teams[1].skill_total(), 5);
    }

    #[test]
    fn separate_groups_two_pass_rule() {
        let players = roster(&[
            ("p1", Skill::Low),
            ("p2", Skill::Low),
            ("p3", Skill::Low),
            ("p4", Skill::Low),
        ]);
        let groups = vec![Group::new("g1", "G1", "#FF5733").with_members(["p1", "p2"])];

        let teams = partition(&players, 2, Strategy::SeparateGroups, &groups).unwrap();
        assert_eq!(ids(&teams[0]), vec!["p1", "p2", "p3"]);
        assert_eq!(ids(&teams[1]), vec!["p4"]);
    }

    #[test]
    fn separate_groups_wraps_when_more_groups_than_teams() {
        let players = roster(&[
            ("a", Skill::Low),
            ("b", Skill::Low),
            ("c", Skill::Low),
            ("d", Skill::Low),
        ]);
        let groups = vec![
            Group::new("g1", "G1", "#FF5733").with_members(["a"]),
            Group::new("g2", "G2", "#33FF57").with_members(["b"]),
            Group::new("g3", "G3", "#3357FF").with_members(["c"]),
        ];
        let teams = partition(&players, 2, Strategy::SeparateGroups, &groups).unwrap();
        assert_eq!(ids(&teams[0]), vec!["a", "c", "d"]);
        assert_eq!(ids(&teams[1]), vec!["b"]);
    }

    #[test]
    fn separate_groups_members_follow_roster_order() {
        let players = roster(&[("x", Skill::Low), ("y", Skill::Low), ("z", Skill::Low)]);
        // Membership set order differs from roster order; unknown ids are ignored.
        let groups = vec![Group::new("g1", "G1", "#FF5733").with_members(["z", "ghost", "x"])];
        let teams = partition(&players, 2, Strategy::SeparateGroups, &groups).unwrap();
        assert_eq!(ids(&teams[0]), vec!["x", "z", "y"]);
        assert!(teams[1].is_empty());
    }

    #[test]
    fn separate_groups_duplicates_multi_group_members() {
        let players = roster(&[("a", Skill::Low), ("b", Skill::Low), ("c", Skill::Low)]);
        let groups = vec![
            Group::new("g1", "G1", "#FF5733").with_members(["a", "b"]),
            Group::new("g2", "G2", "#33FF57").with_members(["b"]),
        ];
        let teams = partition(&players, 2, Strategy::SeparateGroups, &groups).unwrap();
        assert_eq!(ids(&teams[0]), vec!["a", "b", "c"]);
        assert_eq!(ids(&teams[1]), vec!["b"]);
    }

    #[test]
    fn separate_groups_without_groups_is_round_robin() {
        let players = roster(&[("a", Skill::High), ("b", Skill::Low), ("c", Skill::Medium)]);
        let teams = partition(&players, 2, Strategy::SeparateGroups, &[]).unwrap();
        assert_eq!(ids(&teams[0]), vec!["a", "c"]);
        assert_eq!(ids(&teams[1]), vec!["b"]);
    }

    #[test]
    fn shuffle_strategies_are_reproducible_with_a_seed() {
        let players: Vec<Player> = (0..12)
            .map(|i| Player::new(format!("p{i}"), format!("P{i}"), Skill::Medium))
            .collect();

        for strategy in [Strategy::Random, Strategy::MixGroups] {
            let a = partition_with_rng(&players, 3, strategy, &[], &mut StdRng::seed_from_u64(9))
                .unwrap();
            let b = partition_with_rng(&players, 3, strategy, &[], &mut StdRng::seed_from_u64(9))
                .unwrap();
            assert_eq!(a, b);
            assert!(a.iter().all(|t| t.len() == 4));
        }
    }

    #[test]
    fn mix_groups_ignores_membership() {
        let players: Vec<Player> = (0..6)
            .map(|i| Player::new(format!("p{i}"), format!("P{i}"), Skill::Low))
            .collect();
        let groups = vec![Group::new("g1", "G1", "#FF5733").with_members(["p0", "p1", "p2", "p3"])];

        let mut rng = StdRng::seed_from_u64(3);
        let with = partition_with_rng(&players, 2, Strategy::MixGroups, &groups, &mut rng).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let without = partition_with_rng(&players, 2, Strategy::MixGroups, &[], &mut rng).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn deal_round_robin_directly() {
        let players = roster(&[("a", Skill::Low), ("b", Skill::Low), ("c", Skill::Low)]);
        let teams = deal_round_robin(players.iter().rev(), 2);
        assert_eq!(ids(&teams[0]), vec!["c", "a"]);
        assert_eq!(ids(&teams[1]), vec!["b"]);
    }
}
