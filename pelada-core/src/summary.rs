//! Team summaries — skill average and tally per team, spread across teams.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::{Skill, Team, TeamId};

/// Skill profile of one team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSummary {
    pub id: TeamId,
    pub size: usize,
    pub skill_total: u32,
    /// Mean skill score; `None` for an empty team.
    pub average_skill: Option<f64>,
    /// Players per skill level. Every level is present, possibly with zero.
    pub tally: BTreeMap<Skill, usize>,
}

impl TeamSummary {
    pub fn of(team: &Team<'_>) -> Self {
        let mut tally: BTreeMap<Skill, usize> = Skill::ALL.iter().map(|s| (*s, 0)).collect();
        for player in &team.players {
            *tally.entry(player.skill).or_insert(0) += 1;
        }

        let skill_total = team.skill_total();
        let average_skill = if team.is_empty() {
            None
        } else {
            Some(f64::from(skill_total) / team.len() as f64)
        };

        Self {
            id: team.id,
            size: team.len(),
            skill_total,
            average_skill,
            tally,
        }
    }
}

/// Summary of a whole partition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartitionSummary {
    pub teams: Vec<TeamSummary>,
    /// Largest team size minus smallest.
    pub size_spread: usize,
    /// Highest team skill total minus lowest.
    pub skill_spread: u32,
}

impl PartitionSummary {
    pub fn of(teams: &[Team<'_>]) -> Self {
        let teams: Vec<TeamSummary> = teams.iter().map(TeamSummary::of).collect();
        let size_spread = spread(teams.iter().map(|t| t.size));
        let skill_spread = spread(teams.iter().map(|t| t.skill_total));
        Self {
            teams,
            size_spread,
            skill_spread,
        }
    }
}

fn spread<T, I>(values: I) -> T
where
    T: Ord + Copy + Default + std::ops::Sub<Output = T>,
    I: Iterator<Item = T> + Clone,
{
    match (values.clone().min(), values.max()) {
        (Some(min), Some(max)) => max - min,
        _ => T::default(),
    }
}
