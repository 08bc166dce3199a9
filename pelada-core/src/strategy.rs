//! Strategy selection — maps a named policy onto an ordering step.
//!
//! Every strategy ends in round-robin distribution; they differ only in how
//! the roster is ordered first and whether groups are placed before
//! individuals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Named team generation policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Random,
    #[default]
    #[serde(alias = "balanced")]
    BalancedBySkill,
    MixGroups,
    SeparateGroups,
}

/// Ordering step a strategy resolves to before distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    /// Uniform shuffle of the whole roster.
    Shuffle,
    /// Stable sort by skill, highest first.
    SkillDescending,
    /// Whole groups go to teams first, ungrouped players follow in roster order.
    GroupsFirst,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy '{0}'. Valid: random, balanced_by_skill, mix_groups, separate_groups")]
pub struct ParseStrategyError(pub String);

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Random,
        Strategy::BalancedBySkill,
        Strategy::MixGroups,
        Strategy::SeparateGroups,
    ];

    pub fn ordering(self) -> Ordering {
        match self {
            // MixGroups ignores membership on purpose: a plain shuffle breaks groups up.
            Strategy::Random | Strategy::MixGroups => Ordering::Shuffle,
            Strategy::BalancedBySkill => Ordering::SkillDescending,
            Strategy::SeparateGroups => Ordering::GroupsFirst,
        }
    }

    /// Whether repeated calls with identical inputs may differ.
    pub fn uses_randomness(self) -> bool {
        self.ordering() == Ordering::Shuffle
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::BalancedBySkill => "balanced_by_skill",
            Strategy::MixGroups => "mix_groups",
            Strategy::SeparateGroups => "separate_groups",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Strategy::Random => "shuffle the roster, then deal players round-robin",
            Strategy::BalancedBySkill => {
                "sort by skill (high to low), then deal round-robin so tiers spread across teams"
            }
            Strategy::MixGroups => "shuffle ignoring groups, so group members end up mixed",
            Strategy::SeparateGroups => {
                "keep each group on one team, then deal ungrouped players round-robin"
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "random" => Ok(Strategy::Random),
            "balanced" | "balanced_by_skill" => Ok(Strategy::BalancedBySkill),
            "mix_groups" => Ok(Strategy::MixGroups),
            "separate_groups" => Ok(Strategy::SeparateGroups),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}
