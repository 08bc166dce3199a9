//! Player — a roster entry with a skill rating.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{GroupId, PlayerId};

/// Three-level skill rating. Ordering is `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Low,
    Medium,
    High,
}

impl Skill {
    pub const ALL: [Skill; 3] = [Skill::Low, Skill::Medium, Skill::High];

    /// Numeric score used by team summaries: Low = 1, Medium = 2, High = 3.
    pub fn score(self) -> u32 {
        match self {
            Skill::Low => 1,
            Skill::Medium => 2,
            Skill::High => 3,
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Skill::Low => "low",
            Skill::Medium => "medium",
            Skill::High => "high",
        };
        f.pad(label)
    }
}

/// Preferred field position. Display only; never used by the partitioner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

/// Running match statistics carried with a player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub games_played: u32,
    pub goals: u32,
    pub assists: u32,
    pub wins: u32,
    pub losses: u32,
}

/// A roster entry.
///
/// The partitioner only reads `id` and `skill`; `groups` mirrors the group
/// membership lists and is kept in sync by [`crate::roster::Roster::sync_memberships`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub skill: Skill,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<PlayerStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, skill: Skill) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
            skill,
            groups: Vec::new(),
            stats: None,
            position: None,
        }
    }
}
