//! Team — one slot of a partition result.

use serde::Serialize;

use super::ids::TeamId;
use super::player::Player;

/// A team produced by [`crate::partition::partition`].
///
/// Holds references into the caller's roster; the engine never clones or
/// mutates players.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team<'a> {
    pub id: TeamId,
    pub players: Vec<&'a Player>,
}

impl<'a> Team<'a> {
    pub fn new(id: TeamId) -> Self {
        Self {
            id,
            players: Vec::new(),
        }
    }

    /// `count` empty teams numbered `1..=count`.
    pub fn empty_set(count: usize) -> Vec<Team<'a>> {
        (0..count).map(|i| Team::new(TeamId::from_index(i))).collect()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Sum of member skill scores.
    pub fn skill_total(&self) -> u32 {
        self.players.iter().map(|p| p.skill.score()).sum()
    }

    pub fn names(&self) -> Vec<&str> {
        self.players.iter().map(|p| p.name.as_str()).collect()
    }
}
