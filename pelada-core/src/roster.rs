//! Roster — the caller-side collection of players and groups.
//!
//! The partitioner only ever sees slices; this type holds the pieces
//! together and keeps the two views of membership (group member sets and
//! each player's `groups` list) consistent.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{Group, GroupId, Player, PlayerId, Team, GROUP_COLORS};
use crate::partition::{partition_with_rng, PartitionError};
use crate::strategy::Strategy;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl Roster {
    pub fn new(players: Vec<Player>, groups: Vec<Group>) -> Self {
        Self { players, groups }
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn group(&self, id: &GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| &g.id == id)
    }

    pub fn group_mut(&mut self, id: &GroupId) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| &g.id == id)
    }

    /// Append an empty group, colored from the palette by position.
    pub fn add_group(&mut self, id: impl Into<String>, name: impl Into<String>) -> &mut Group {
        let color = GROUP_COLORS[self.groups.len() % GROUP_COLORS.len()];
        self.groups.push(Group::new(id, name, color));
        let last = self.groups.len() - 1;
        &mut self.groups[last]
    }

    /// Remove a group. Player `groups` lists are left for `sync_memberships`.
    pub fn remove_group(&mut self, id: &GroupId) -> Option<Group> {
        let idx = self.groups.iter().position(|g| &g.id == id)?;
        Some(self.groups.remove(idx))
    }

    /// Remove a player and drop them from every group.
    pub fn remove_player(&mut self, id: &PlayerId) -> Option<Player> {
        let idx = self.players.iter().position(|p| &p.id == id)?;
        for group in &mut self.groups {
            group.members.remove(id);
        }
        Some(self.players.remove(idx))
    }

    /// Rewrite every player's `groups` from the group member sets, in group order.
    pub fn sync_memberships(&mut self) {
        let groups = &self.groups;
        for player in &mut self.players {
            player.groups = groups
                .iter()
                .filter(|g| g.contains(&player.id))
                .map(|g| g.id.clone())
                .collect();
        }
    }

    /// Groups whose member set lists `player`.
    pub fn groups_of(&self, player: &PlayerId) -> Vec<&Group> {
        self.groups.iter().filter(|g| g.contains(player)).collect()
    }

    /// Players listed by more than one group, with the groups listing them.
    ///
    /// `SeparateGroups` places such a player once per listing group.
    pub fn overlapping_members(&self) -> BTreeMap<&PlayerId, Vec<&GroupId>> {
        let mut listings: BTreeMap<&PlayerId, Vec<&GroupId>> = BTreeMap::new();
        for group in &self.groups {
            for member in &group.members {
                listings.entry(member).or_default().push(&group.id);
            }
        }
        listings.retain(|_, groups| groups.len() > 1);
        listings
    }

    /// `(group, member)` pairs naming players that are not on the roster.
    pub fn unknown_members(&self) -> Vec<(&GroupId, &PlayerId)> {
        self.groups
            .iter()
            .flat_map(|g| g.members.iter().map(move |m| (&g.id, m)))
            .filter(|(_, m)| self.player(m).is_none())
            .collect()
    }

    /// Partition this roster's players using its own groups.
    pub fn partition<R: Rng + ?Sized>(
        &self,
        team_count: usize,
        strategy: Strategy,
        rng: &mut R,
    ) -> Result<Vec<Team<'_>>, PartitionError> {
        partition_with_rng(&self.players, team_count, strategy, &self.groups, rng)
    }
}
