//! Group — a named, colored subset of the roster.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::ids::{GroupId, PlayerId};

/// Colors handed out to new groups, in order, wrapping around.
pub const GROUP_COLORS: [&str; 6] = [
    "#FF5733", "#33FF57", "#3357FF", "#F333FF", "#33FFF5", "#FFD733",
];

/// A set of players that should be kept together on one team by
/// [`crate::strategy::Strategy::SeparateGroups`].
///
/// `color` is carried for rendering only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    #[serde(default)]
    pub members: BTreeSet<PlayerId>,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    GROUP_COLORS[0].to_string()
}

impl Group {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: GroupId::new(id),
            name: name.into(),
            members: BTreeSet::new(),
            color: color.into(),
        }
    }

    /// Builder-style helper for adding members.
    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members
            .extend(members.into_iter().map(PlayerId::new));
        self
    }

    pub fn contains(&self, player: &PlayerId) -> bool {
        self.members.contains(player)
    }

    /// Add or remove a member. Returns whether the player is a member afterwards.
    pub fn toggle(&mut self, player: PlayerId) -> bool {
        if self.members.remove(&player) {
            false
        } else {
            self.members.insert(player);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut g = Group::new("g1", "Friends", GROUP_COLORS[0]);
        assert!(g.toggle(PlayerId::new("p1")));
        assert!(g.contains(&PlayerId::new("p1")));
        assert!(!g.toggle(PlayerId::new("p1")));
        assert!(g.members.is_empty());
    }

    #[test]
    fn missing_color_uses_first_palette_entry() {
        let g: Group = toml::from_str(
            r#"
id = "g1"
name = "Friends"
members = ["p2", "p1"]
"#,
        )
        .unwrap();
        assert_eq!(g.color, "#FF5733");
        assert_eq!(g.members.len(), 2);
    }
}
