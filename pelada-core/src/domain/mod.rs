//! Domain types: players, groups, teams and their identities.

pub mod group;
pub mod ids;
pub mod player;
pub mod team;

pub use group::{Group, GROUP_COLORS};
pub use ids::{GroupId, PlayerId, TeamId};
pub use player::{Player, PlayerStats, Position, Skill};
pub use team::Team;
