//! Pelada Core — team partitioning for informal matches.
//!
//! This crate contains the engine that splits a roster into teams:
//! - Domain types (players, skills, groups, teams, ids)
//! - Strategy resolver (random, balanced by skill, mix groups, separate groups)
//! - Partitioner with round-robin and group-aware distribution
//! - Roster helpers for group membership bookkeeping
//! - Team skill summaries
//! - TOML match configuration

pub mod config;
pub mod domain;
pub mod partition;
pub mod rng;
pub mod roster;
pub mod strategy;
pub mod summary;

pub use config::{ConfigError, DrawSettings, MatchConfig};
pub use domain::{Group, GroupId, Player, PlayerId, Skill, Team, TeamId};
pub use partition::{partition, partition_with_rng, resolve_team_count, PartitionError};
pub use roster::Roster;
pub use strategy::Strategy;
pub use summary::{PartitionSummary, TeamSummary};
