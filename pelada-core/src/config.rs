//! Match configuration — a TOML file holding the roster and draw settings.
//!
//! ```toml
//! [draw]
//! teams = 2
//! strategy = "balanced_by_skill"
//! seed = 7
//!
//! [[players]]
//! id = "p1"
//! name = "Ana"
//! skill = "high"
//!
//! [[groups]]
//! id = "g1"
//! name = "Friends"
//! members = ["p1"]
//! ```

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::partition::{resolve_team_count, PartitionError};
use crate::rng::draw_rng;
use crate::roster::Roster;
use crate::strategy::Strategy;

/// Default upper bound on the team count, matching the organizer screen.
pub const DEFAULT_MAX_TEAMS: usize = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error(transparent)]
    TeamCount(#[from] PartitionError),
    #[error("at most {max} teams are allowed, got {requested}")]
    TooManyTeams { requested: usize, max: usize },
}

/// `[draw]` section. Every field has a default, so the section is optional.
///
/// `seed` is a `u32` so every accepted seed can be written back as a TOML
/// integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawSettings {
    pub teams: i64,
    pub strategy: Strategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    pub max_teams: usize,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            teams: 2,
            strategy: Strategy::default(),
            seed: None,
            max_teams: DEFAULT_MAX_TEAMS,
        }
    }
}

impl DrawSettings {
    /// Replace file values with the ones given on the command line.
    /// `None` keeps the file value.
    pub fn apply_overrides(
        &mut self,
        teams: Option<i64>,
        strategy: Option<Strategy>,
        seed: Option<u32>,
    ) {
        if let Some(teams) = teams {
            self.teams = teams;
        }
        if let Some(strategy) = strategy {
            self.strategy = strategy;
        }
        if let Some(seed) = seed {
            self.seed = Some(seed);
        }
    }

    /// Generator for this draw: seeded when `seed` is set.
    pub fn rng(&self) -> StdRng {
        draw_rng(self.seed.map(u64::from))
    }

    /// Validated team count: at least two and at most `max_teams`.
    pub fn team_count(&self) -> Result<usize, ConfigError> {
        let count = resolve_team_count(self.teams)?;
        if count > self.max_teams {
            return Err(ConfigError::TooManyTeams {
                requested: count,
                max: self.max_teams,
            });
        }
        Ok(count)
    }
}

/// A whole match file: draw settings plus the roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    #[serde(default)]
    pub draw: DrawSettings,
    #[serde(flatten)]
    pub roster: Roster,
}

impl MatchConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
