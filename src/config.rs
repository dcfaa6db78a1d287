//! Per-game configuration.

use crate::board::Player;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What happens when a seated participant leaves mid-game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeavePolicy {
    /// The remaining participant wins.
    #[default]
    Forfeit,
    /// The game ends without a winner.
    Abandon,
}

/// Settings fixed at game creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Marker that moves on turn 0.
    pub starting_player: Player,
    pub leave_policy: LeavePolicy,
    /// Seed for the first-seat coin; `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_player: Player::Circles,
            leave_policy: LeavePolicy::Forfeit,
            seed: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid game configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GameConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
