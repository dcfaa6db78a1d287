//! Serializable read model of a game.
//!
//! Collaborators (renderers, transports) observe a game through a snapshot
//! instead of holding a reference to it. Snapshots are views, not saves:
//! there is no way to turn one back into a running game.

use crate::board::print_board;
use crate::core::StateHistory;
use crate::machine::{Game, GameContext, GameId, Phase};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Point-in-time view of a game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    pub game_id: GameId,

    pub taken_at: DateTime<Utc>,

    /// Current phase
    pub phase: Phase,

    pub context: GameContext,

    /// Phase changes so far
    pub history: StateHistory<Phase>,

    /// Board rendered as text
    pub board: String,
}

impl Snapshot {
    pub fn capture(game: &Game) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            game_id: game.id(),
            taken_at: Utc::now(),
            phase: game.phase(),
            context: game.context().clone(),
            history: game.history().clone(),
            board: print_board(game.context().board()),
        }
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Parse a snapshot produced by [`Snapshot::to_json`].
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot)
    }
}
