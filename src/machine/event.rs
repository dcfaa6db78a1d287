//! Events accepted by the game machine.

use crate::board::Player;
use crate::matchmaking::ParticipantId;
use serde::{Deserialize, Serialize};

/// Every input the machine understands.
///
/// Handlers match on this exhaustively, so a new kind of event does not
/// compile until every phase decides what to do with it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A participant asks for a seat.
    PlayerJoin { participant: ParticipantId },
    /// The participant seated as `player` disconnected.
    PlayerLeave { player: Player },
    /// The current mover claims a cell. Coordinates are raw caller input.
    Move { row: i64, col: i64 },
    /// Trusted, out-of-band assertion that `player` has won.
    Winner { player: Player },
    /// Re-derive whether `player` has won; raised after every move.
    CheckWinner { player: Player },
    /// `player` gives up, e.g. injected by a move-timeout collaborator.
    Forfeit { player: Player },
}

impl GameEvent {
    pub fn join(participant: impl Into<ParticipantId>) -> Self {
        GameEvent::PlayerJoin {
            participant: participant.into(),
        }
    }

    pub fn play(row: i64, col: i64) -> Self {
        GameEvent::Move { row, col }
    }

    /// Tag name as seen on the wire and in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::PlayerJoin { .. } => "player_join",
            GameEvent::PlayerLeave { .. } => "player_leave",
            GameEvent::Move { .. } => "move",
            GameEvent::Winner { .. } => "winner",
            GameEvent::CheckWinner { .. } => "check_winner",
            GameEvent::Forfeit { .. } => "forfeit",
        }
    }
}
