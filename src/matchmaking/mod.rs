//! Matchmaking: which marker a newly joined participant receives.
//!
//! The decision is a pure function of which seats are already taken plus a
//! coin flip for the very first joiner. Recording the result in the game
//! context is the machine's job.

mod coin;

pub use coin::{CoinFlip, FixedCoin, RandomCoin};

use crate::board::Player;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a connected participant, unique per connection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random identifier for callers that have none of their own.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ParticipantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of asking for a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeatDecision {
    /// Seat the participant as `player`; `startable` once both seats are full.
    Seat { player: Player, startable: bool },
    /// Both seats are already taken.
    Full,
}

/// Decide the seat for a new participant.
///
/// # Example
///
/// ```rust
/// use tictactoe_engine::board::Player;
/// use tictactoe_engine::matchmaking::{decide_seat, FixedCoin, SeatDecision};
///
/// let mut coin = FixedCoin(Player::Circles);
///
/// assert_eq!(
///     decide_seat(false, false, &mut coin),
///     SeatDecision::Seat { player: Player::Circles, startable: false }
/// );
/// assert_eq!(
///     decide_seat(false, true, &mut coin),
///     SeatDecision::Seat { player: Player::Crosses, startable: true }
/// );
/// assert_eq!(decide_seat(true, true, &mut coin), SeatDecision::Full);
/// ```
pub fn decide_seat(
    crosses_taken: bool,
    circles_taken: bool,
    coin: &mut dyn CoinFlip,
) -> SeatDecision {
    match (crosses_taken, circles_taken) {
        (false, false) => SeatDecision::Seat {
            player: coin.flip(),
            startable: false,
        },
        (true, false) => SeatDecision::Seat {
            player: Player::Circles,
            startable: true,
        },
        (false, true) => SeatDecision::Seat {
            player: Player::Crosses,
            startable: true,
        },
        (true, true) => SeatDecision::Full,
    }
}
