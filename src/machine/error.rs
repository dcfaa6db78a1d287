//! Rejections returned by the game machine.

use crate::board::Player;
use crate::enforcement::MoveViolation;
use crate::matchmaking::ParticipantId;
use thiserror::Error;

fn describe(violations: &[MoveViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A rejected event. Rejections never change the game.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Event '{event}' is not accepted while {phase}")]
    InvalidTransition {
        event: &'static str,
        phase: &'static str,
    },

    #[error("No open seat for participant '{participant}'")]
    NoOpenSeat { participant: ParticipantId },

    #[error("Participant '{participant}' is already seated as {player}")]
    AlreadySeated {
        participant: ParticipantId,
        player: Player,
    },

    #[error("Seat for {0} is already empty")]
    SeatEmpty(Player),

    #[error("Invalid move: {}", describe(.0))]
    InvalidMove(Vec<MoveViolation>),

    #[error("Game is over; '{event}' ignored")]
    GameOver { event: &'static str },
}
