//! Phases of a game.

use crate::core::State;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Seats are being filled.
    Waiting,
    /// Both seats filled, moves accepted.
    Playing,
    /// Terminal; no further events accepted.
    Ended,
}

impl State for Phase {
    fn name(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Playing => "playing",
            Self::Ended => "ended",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Ended)
    }
}
