//! The game state machine.
//!
//! Owns the game context and moves it through `waiting → playing → ended`
//! in response to [`GameEvent`]s:
//!
//! - **waiting**: `player_join` seats participants; the second seat starts the game
//! - **playing**: `move` applies the current mover's mark and raises
//!   `check_winner`; a completed line, a full board, a declared winner or a
//!   forfeit concludes the game
//! - **ended**: terminal, every event is rejected
//!
//! Events are handled one at a time and to completion. Rejected events are
//! returned as [`GameError`]s and never change the game.

mod context;
mod error;
mod event;
mod game;
mod phase;
mod transition;

pub use context::{EndReason, GameContext};
pub use error::GameError;
pub use event::GameEvent;
pub use game::{Game, GameId, StepResult};
pub use phase::Phase;
pub use transition::{game_transitions, Transition};
