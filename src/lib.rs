//! Tic-tac-toe as an event-driven state machine.
//!
//! The engine accepts player-join and move events, keeps the authoritative
//! game state, and decides when a game is over. Each [`Game`] is an owned
//! value: create one per match, drive it with [`Game::send`], drop it when
//! done.
//!
//! # Layout
//!
//! - [`board`]: the 3×3 board, win detection and text rendering
//! - [`matchmaking`]: seating participants, with an injectable coin flip
//! - [`enforcement`]: move validation that reports every violation at once
//! - [`machine`]: the `waiting → playing → ended` machine
//! - [`core`]: game-agnostic state, guard and history primitives
//! - [`snapshot`]: serializable view of a game for collaborators
//!
//! # Example
//!
//! ```rust
//! use tictactoe_engine::board::Player;
//! use tictactoe_engine::machine::{GameEvent, Phase};
//! use tictactoe_engine::matchmaking::FixedCoin;
//! use tictactoe_engine::GameBuilder;
//!
//! let mut game = GameBuilder::new()
//!     .starting_player(Player::Crosses)
//!     .coin(FixedCoin(Player::Crosses))
//!     .build();
//!
//! game.send(GameEvent::join("alice")).unwrap();
//! game.send(GameEvent::join("bob")).unwrap();
//!
//! // crosses on the top row, circles answering on the middle row
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     game.send(GameEvent::play(row, col)).unwrap();
//! }
//!
//! assert_eq!(game.phase(), Phase::Ended);
//! assert_eq!(game.context().winner(), Some(Player::Crosses));
//! assert_eq!(game.context().board().to_string(), " X | X | X \n O | O |---\n---|---|---");
//! ```

pub mod board;
pub mod builder;
pub mod config;
pub mod core;
pub mod enforcement;
pub mod machine;
pub mod matchmaking;
pub mod snapshot;

// Re-export commonly used types
pub use builder::GameBuilder;
pub use config::{ConfigError, GameConfig, LeavePolicy};
pub use crate::core::{Guard, State, StateHistory, StateTransition};
pub use machine::{Game, GameError, GameEvent, Phase, StepResult};
