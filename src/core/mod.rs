//! Core state machine types.
//!
//! Game-agnostic building blocks:
//! - States via the `State` trait
//! - Guard predicates for automatic transitions
//! - Immutable transition history
//!
//! Everything here is pure; the game machine in [`crate::machine`] is the
//! only place that mutates.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
