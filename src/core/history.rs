//! Phase transition history.
//!
//! An in-memory, append-only log of the phase changes a single game went
//! through. Nothing here is persisted; the log lives and dies with its game.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase change.
///
/// # Example
///
/// ```rust
/// use tictactoe_engine::core::StateTransition;
/// use tictactoe_engine::machine::Phase;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Phase::Waiting,
///     to: Phase::Playing,
///     timestamp: Utc::now(),
///     turn: 0,
/// };
/// assert_eq!(transition.to, Phase::Playing);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
    /// Move counter at the moment of the change
    pub turn: u32,
}

/// Ordered history of state transitions.
///
/// `record` returns a new history and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use tictactoe_engine::core::{StateHistory, StateTransition};
/// use tictactoe_engine::machine::Phase;
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: Phase::Waiting,
///         to: Phase::Playing,
///         timestamp: Utc::now(),
///         turn: 0,
///     })
///     .record(StateTransition {
///         from: Phase::Playing,
///         to: Phase::Ended,
///         timestamp: Utc::now(),
///         turn: 5,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Phase::Waiting, &Phase::Playing, &Phase::Ended]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// States traversed in order: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Wall-clock time between the first and last recorded transition.
    ///
    /// `None` when nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::Phase;

    fn started(turn: u32) -> StateTransition<Phase> {
        StateTransition {
            from: Phase::Waiting,
            to: Phase::Playing,
            timestamp: Utc::now(),
            turn,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<Phase> = StateHistory::new();
        assert!(history.transitions().is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_leaves_original_untouched() {
        let history = StateHistory::new();
        let next = history.record(started(0));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(next.transitions().len(), 1);
    }

    #[test]
    fn path_follows_game_lifecycle() {
        let history = StateHistory::new().record(started(0)).record(StateTransition {
            from: Phase::Playing,
            to: Phase::Ended,
            timestamp: Utc::now(),
            turn: 7,
        });

        let path = history.get_path();
        assert_eq!(path, vec![&Phase::Waiting, &Phase::Playing, &Phase::Ended]);
        assert_eq!(history.transitions()[1].turn, 7);
    }

    #[test]
    fn single_transition_has_zero_duration() {
        let history = StateHistory::new().record(started(0));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(started(0));

        let json = serde_json::to_string(&history).unwrap();
        let back: StateHistory<Phase> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.get_path(), history.get_path());
    }
}
