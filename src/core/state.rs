//! Core State trait for state machine phases.
//!
//! Every phase a machine can sit in implements this trait, which exposes
//! pure inspection methods with no side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// States are plain values: cheap to clone, comparable, and serializable so
/// they can appear in histories and snapshots handed to collaborators.
///
/// # Example
///
/// ```rust
/// use tictactoe_engine::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lobby {
///     Open,
///     Closed,
/// }
///
/// impl State for Lobby {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Open => "open",
///             Self::Closed => "closed",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Closed)
///     }
/// }
///
/// assert_eq!(Lobby::Open.name(), "open");
/// assert!(Lobby::Closed.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name exposed to observers (logs, snapshots, UIs).
    fn name(&self) -> &'static str;

    /// Check if this is a terminal state.
    ///
    /// A terminal state accepts no further events. Default is `false`.
    fn is_final(&self) -> bool {
        false
    }
}
