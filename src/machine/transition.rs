//! Guarded automatic transitions.

use super::context::GameContext;
use super::phase::Phase;
use crate::core::Guard;

/// A phase change that fires on its own once its guard holds.
///
/// The machine evaluates these after every handled event, in order.
#[derive(Debug)]
pub struct Transition {
    pub from: Phase,
    pub to: Phase,
    pub guard: Guard<GameContext>,
}

impl Transition {
    /// True when the machine sits in `from` and the guard passes (pure).
    pub fn can_execute(&self, current: Phase, context: &GameContext) -> bool {
        current == self.from && self.guard.check(context)
    }
}

/// `waiting → playing → ended`.
pub fn game_transitions() -> Vec<Transition> {
    vec![
        Transition {
            from: Phase::Waiting,
            to: Phase::Playing,
            guard: Guard::labeled("both_seated", GameContext::both_seated),
        },
        Transition {
            from: Phase::Playing,
            to: Phase::Ended,
            guard: Guard::labeled("concluded", GameContext::is_concluded),
        },
    ]
}
