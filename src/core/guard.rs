//! Guard predicates for controlling state transitions.
//!
//! A guard is a pure boolean function over whatever context a machine keeps.
//! Automatic transitions fire only when their guard holds.

use std::fmt;

/// Pure predicate that decides whether a transition may fire.
///
/// # Example
///
/// ```rust
/// use tictactoe_engine::core::Guard;
///
/// let at_least_two = Guard::new(|seated: &usize| *seated >= 2);
///
/// assert!(!at_least_two.check(&1));
/// assert!(at_least_two.check(&2));
/// ```
pub struct Guard<T> {
    label: &'static str,
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::labeled("guard", predicate)
    }

    /// Create a guard with a label used in logs.
    pub fn labeled<F>(label: &'static str, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            label,
            predicate: Box::new(predicate),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Evaluate the predicate against a context.
    pub fn check(&self, context: &T) -> bool {
        (self.predicate)(context)
    }
}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").field("label", &self.label).finish()
    }
}
