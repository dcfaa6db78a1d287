//! Validation of incoming moves.
//!
//! Uses Stillwater's `Validation` type to collect every problem with a move
//! instead of stopping at the first one, so a caller sending `(3, -1)` hears
//! about both coordinates at once.
//!
//! # Example
//!
//! ```rust
//! use tictactoe_engine::board::Board;
//! use tictactoe_engine::enforcement::{validate_move, MoveViolation};
//!
//! let errors = validate_move(&Board::new(), 3, -1).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! assert!(errors.contains(&MoveViolation::RowOutOfRange { row: 3 }));
//! ```

pub mod rules;
pub mod violations;

pub use rules::validate_move;
pub use violations::MoveViolation;
