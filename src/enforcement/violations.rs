//! Move violations.

use thiserror::Error;

/// Reasons a move is refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveViolation {
    #[error("Row {row} is outside the board (expected 0..=2)")]
    RowOutOfRange { row: i64 },

    #[error("Column {col} is outside the board (expected 0..=2)")]
    ColumnOutOfRange { col: i64 },

    #[error("Cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },
}
