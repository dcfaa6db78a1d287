//! Move validation rules using Validation.

use crate::board::{Board, Position, SIZE};
use crate::enforcement::violations::MoveViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<MoveViolation>>;

fn in_range(value: i64) -> bool {
    (0..SIZE as i64).contains(&value)
}

fn check_row(row: i64) -> Check {
    if in_range(row) {
        Validation::success(())
    } else {
        Validation::fail(MoveViolation::RowOutOfRange { row })
    }
}

fn check_col(col: i64) -> Check {
    if in_range(col) {
        Validation::success(())
    } else {
        Validation::fail(MoveViolation::ColumnOutOfRange { col })
    }
}

/// Validate raw move coordinates against a board.
///
/// Both coordinates are checked together so a move that is off the board
/// in both directions reports both violations. Occupancy is only checked
/// once the coordinates name a real cell.
pub fn validate_move(board: &Board, row: i64, col: i64) -> Result<Position, Vec<MoveViolation>> {
    let coordinates = Validation::all_vec(vec![check_row(row), check_col(col)])
        .map(|_| Position::at(row as usize, col as usize));

    let pos = match coordinates {
        Validation::Success(pos) => pos,
        Validation::Failure(errors) => return Err(errors.iter().cloned().collect()),
    };

    if board.is_empty_at(pos) {
        Ok(pos)
    } else {
        Err(vec![MoveViolation::CellOccupied {
            row: pos.row(),
            col: pos.col(),
        }])
    }
}
