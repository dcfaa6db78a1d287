//! Win detection over the eight fixed lines.

use super::{Board, Player, Position};

const fn line(a: (usize, usize), b: (usize, usize), c: (usize, usize)) -> [Position; 3] {
    [
        Position::at(a.0, a.1),
        Position::at(b.0, b.1),
        Position::at(c.0, c.1),
    ]
}

/// Every line that can win: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    line((0, 0), (0, 1), (0, 2)),
    line((1, 0), (1, 1), (1, 2)),
    line((2, 0), (2, 1), (2, 2)),
    // Columns
    line((0, 0), (1, 0), (2, 0)),
    line((0, 1), (1, 1), (2, 1)),
    line((0, 2), (1, 2), (2, 2)),
    // Diagonals
    line((0, 0), (1, 1), (2, 2)),
    line((0, 2), (1, 1), (2, 0)),
];

/// True iff some line has all three cells owned by `player`.
///
/// Pure predicate over whatever board it is handed; it does not check that
/// the board is reachable through legal play.
pub fn has_winner(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|cells| cells.iter().all(|&pos| board.get(pos) == Some(player)))
}

/// First player (crosses before circles) holding a complete line.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::Crosses, Player::Circles]
        .into_iter()
        .find(|&p| has_winner(board, p))
}
