//! Text rendering of a board.

use super::{Board, Cell};

fn glyph(cell: Cell) -> String {
    match cell {
        Some(player) => format!(" {} ", player.glyph()),
        None => "---".to_string(),
    }
}

/// Render the board as three `|`-separated rows joined by newlines.
///
/// ```rust
/// use tictactoe_engine::board::{print_board, Board};
///
/// assert_eq!(
///     print_board(&Board::new()),
///     "---|---|---\n---|---|---\n---|---|---"
/// );
/// ```
pub fn print_board(board: &Board) -> String {
    board
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|&cell| glyph(cell))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
