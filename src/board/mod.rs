//! Board model: players, cells, positions and the 3×3 grid.

mod render;
mod win;

pub use render::print_board;
pub use win::{has_winner, winner, LINES};

use crate::enforcement::MoveViolation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the board.
pub const SIZE: usize = 3;

/// One of the two markers a participant plays as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// First marker, `X`.
    Crosses,
    /// Second marker, `O`.
    Circles,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Crosses => Player::Circles,
            Player::Circles => Player::Crosses,
        }
    }

    /// Parity index: 0 for crosses, 1 for circles.
    pub fn index(self) -> u32 {
        match self {
            Player::Crosses => 0,
            Player::Circles => 1,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Player::Crosses => 'X',
            Player::Circles => 'O',
        }
    }

    /// Player due to move on `turn` when `starting` moved on turn 0.
    ///
    /// `(turn + starting) mod 2` selects crosses on 0 and circles on 1.
    pub fn for_turn(turn: u32, starting: Player) -> Self {
        if (turn % 2 + starting.index()) % 2 == 0 {
            Player::Crosses
        } else {
            Player::Circles
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::Crosses => "crosses",
            Player::Circles => "circles",
        })
    }
}

/// A cell is either empty or owned by exactly one player.
pub type Cell = Option<Player>;

/// A validated board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    pub const CENTER: Position = Position { row: 1, col: 1 };

    /// Returns `None` unless both coordinates are in `0..3`.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < SIZE && col < SIZE).then_some(Position { row, col })
    }

    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// All nine positions, row-major.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Position { row, col }))
    }
}

/// Fixed 3×3 grid of cells.
///
/// Cells only ever go from empty to owned; nothing clears them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Assign `pos` to `player`, leaving every other cell untouched.
    ///
    /// Occupied cells are never overwritten: the board is left as it was and
    /// `CellOccupied` is returned.
    pub fn set_cell(&mut self, pos: Position, player: Player) -> Result<(), MoveViolation> {
        if !self.is_empty_at(pos) {
            return Err(MoveViolation::CellOccupied {
                row: pos.row,
                col: pos.col,
            });
        }
        self.cells[pos.row][pos.col] = Some(player);
        Ok(())
    }

    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied_count() == SIZE * SIZE
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print_board(self))
    }
}
