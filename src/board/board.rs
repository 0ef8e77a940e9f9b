//! Board grid structure

use super::{Pos, Stone, DEFAULT_BOARD_SIZE};
use std::fmt;

/// Square game board, side length fixed at construction.
///
/// Cells are stored row-major. `Clone` yields an independent snapshot:
/// mutating a clone never affects the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
}

impl Board {
    /// Create an empty board with the default 15x15 size
    pub fn new() -> Self {
        Self::with_size(DEFAULT_BOARD_SIZE)
    }

    /// Create an empty board with the given side length
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// True iff (row, col) lies on the board. Accepts arbitrary integers.
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.size as i32 && col >= 0 && col < self.size as i32
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.row as usize * self.size + pos.col as usize]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone. Does not validate occupancy; `GameState` does.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        self.cells[pos.row as usize * self.size + pos.col as usize] = stone;
    }

    /// Remove a stone (used by undo)
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.cells[pos.row as usize * self.size + pos.col as usize] = Stone::Empty;
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count()
    }

    /// Check if board is empty
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Text rendering with row/column indices, used by the console front-end
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.size {
            write!(f, "{:2}", col)?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{:2}", row)?;
            for col in 0..self.size {
                let sym = match self.get(Pos::new(row as u8, col as u8)) {
                    Stone::Empty => '\u{00b7}',
                    Stone::Black => '\u{25cf}',
                    Stone::White => '\u{25cb}',
                };
                write!(f, "{} ", sym)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
