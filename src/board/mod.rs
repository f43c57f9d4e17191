//! Board representation for Connect Four

pub mod bitboard;
pub mod board;
pub mod windows;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;
pub use windows::{WINDOWS, WINDOW_COUNT, WINDOW_MASKS};

/// Number of rows (row 0 is the top, row 5 the bottom)
pub const ROWS: usize = 6;
/// Number of columns
pub const COLS: usize = 7;
pub const TOTAL_CELLS: usize = ROWS * COLS; // 42
/// Middle column index
pub const CENTER_COL: usize = COLS / 2;

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disc {
    Empty,
    /// First player
    Red,
    /// Second player (the engine in Human vs AI games)
    Blue,
}

impl Disc {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Disc {
        match self {
            Disc::Red => Disc::Blue,
            Disc::Blue => Disc::Red,
            Disc::Empty => Disc::Empty,
        }
    }

    /// Single-character symbol used in text boards
    pub fn symbol(self) -> char {
        match self {
            Disc::Red => 'X',
            Disc::Blue => 'O',
            Disc::Empty => '.',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Disc::Red => "Red",
            Disc::Blue => "Blue",
            Disc::Empty => "Empty",
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < ROWS && (col as usize) < COLS);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * COLS + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / COLS) as u8,
            col: (idx % COLS) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < ROWS as i32 && col >= 0 && col < COLS as i32
    }
}
