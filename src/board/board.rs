//! Board structure with gravity-constrained placement

use std::fmt;

use super::bitboard::Bitboard;
use super::{Disc, Pos, COLS, ROWS, TOTAL_CELLS, WINDOW_MASKS};
use crate::error::MoveError;

/// Game board.
///
/// Discs fall to the lowest empty row of a column, so an empty cell never
/// has an occupied cell below it. The search mutates the board in place
/// with [`place`](Board::place) and restores it with [`undo`](Board::undo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Red discs bitboard
    pub red: Bitboard,
    /// Blue discs bitboard
    pub blue: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            red: Bitboard::new(),
            blue: Bitboard::new(),
        }
    }

    /// Build a board from a top-to-bottom picture.
    ///
    /// Each of the 6 lines holds 7 cells: `.` or space for empty,
    /// `X`/`R` for Red, `O`/`B` for Blue.
    ///
    /// ```
    /// use connect4::{Board, Disc};
    ///
    /// let board = Board::from_rows(&[
    ///     ".......",
    ///     ".......",
    ///     ".......",
    ///     ".......",
    ///     "...O...",
    ///     "..XXX..",
    /// ]).unwrap();
    /// assert_eq!(board.cell(4, 3), Disc::Blue);
    /// assert_eq!(board.piece_count(), 4);
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, MoveError> {
        if rows.len() != ROWS {
            return Err(MoveError::Layout(format!(
                "expected {ROWS} rows, found {}",
                rows.len()
            )));
        }

        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().collect();
            if cells.len() != COLS {
                return Err(MoveError::Layout(format!(
                    "row {row} has {} cells, expected {COLS}",
                    cells.len()
                )));
            }
            for (col, ch) in cells.into_iter().enumerate() {
                let pos = Pos::new(row as u8, col as u8);
                match ch {
                    '.' | ' ' => {}
                    'X' | 'x' | 'R' | 'r' => board.red.set(pos),
                    'O' | 'o' | 'B' | 'b' => board.blue.set(pos),
                    other => {
                        return Err(MoveError::Layout(format!(
                            "unexpected '{other}' at row {row}, column {col}"
                        )))
                    }
                }
            }
        }

        // Gravity: an occupied cell must sit on the bottom row or on another disc
        for row in 0..ROWS - 1 {
            for col in 0..COLS {
                if board.cell(row, col) != Disc::Empty && board.cell(row + 1, col) == Disc::Empty {
                    return Err(MoveError::Floating { row, column: col });
                }
            }
        }

        Ok(board)
    }

    /// Get disc at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Disc {
        if self.red.get(pos) {
            Disc::Red
        } else if self.blue.get(pos) {
            Disc::Blue
        } else {
            Disc::Empty
        }
    }

    /// Get disc at (row, col)
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Disc {
        self.get(Pos::new(row as u8, col as u8))
    }

    /// Get disc at a raw cell index (`row * COLS + col`)
    #[inline]
    pub fn cell_at(&self, idx: usize) -> Disc {
        self.get(Pos::from_index(idx))
    }

    /// Lowest empty row in a column, or `None` if the column is full
    /// (or out of range).
    #[inline]
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cell(row, col) == Disc::Empty)
    }

    #[inline]
    pub fn is_column_full(&self, col: usize) -> bool {
        self.next_open_row(col).is_none()
    }

    /// Columns that still have an open row, left to right
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(move |&col| !self.is_column_full(col))
    }

    /// Drop a disc into a column, returns the row where it landed
    pub fn place(&mut self, col: usize, disc: Disc) -> Result<usize, MoveError> {
        debug_assert!(disc != Disc::Empty, "cannot place an empty disc");
        if col >= COLS {
            return Err(MoveError::InvalidColumn { column: col });
        }
        let row = self
            .next_open_row(col)
            .ok_or(MoveError::ColumnFull { column: col })?;

        let pos = Pos::new(row as u8, col as u8);
        match disc {
            Disc::Red => self.red.set(pos),
            Disc::Blue => self.blue.set(pos),
            Disc::Empty => {}
        }
        Ok(row)
    }

    /// Clear a cell. Callers pass back exactly the row and column returned
    /// by the matching [`place`](Board::place).
    #[inline]
    pub fn undo(&mut self, row: usize, col: usize) {
        let pos = Pos::new(row as u8, col as u8);
        debug_assert!(self.get(pos) != Disc::Empty, "undo of an empty cell");
        debug_assert!(
            row == 0 || self.cell(row - 1, col) == Disc::Empty,
            "undo below the top disc of column {col}"
        );
        self.red.clear(pos);
        self.blue.clear(pos);
    }

    /// Check whether `disc` owns four in a row in any direction
    pub fn is_line_complete(&self, disc: Disc) -> bool {
        let Some(owned) = self.discs(disc) else {
            return false;
        };
        WINDOW_MASKS.iter().any(|&mask| owned.contains_all(mask))
    }

    /// Check whether `disc` owns a complete line through the cell at `pos`
    pub fn has_line_through(&self, pos: Pos, disc: Disc) -> bool {
        let Some(owned) = self.discs(disc) else {
            return false;
        };
        let bit = 1u64 << pos.to_index();
        WINDOW_MASKS
            .iter()
            .any(|&mask| mask & bit != 0 && owned.contains_all(mask))
    }

    /// Would dropping `disc` into `col` create a new line for it?
    ///
    /// Lines already on the board do not count, which matters in Score
    /// Attack where finished lines stay in play.
    pub fn completes_line(&self, col: usize, disc: Disc) -> bool {
        let mut after = *self;
        match after.place(col, disc) {
            Ok(row) => after.has_line_through(Pos::new(row as u8, col as u8), disc),
            Err(_) => false,
        }
    }

    /// A cell can be filled by the next disc dropped into its column:
    /// it is on the bottom row or the cell below it is occupied.
    ///
    /// Window scoring does not consult this: an open cell in a window counts
    /// as empty whether or not it is playable yet.
    pub fn is_playable(&self, row: usize, col: usize) -> bool {
        if row >= ROWS || col >= COLS {
            return false;
        }
        if row == ROWS - 1 {
            return true;
        }
        self.cell(row + 1, col) != Disc::Empty
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn discs(&self, disc: Disc) -> Option<&Bitboard> {
        match disc {
            Disc::Red => Some(&self.red),
            Disc::Blue => Some(&self.blue),
            Disc::Empty => None,
        }
    }

    /// Total discs on board
    #[inline]
    pub fn piece_count(&self) -> u32 {
        self.red.count() + self.blue.count()
    }

    #[inline]
    pub fn empty_count(&self) -> u32 {
        TOTAL_CELLS as u32 - self.piece_count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.piece_count() as usize == TOTAL_CELLS
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.red.is_empty() && self.blue.is_empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            let line: String = (0..COLS).map(|col| self.cell(row, col).symbol()).collect();
            writeln!(f, "{line}")?;
        }
        write!(f, "1234567")
    }
}
