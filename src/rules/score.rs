//! Score Attack line tally
//!
//! In Score Attack the game runs until the board is full and each side
//! scores the lines it built:
//! - a horizontal or vertical run of `n >= 4` discs is worth `n - 3`
//! - every diagonal four-window fully owned is worth 1

use crate::board::{Board, Disc, COLS, ROWS};

/// Points for a finished run of `streak` discs
#[inline]
fn run_points(streak: u32) -> u32 {
    if streak >= 4 {
        streak - 3
    } else {
        0
    }
}

/// Total line points for `disc`.
///
/// ```
/// use connect4::{Board, Disc};
/// use connect4::rules::line_tally;
///
/// let mut board = Board::new();
/// for col in 0..5 {
///     board.place(col, Disc::Red).unwrap();
/// }
/// assert_eq!(line_tally(&board, Disc::Red), 2);
/// ```
pub fn line_tally(board: &Board, disc: Disc) -> u32 {
    if disc == Disc::Empty {
        return 0;
    }
    let mut score = 0;

    // Horizontal
    for row in 0..ROWS {
        let mut streak = 0;
        for col in 0..COLS {
            if board.cell(row, col) == disc {
                streak += 1;
            } else {
                score += run_points(streak);
                streak = 0;
            }
        }
        score += run_points(streak);
    }

    // Vertical
    for col in 0..COLS {
        let mut streak = 0;
        for row in 0..ROWS {
            if board.cell(row, col) == disc {
                streak += 1;
            } else {
                score += run_points(streak);
                streak = 0;
            }
        }
        score += run_points(streak);
    }

    // Diagonal (down-right)
    for row in 0..ROWS - 3 {
        for col in 0..COLS - 3 {
            if (0..4).all(|i| board.cell(row + i, col + i) == disc) {
                score += 1;
            }
        }
    }

    // Diagonal (up-right)
    for row in 3..ROWS {
        for col in 0..COLS - 3 {
            if (0..4).all(|i| board.cell(row - i, col + i) == disc) {
                score += 1;
            }
        }
    }

    score
}
