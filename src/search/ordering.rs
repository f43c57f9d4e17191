//! Move ordering
//!
//! Good ordering lets alpha-beta cut more of the tree; it never changes
//! the value a search returns. Each legal column is tried speculatively
//! and ranked by what the resulting position looks like for the mover.

use crate::board::{Board, Disc, Pos, CENTER_COL, COLS, ROWS};
use crate::eval::{evaluate_board, PatternScore};

/// Bonus when the dropped disc lands on one of the mover's own discs
const STACK_BONUS: i32 = 40;

/// Centrality bonus: 30 for the centre column, 10 less per column away.
#[inline]
fn centrality(col: usize) -> i32 {
    30 - (col as i32 - CENTER_COL as i32).abs() * 10
}

/// Score a single candidate drop for `side`. The board is restored before returning.
fn score_column(board: &mut Board, col: usize, side: Disc) -> Option<i32> {
    let row = board.place(col, side).ok()?;

    let mut score = if board.has_line_through(Pos::new(row as u8, col as u8), side) {
        PatternScore::FOUR
    } else {
        evaluate_board(board, side)
    };
    board.undo(row, col);

    score += centrality(col);
    if row + 1 < ROWS && board.cell(row + 1, col) == side {
        score += STACK_BONUS;
    }
    Some(score)
}

/// Legal columns for `side`, best first.
///
/// Ties keep ascending column order.
///
/// ```
/// use connect4::{Board, Disc};
/// use connect4::search::order_moves;
///
/// let mut board = Board::new();
/// let order = order_moves(&mut board, Disc::Red);
/// assert_eq!(order[0], 3);
/// assert_eq!(order.len(), 7);
/// ```
pub fn order_moves(board: &mut Board, side: Disc) -> Vec<usize> {
    let mut scored: Vec<(usize, i32)> = (0..COLS)
        .filter_map(|col| score_column(board, col, side).map(|s| (col, s)))
        .collect();

    // Stable: equal scores stay in column order
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(col, _)| col).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centrality() {
        assert_eq!(centrality(3), 30);
        assert_eq!(centrality(2), 20);
        assert_eq!(centrality(4), 20);
        assert_eq!(centrality(0), 0);
        assert_eq!(centrality(6), 0);
    }

    #[test]
    fn test_empty_board_prefers_centre() {
        let mut board = Board::new();
        let order = order_moves(&mut board, Disc::Blue);
        // Centre 200+30, neighbours 100+20, outer columns by centrality
        assert_eq!(order, vec![3, 2, 4, 1, 5, 0, 6]);
    }

    #[test]
    fn test_winning_column_first() {
        let mut board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            "O......",
            "O......",
            "O...XX.",
        ])
        .unwrap();
        let order = order_moves(&mut board, Disc::Blue);
        assert_eq!(order[0], 0);
    }

    #[test]
    fn test_full_columns_skipped() {
        let mut board = Board::new();
        for i in 0..ROWS {
            let disc = if i % 2 == 0 { Disc::Red } else { Disc::Blue };
            board.place(3, disc).unwrap();
        }
        let order = order_moves(&mut board, Disc::Red);
        assert_eq!(order.len(), 6);
        assert!(!order.contains(&3));
    }

    #[test]
    fn test_board_restored() {
        let mut board = Board::new();
        board.place(2, Disc::Red).unwrap();
        board.place(4, Disc::Blue).unwrap();
        let before = board;
        let _ = order_moves(&mut board, Disc::Red);
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let mut board = Board::from_rows(&[
            "XOXOXOX",
            "XOXOXOX",
            "OXOXOXO",
            "OXOXOXO",
            "XOXOXOX",
            "XOXOXOX",
        ])
        .unwrap();
        assert!(order_moves(&mut board, Disc::Red).is_empty());
    }
}
