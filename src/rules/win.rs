//! Win condition checking
//!
//! Classic mode ends as soon as one side owns four in a row.
//! Score Attack ignores completed lines until the board is full.

use crate::board::{Board, Disc, Pos, WINDOWS, WINDOW_MASKS};

/// Find the first four-in-a-row owned by `disc`, if any.
///
/// Used by the front-end to highlight the winning line.
pub fn find_winning_line(board: &Board, disc: Disc) -> Option<[Pos; 4]> {
    let owned = board.discs(disc)?;
    WINDOW_MASKS
        .iter()
        .position(|&mask| owned.contains_all(mask))
        .map(|i| WINDOWS[i].map(Pos::from_index))
}

/// Winner of a classic game, if either side has completed a line
pub fn check_winner(board: &Board) -> Option<Disc> {
    [Disc::Red, Disc::Blue]
        .into_iter()
        .find(|&disc| board.is_line_complete(disc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_winning_line_vertical() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.place(2, Disc::Red).unwrap();
        }
        let line = find_winning_line(&board, Disc::Red).unwrap();
        assert!(line.iter().all(|p| p.col == 2));
        assert!(find_winning_line(&board, Disc::Blue).is_none());
    }

    #[test]
    fn test_check_winner() {
        let mut board = Board::new();
        assert_eq!(check_winner(&board), None);
        for col in 3..7 {
            board.place(col, Disc::Blue).unwrap();
        }
        assert_eq!(check_winner(&board), Some(Disc::Blue));
    }

    #[test]
    fn test_empty_disc_has_no_line() {
        assert!(find_winning_line(&Board::new(), Disc::Empty).is_none());
    }
}
