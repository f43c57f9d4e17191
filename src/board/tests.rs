use super::*;
use crate::error::MoveError;
use proptest::prelude::*;

/// Every occupied cell sits on the bottom row or on another disc.
fn gravity_holds(board: &Board) -> bool {
    (0..COLS).all(|col| {
        (0..ROWS - 1).all(|row| {
            board.cell(row, col) == Disc::Empty || board.cell(row + 1, col) != Disc::Empty
        })
    })
}

#[test]
fn test_disc_opponent() {
    assert_eq!(Disc::Red.opponent(), Disc::Blue);
    assert_eq!(Disc::Blue.opponent(), Disc::Red);
    assert_eq!(Disc::Empty.opponent(), Disc::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(5, 3);
    assert_eq!(pos.to_index(), 38);
    assert_eq!(Pos::from_index(38), pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(5, 6));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(6, 0));
    assert!(!Pos::is_valid(0, 7));
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(board.is_board_empty());
    assert_eq!(board.empty_count(), 42);
    assert_eq!(board.legal_columns().count(), COLS);
}

#[test]
fn test_place_stacks_from_bottom() {
    let mut board = Board::new();
    assert_eq!(board.place(3, Disc::Red), Ok(5));
    assert_eq!(board.place(3, Disc::Blue), Ok(4));
    assert_eq!(board.cell(5, 3), Disc::Red);
    assert_eq!(board.cell(4, 3), Disc::Blue);
    assert_eq!(board.next_open_row(3), Some(3));
}

#[test]
fn test_place_in_full_column() {
    let mut board = Board::new();
    for _ in 0..ROWS {
        board.place(0, Disc::Red).unwrap();
    }
    assert!(board.is_column_full(0));
    assert_eq!(board.next_open_row(0), None);
    assert_eq!(
        board.place(0, Disc::Blue),
        Err(MoveError::ColumnFull { column: 0 })
    );
    assert_eq!(board.legal_columns().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_place_out_of_range() {
    let mut board = Board::new();
    assert_eq!(
        board.place(7, Disc::Red),
        Err(MoveError::InvalidColumn { column: 7 })
    );
}

#[test]
fn test_undo_restores_board() {
    let mut board = Board::new();
    board.place(2, Disc::Red).unwrap();
    let before = board;
    let row = board.place(2, Disc::Blue).unwrap();
    board.undo(row, 2);
    assert_eq!(board, before);
}

#[test]
fn test_horizontal_line() {
    let mut board = Board::new();
    for col in 1..5 {
        board.place(col, Disc::Red).unwrap();
    }
    assert!(board.is_line_complete(Disc::Red));
    assert!(!board.is_line_complete(Disc::Blue));
}

#[test]
fn test_horizontal_line_on_upper_row() {
    let board = Board::from_rows(&[
        ".......",
        ".......",
        ".......",
        "...OOOO",
        "...XXXO",
        "..XOXXX",
    ])
    .unwrap();
    assert!(board.is_line_complete(Disc::Blue));
    assert!(!board.is_line_complete(Disc::Red));
}

#[test]
fn test_vertical_line() {
    let mut board = Board::new();
    for _ in 0..4 {
        board.place(6, Disc::Blue).unwrap();
    }
    assert!(board.is_line_complete(Disc::Blue));
}

#[test]
fn test_diagonal_lines() {
    let rising = Board::from_rows(&[
        ".......",
        ".......",
        "...X...",
        "..XO...",
        ".XOO...",
        "XOOX...",
    ])
    .unwrap();
    assert!(rising.is_line_complete(Disc::Red));

    let falling = Board::from_rows(&[
        ".......",
        ".......",
        "...O...",
        "...XO..",
        "...XXO.",
        "...XXXO",
    ])
    .unwrap();
    assert!(falling.is_line_complete(Disc::Blue));
    assert!(!falling.is_line_complete(Disc::Red));
}

#[test]
fn test_three_is_not_a_line() {
    let mut board = Board::new();
    for col in 0..3 {
        board.place(col, Disc::Red).unwrap();
    }
    assert!(!board.is_line_complete(Disc::Red));
}

#[test]
fn test_completes_line_ignores_existing_lines() {
    let board = Board::from_rows(&[
        ".......",
        ".......",
        ".......",
        ".......",
        "XXX....",
        "XXXXOO.",
    ])
    .unwrap();
    assert!(board.is_line_complete(Disc::Red));
    assert!(board.completes_line(3, Disc::Red));
    assert!(!board.completes_line(6, Disc::Red));
    assert!(!board.completes_line(6, Disc::Blue));
    assert!(board.has_line_through(Pos::new(5, 0), Disc::Red));
    assert!(!board.has_line_through(Pos::new(4, 0), Disc::Red));
}

#[test]
fn test_is_playable() {
    let mut board = Board::new();
    assert!(board.is_playable(5, 0));
    assert!(!board.is_playable(4, 0));
    board.place(0, Disc::Red).unwrap();
    assert!(board.is_playable(4, 0));
    assert!(!board.is_playable(3, 0));
    assert!(!board.is_playable(6, 0));
}

#[test]
fn test_from_rows_rejects_floating_disc() {
    let result = Board::from_rows(&[
        ".......",
        ".......",
        ".......",
        ".......",
        "..X....",
        ".......",
    ]);
    assert_eq!(result, Err(MoveError::Floating { row: 4, column: 2 }));
}

#[test]
fn test_from_rows_rejects_bad_shape() {
    assert!(matches!(
        Board::from_rows(&["......."]),
        Err(MoveError::Layout(_))
    ));
}

#[test]
fn test_display() {
    let mut board = Board::new();
    board.place(0, Disc::Red).unwrap();
    board.place(6, Disc::Blue).unwrap();
    let text = board.to_string();
    assert!(text.starts_with(".......\n"));
    assert!(text.contains("X.....O\n"));
}

proptest! {
    /// Property: any sequence of drops keeps every disc supported
    #[test]
    fn prop_gravity_after_drops(columns in prop::collection::vec(0usize..COLS, 0..60)) {
        let mut board = Board::new();
        let mut disc = Disc::Red;
        for col in columns {
            if board.place(col, disc).is_ok() {
                disc = disc.opponent();
            }
            prop_assert!(gravity_holds(&board));
        }
    }

    /// Property: drops followed by undos in reverse order restore the board
    #[test]
    fn prop_place_undo_round_trip(
        prefix in prop::collection::vec(0usize..COLS, 0..20),
        probe in prop::collection::vec(0usize..COLS, 1..20),
    ) {
        let mut board = Board::new();
        let mut disc = Disc::Red;
        for col in prefix {
            if board.place(col, disc).is_ok() {
                disc = disc.opponent();
            }
        }
        let snapshot = board;

        let mut history = Vec::new();
        for col in probe {
            if let Ok(row) = board.place(col, disc) {
                history.push((row, col));
                disc = disc.opponent();
                prop_assert!(gravity_holds(&board));
            }
        }
        while let Some((row, col)) = history.pop() {
            board.undo(row, col);
            prop_assert!(gravity_holds(&board));
        }
        prop_assert_eq!(board, snapshot);
    }
}
