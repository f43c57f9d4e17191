//! Heuristic evaluation function for Connect Four positions
//!
//! This module provides the static evaluation used at the leaves of the
//! minimax search and by move ordering. It evaluates board positions based on:
//! - Pattern scoring over every four-cell window (threes, twos, blocked lines)
//! - Positional bonuses (centre control)

use crate::board::{Board, Disc, CENTER_COL, ROWS, WINDOWS};

use super::patterns::{PatternScore, PositionScore};

/// Score one four-cell window from the perspective of `piece`.
///
/// Offence and defence are scored independently and summed:
///
/// | own / empty | score |
/// |---|---|
/// | 4 / 0 | +1,000,000 (returned immediately) |
/// | 3 / 1 | +5,000 if both end cells are empty, else +150 |
/// | 2 / 2 | +50 if the two discs are adjacent, +60 if split |
/// | opp 3 / 1 | −10,000 if both end cells are empty, else −500 |
/// | opp 2 / 2 | −50 |
///
/// ```
/// use connect4::Disc::{Empty as E, Red as X};
/// use connect4::eval::evaluate_window;
///
/// assert_eq!(evaluate_window([E, X, X, X], X), 150);
/// assert_eq!(evaluate_window([X, E, X, E], X), 60);
/// assert_eq!(evaluate_window([X, X, E, E], X), 50);
/// ```
#[must_use]
pub fn evaluate_window(cells: [Disc; 4], piece: Disc) -> i32 {
    if piece == Disc::Empty {
        return 0;
    }

    let count_piece = cells.iter().filter(|&&c| c == piece).count();
    let count_empty = cells.iter().filter(|&&c| c == Disc::Empty).count();
    let count_opp = 4 - count_piece - count_empty;

    if count_piece == 4 {
        return PatternScore::FOUR;
    }

    // Both end cells empty needs two empty cells, so with exactly one empty
    // cell the open branches below never fire.
    let ends_open = cells[0] == Disc::Empty && cells[3] == Disc::Empty;
    let mut score = 0;

    // Offence
    if count_piece == 3 && count_empty == 1 {
        score += if ends_open {
            PatternScore::OPEN_THREE
        } else {
            PatternScore::THREE
        };
    } else if count_piece == 2 && count_empty == 2 {
        let connected = cells.windows(2).any(|w| w[0] == piece && w[1] == piece);
        score += if connected {
            PatternScore::CONNECTED_TWO
        } else {
            PatternScore::SPLIT_TWO
        };
    }

    // Defence
    if count_opp == 3 && count_empty == 1 {
        score -= if ends_open {
            PatternScore::OPP_OPEN_THREE
        } else {
            PatternScore::OPP_THREE
        };
    } else if count_opp == 2 && count_empty == 2 {
        score -= PatternScore::OPP_TWO;
    }

    score
}

/// Evaluate the board from the perspective of the given disc.
///
/// Sums [`evaluate_window`] over all 69 windows and adds the centre
/// bonuses. Positive values favour `piece`.
#[must_use]
pub fn evaluate_board(board: &Board, piece: Disc) -> i32 {
    let mut score = evaluate_positions(board, piece);
    for window in &WINDOWS {
        let cells = window.map(|idx| board.cell_at(idx));
        score += evaluate_window(cells, piece);
    }
    score
}

/// Centre control, per row: +200 for an own disc in the centre column,
/// +100 once if either neighbouring cell is own.
fn evaluate_positions(board: &Board, piece: Disc) -> i32 {
    let mut score = 0;
    for row in 0..ROWS {
        if board.cell(row, CENTER_COL) == piece {
            score += PositionScore::CENTER;
        }
        if board.cell(row, CENTER_COL - 1) == piece || board.cell(row, CENTER_COL + 1) == piece {
            score += PositionScore::NEAR_CENTER;
        }
    }
    score
}
