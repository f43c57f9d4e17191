//! Adaptive search depth
//!
//! The base depth comes from the difficulty setting. Sharp positions
//! (pending one-move wins) and the endgame get extra plies, the opening
//! gets one ply less.

use crate::board::{Board, Disc, COLS};

/// Fewer discs than this counts as the opening
const OPENING_PIECES: u32 = 8;
/// More discs than this counts as the endgame
const ENDGAME_PIECES: u32 = 30;
/// Shallowest depth the opening reduction may produce
const MIN_OPENING_DEPTH: u8 = 3;

/// Number of columns in which `disc` would complete a line right now.
pub fn count_threats(board: &Board, disc: Disc) -> u32 {
    (0..COLS)
        .filter(|&col| board.completes_line(col, disc))
        .count() as u32
}

/// Effective search depth for `board` given the difficulty's base depth.
///
/// Threat extensions take priority over the phase adjustment:
///
/// ```
/// use connect4::{Board, Disc};
/// use connect4::search::adaptive_depth;
///
/// let mut board = Board::new();
/// board.place(3, Disc::Red).unwrap();
/// // Opening: one ply less, but never below 3
/// assert_eq!(adaptive_depth(&board, 4), 3);
/// assert_eq!(adaptive_depth(&board, 2), 3);
/// ```
pub fn adaptive_depth(board: &Board, base: u8) -> u8 {
    let threats = count_threats(board, Disc::Blue) + count_threats(board, Disc::Red);
    if threats >= 2 {
        return base.saturating_add(2);
    }
    if threats == 1 {
        return base.saturating_add(1);
    }

    let pieces = board.piece_count();
    if pieces < OPENING_PIECES {
        MIN_OPENING_DEPTH.max(base.saturating_sub(1))
    } else if pieces > ENDGAME_PIECES {
        base.saturating_add(1)
    } else {
        base
    }
}
