//! Precomputed four-cell windows
//!
//! Every horizontal, vertical and diagonal run of four cells on the board,
//! stored as cell indices (for the evaluator, which needs cell order) and as
//! bit masks (for line detection).
//!
//! Cell order inside a window follows the scan direction:
//! left to right, top to bottom, down-right and down-left.

use super::{COLS, ROWS};

/// 24 horizontal + 21 vertical + 12 + 12 diagonal
pub const WINDOW_COUNT: usize = 69;

/// Cell indices of every window
pub const WINDOWS: [[usize; 4]; WINDOW_COUNT] = build_windows();

/// Bit mask of every window, same order as [`WINDOWS`]
pub const WINDOW_MASKS: [u64; WINDOW_COUNT] = build_masks();

const fn idx(row: usize, col: usize) -> usize {
    row * COLS + col
}

const fn build_windows() -> [[usize; 4]; WINDOW_COUNT] {
    let mut out = [[0usize; 4]; WINDOW_COUNT];
    let mut n = 0;

    // Horizontal
    let mut r = 0;
    while r < ROWS {
        let mut c = 0;
        while c + 3 < COLS {
            out[n] = [idx(r, c), idx(r, c + 1), idx(r, c + 2), idx(r, c + 3)];
            n += 1;
            c += 1;
        }
        r += 1;
    }

    // Vertical
    let mut c = 0;
    while c < COLS {
        let mut r = 0;
        while r + 3 < ROWS {
            out[n] = [idx(r, c), idx(r + 1, c), idx(r + 2, c), idx(r + 3, c)];
            n += 1;
            r += 1;
        }
        c += 1;
    }

    // Diagonal down-right
    let mut r = 0;
    while r + 3 < ROWS {
        let mut c = 0;
        while c + 3 < COLS {
            out[n] = [
                idx(r, c),
                idx(r + 1, c + 1),
                idx(r + 2, c + 2),
                idx(r + 3, c + 3),
            ];
            n += 1;
            c += 1;
        }
        r += 1;
    }

    // Diagonal down-left
    let mut r = 0;
    while r + 3 < ROWS {
        let mut c = 3;
        while c < COLS {
            out[n] = [
                idx(r, c),
                idx(r + 1, c - 1),
                idx(r + 2, c - 2),
                idx(r + 3, c - 3),
            ];
            n += 1;
            c += 1;
        }
        r += 1;
    }

    assert!(n == WINDOW_COUNT);
    out
}

const fn build_masks() -> [u64; WINDOW_COUNT] {
    let windows = build_windows();
    let mut masks = [0u64; WINDOW_COUNT];
    let mut i = 0;
    while i < WINDOW_COUNT {
        let mut j = 0;
        while j < 4 {
            masks[i] |= 1u64 << windows[i][j];
            j += 1;
        }
        i += 1;
    }
    masks
}
