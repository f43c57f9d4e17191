//! Main AI Engine integrating all search components
//!
//! This module provides the engine the front-end talks to. A move is chosen
//! in this order:
//!
//! 1. **Immediate win**: a column that completes a line for the side to move
//! 2. **Block**: a column where the opponent would complete a line
//! 3. **Alpha-Beta**: adaptive depth, then minimax with the transposition cache
//! 4. **Fallback**: first column with an open row
//!
//! Steps 1 and 2 are Classic only. Score Attack always searches, since a
//! completed line neither ends the game nor has to be answered at once.
//!
//! # Example
//!
//! ```
//! use connect4::{AIEngine, Board, Disc, GameMode};
//!
//! let mut engine = AIEngine::with_config(100_000);
//! let mut board = Board::new();
//! board.place(3, Disc::Red).unwrap();
//!
//! let result = engine.get_move_with_stats(&board, Disc::Blue, 4, GameMode::Classic);
//! println!("Best column: {:?}", result.column);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::board::{Board, Disc};
use crate::config::GameMode;
use crate::eval::PatternScore;
use crate::search::{adaptive_depth, CacheStats, SearchResult, Searcher, DEFAULT_CAPACITY};

/// Which stage of the engine produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Completes a line for the side to move
    ImmediateWin,
    /// Stops the opponent from completing a line
    Block,
    /// Regular alpha-beta search result
    AlphaBeta,
    /// Search produced nothing; first open column
    Fallback,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Chosen column, `None` only on a full board
    pub column: Option<usize>,
    /// Evaluation score for the side to move
    pub score: i32,
    pub search_type: SearchType,
    /// Depth actually searched (0 for short-circuit moves)
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn immediate_win(column: usize, time_ms: u64) -> Self {
        Self {
            column: Some(column),
            score: PatternScore::FOUR,
            search_type: SearchType::ImmediateWin,
            depth: 0,
            time_ms,
            nodes: 1,
        }
    }

    #[inline]
    fn block(column: usize, time_ms: u64) -> Self {
        Self {
            column: Some(column),
            score: 0,
            search_type: SearchType::Block,
            depth: 0,
            time_ms,
            nodes: 1,
        }
    }

    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        Self {
            column: result.column,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            depth: result.depth,
            time_ms,
            nodes: result.nodes,
        }
    }

    #[inline]
    fn fallback(column: Option<usize>, depth: u8, time_ms: u64, nodes: u64) -> Self {
        Self {
            column,
            score: 0,
            search_type: SearchType::Fallback,
            depth,
            time_ms,
            nodes,
        }
    }
}

/// Main AI Engine for Connect Four.
///
/// Owns a [`Searcher`] and with it the transposition cache, which lives
/// for the whole game session. Call [`clear_cache`](AIEngine::clear_cache)
/// when a new game starts.
///
/// # Example
///
/// ```
/// use connect4::{AIEngine, Board, Disc, GameMode};
///
/// let mut engine = AIEngine::new();
/// let board = Board::from_rows(&[
///     ".......",
///     ".......",
///     ".......",
///     ".......",
///     ".......",
///     ".OOO...",
/// ]).unwrap();
///
/// let column = engine.choose_move(&board, Disc::Blue, 4, GameMode::Classic);
/// assert!(matches!(column, Some(0) | Some(4)));
/// ```
#[derive(Debug)]
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    /// Engine with the default cache ceiling of 2,000,000 entries.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CAPACITY)
    }

    /// Engine whose transposition cache holds at most `cache_capacity` entries.
    #[must_use]
    pub fn with_config(cache_capacity: usize) -> Self {
        Self {
            searcher: Searcher::with_capacity(cache_capacity),
        }
    }

    /// Column to play for `side`, or `None` if the board is full.
    ///
    /// `depth` is the base depth of the difficulty level; the engine
    /// adapts it to the position before searching.
    #[must_use]
    pub fn choose_move(
        &mut self,
        board: &Board,
        side: Disc,
        depth: u8,
        mode: GameMode,
    ) -> Option<usize> {
        self.get_move_with_stats(board, side, depth, mode).column
    }

    /// Choose a move and report how it was found.
    #[must_use]
    pub fn get_move_with_stats(
        &mut self,
        board: &Board,
        side: Disc,
        depth: u8,
        mode: GameMode,
    ) -> MoveResult {
        let start = Instant::now();
        let elapsed = || start.elapsed().as_millis() as u64;

        // 1-2. One-ply short-circuit, column by column
        if !mode.is_score_attack() {
            for col in board.legal_columns() {
                if board.completes_line(col, side) {
                    trace!(column = col, "immediate win");
                    return MoveResult::immediate_win(col, elapsed());
                }
                if board.completes_line(col, side.opponent()) {
                    trace!(column = col, "blocking opponent line");
                    return MoveResult::block(col, elapsed());
                }
            }
        }

        // 3. Alpha-beta at the adapted depth
        let effective_depth = adaptive_depth(board, depth);
        debug!(
            base = depth,
            effective = effective_depth,
            pieces = board.piece_count(),
            "searching"
        );
        let result = self.searcher.search(board, side, effective_depth, mode);
        if result.column.is_some() {
            return MoveResult::from_alphabeta(result, elapsed());
        }

        // 4. First open column
        let column = board.legal_columns().next();
        if column.is_some() {
            warn!(?column, "search returned no column, using first open column");
        }
        MoveResult::fallback(column, effective_depth, elapsed(), result.nodes)
    }

    /// Forget every cached position.
    ///
    /// Call this when starting a new game.
    pub fn clear_cache(&mut self) {
        self.searcher.clear_cache();
    }

    /// Entries currently in the transposition cache
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.searcher.cache().len()
    }

    /// Transposition cache counters
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.searcher.cache().stats()
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bottom_row(row: &str) -> Board {
        Board::from_rows(&[".......", ".......", ".......", ".......", ".......", row])
            .unwrap()
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let board = bottom_row(".OOO...");
        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&board, Disc::Blue, 4, GameMode::Classic);

        // Column 0 is checked first
        assert_eq!(result.column, Some(0));
        assert_eq!(result.search_type, SearchType::ImmediateWin);
        assert_eq!(result.score, 1_000_000);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let board = bottom_row("XXX.O..");
        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&board, Disc::Blue, 4, GameMode::Classic);

        assert_eq!(result.column, Some(3));
        assert_eq!(result.search_type, SearchType::Block);
    }

    #[test]
    fn test_short_circuit_scans_columns_in_order() {
        let board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            "......O",
            "......O",
            "XXX...O",
        ])
        .unwrap();
        let mut engine = AIEngine::new();
        // The block in column 3 is found before the win in column 6
        let result = engine.get_move_with_stats(&board, Disc::Blue, 4, GameMode::Classic);
        assert_eq!(result.column, Some(3));
        assert_eq!(result.search_type, SearchType::Block);
    }

    #[test]
    fn test_score_attack_skips_immediate_win() {
        let board = bottom_row(".OOO...");
        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&board, Disc::Blue, 2, GameMode::ScoreAttack);
        assert_eq!(result.search_type, SearchType::AlphaBeta);
        assert!(result.column.is_some());
    }

    #[test]
    fn test_score_attack_searches_instead_of_blocking() {
        let board = bottom_row("XXX.O..");
        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&board, Disc::Blue, 2, GameMode::ScoreAttack);
        assert_eq!(result.search_type, SearchType::AlphaBeta);
        // Red's open column is still a threat for depth purposes
        assert_eq!(result.depth, 3);
        assert!(result.nodes > 1);
        assert_eq!(result.column, Some(3));
    }

    #[test]
    fn test_engine_empty_board() {
        let mut engine = AIEngine::with_config(100_000);
        let result = engine.get_move_with_stats(&Board::new(), Disc::Red, 4, GameMode::Classic);

        assert_eq!(result.search_type, SearchType::AlphaBeta);
        // Opening: one ply less than the base depth
        assert_eq!(result.depth, 3);
        assert_eq!(result.column, Some(3));
        assert!(result.nodes > 1);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_rows(&[
            "XOXOXOX",
            "XOXOXOX",
            "OXOXOXO",
            "OXOXOXO",
            "XOXOXOX",
            "XOXOXOX",
        ])
        .unwrap();
        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&board, Disc::Blue, 4, GameMode::Classic);
        assert_eq!(result.column, None);
        assert_eq!(result.search_type, SearchType::Fallback);
    }

    #[test]
    fn test_engine_multiple_searches() {
        let mut engine = AIEngine::with_config(100_000);
        let board = bottom_row("..XO...");

        let first = engine.get_move_with_stats(&board, Disc::Red, 4, GameMode::Classic);
        let second = engine.get_move_with_stats(&board, Disc::Red, 4, GameMode::Classic);

        assert_eq!(first.column, second.column);
        assert_eq!(first.score, second.score);
        assert!(second.nodes <= first.nodes);
    }

    #[test]
    fn test_engine_clear_cache() {
        let mut engine = AIEngine::with_config(100_000);
        let board = bottom_row("...X...");
        let _ = engine.choose_move(&board, Disc::Blue, 4, GameMode::Classic);
        assert!(engine.cache_len() > 0);
        assert!(engine.cache_stats().stores > 0);

        engine.clear_cache();
        assert_eq!(engine.cache_len(), 0);
    }

    #[test]
    fn test_engine_alternating_colors() {
        let mut engine = AIEngine::with_config(100_000);
        let mut board = Board::new();

        let mut side = Disc::Red;
        for _ in 0..4 {
            let col = engine
                .choose_move(&board, side, 2, GameMode::Classic)
                .unwrap();
            board.place(col, side).unwrap();
            side = side.opponent();
        }
        assert_eq!(board.piece_count(), 4);
    }
}
