//! Minimax search with alpha-beta pruning and a transposition cache
//!
//! The search is a plain minimax from the maximizer's point of view: leaves
//! are evaluated with [`evaluate_board`] for the maximizer, maximizing nodes
//! raise alpha and minimizing nodes lower beta.
//!
//! # Features
//!
//! - Transposition cache probed at node entry, before terminal checks
//! - Move ordering by one-ply lookahead (see [`order_moves`])
//! - Exhaustive endgame: with few empty cells the remaining depth is
//!   stretched to the number of empty cells (Classic only)
//! - Root cutoff as soon as a forced win is found (root node only)
//!
//! # Example
//!
//! ```
//! use connect4::{Board, Disc, GameMode};
//! use connect4::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! let mut board = Board::new();
//! for col in 1..4 {
//!     board.place(col, Disc::Blue).unwrap();
//! }
//!
//! let result = searcher.search(&board, Disc::Blue, 3, GameMode::Classic);
//! assert!(matches!(result.column, Some(0) | Some(4)));
//! ```

use tracing::{debug, trace};

use crate::board::{Board, Disc};
use crate::config::GameMode;
use crate::eval::{evaluate_board, PatternScore, WIN_THRESHOLD};

use super::ordering::order_moves;
use super::tt::{CacheKey, TranspositionCache, DEFAULT_CAPACITY};

/// Base value of a decided game; the remaining depth is added on top
const WIN_SCORE: i32 = PatternScore::FOUR;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
    /// Cutoffs on the first move tried (measures move ordering quality)
    pub first_move_cutoffs: u64,
    /// Nodes answered by the cache
    pub cache_hits: u64,
    /// Set when the root stopped early on a forced win
    pub root_cutoff: bool,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.cutoffs as f64 * 100.0
        }
    }
}

/// Search result containing the best column found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best column, `None` only when nothing could be played
    pub column: Option<usize>,
    /// Minimax value for the maximizer
    pub score: i32,
    /// Requested root depth
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
    pub stats: SearchStats,
}

/// Value of one node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub column: Option<usize>,
    pub score: i32,
}

impl SearchNode {
    #[inline]
    fn leaf(score: i32) -> Self {
        Self {
            column: None,
            score,
        }
    }
}

/// Fixed parameters of one search call
#[derive(Debug, Clone, Copy)]
struct SearchContext {
    maximizer: Disc,
    root_depth: u8,
    /// Discs on the board at the root; identifies the root node
    root_pieces: u32,
    score_attack: bool,
}

impl SearchContext {
    /// The endgame clamp rewrites `depth`, so the root is found by disc count
    #[inline]
    fn is_root(&self, board: &Board) -> bool {
        board.piece_count() == self.root_pieces
    }

    #[inline]
    fn mover(&self, maximizing: bool) -> Disc {
        if maximizing {
            self.maximizer
        } else {
            self.maximizer.opponent()
        }
    }
}

/// Alpha-beta searcher.
///
/// Owns the transposition cache, which lives as long as the searcher and
/// is shared by every search it runs.
#[derive(Debug)]
pub struct Searcher {
    cache: TranspositionCache,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    /// Searcher with the default cache ceiling
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Searcher whose cache holds at most `capacity` entries
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: TranspositionCache::new(capacity),
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    pub fn cache(&self) -> &TranspositionCache {
        &self.cache
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Search `board` to `depth` plies for `maximizer`.
    ///
    /// The caller's board is not touched; the search works on a copy.
    pub fn search(
        &mut self,
        board: &Board,
        maximizer: Disc,
        depth: u8,
        mode: GameMode,
    ) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();

        let ctx = SearchContext {
            maximizer,
            root_depth: depth,
            root_pieces: board.piece_count(),
            score_attack: mode.is_score_attack(),
        };
        let mut work_board = *board;
        let node = self.minimax(&mut work_board, &ctx, depth, i32::MIN, i32::MAX, true);
        debug_assert_eq!(work_board, *board, "search must restore the board");

        debug!(
            column = ?node.column,
            score = node.score,
            depth,
            nodes = self.nodes,
            cutoffs = self.stats.cutoffs,
            first_move_rate = self.stats.first_move_rate(),
            cache_entries = self.cache.len(),
            "alpha-beta finished"
        );

        SearchResult {
            column: node.column,
            score: node.score,
            depth,
            nodes: self.nodes,
            stats: self.stats,
        }
    }

    /// Minimax value of `board` with `depth` plies left.
    ///
    /// The board is mutated while children are searched and restored before
    /// every return.
    fn minimax(
        &mut self,
        board: &mut Board,
        ctx: &SearchContext,
        mut depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchNode {
        self.nodes += 1;

        let key = CacheKey::pack(board, depth, maximizing, ctx.maximizer, ctx.score_attack);
        if let Some((column, score)) = self.cache.probe(key) {
            self.stats.cache_hits += 1;
            return SearchNode {
                column: Some(column),
                score,
            };
        }

        if !ctx.score_attack {
            // Faster wins and slower losses score higher
            if board.is_line_complete(ctx.maximizer) {
                return SearchNode::leaf(WIN_SCORE + i32::from(depth));
            }
            if board.is_line_complete(ctx.maximizer.opponent()) {
                return SearchNode::leaf(-WIN_SCORE - i32::from(depth));
            }

            // Endgame: search to the end of the board
            let empty = board.empty_count();
            if empty <= 2 * u32::from(ctx.root_depth) {
                depth = empty as u8;
            }
        }

        // A full board is a draw whatever depth remains
        if board.is_full() {
            return SearchNode::leaf(0);
        }
        if depth == 0 {
            return SearchNode::leaf(evaluate_board(board, ctx.maximizer));
        }

        let mover = ctx.mover(maximizing);
        let moves = order_moves(board, mover);
        let Some(&first) = moves.first() else {
            return SearchNode::leaf(0);
        };

        let mut best_column = first;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        for (i, &col) in moves.iter().enumerate() {
            let Ok(row) = board.place(col, mover) else {
                continue;
            };
            let score = self
                .minimax(board, ctx, depth - 1, alpha, beta, !maximizing)
                .score;
            board.undo(row, col);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_column = col;
                    if score > WIN_THRESHOLD && ctx.is_root(board) {
                        trace!(column = col, score, "forced win at root");
                        self.stats.root_cutoff = true;
                        self.cache.store(key, best_column, best_score);
                        return SearchNode {
                            column: Some(best_column),
                            score: best_score,
                        };
                    }
                }
                alpha = alpha.max(best_score);
                if alpha >= beta {
                    self.record_cutoff(i);
                    break;
                }
            } else {
                if score < best_score {
                    best_score = score;
                    best_column = col;
                }
                beta = beta.min(best_score);
                if beta <= alpha {
                    self.record_cutoff(i);
                    break;
                }
            }
        }

        self.cache.store(key, best_column, best_score);
        SearchNode {
            column: Some(best_column),
            score: best_score,
        }
    }

    #[inline]
    fn record_cutoff(&mut self, move_index: usize) {
        self.stats.cutoffs += 1;
        if move_index == 0 {
            self.stats.first_move_cutoffs += 1;
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
