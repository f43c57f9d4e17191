//! Search module for the Connect Four engine
//!
//! Contains:
//! - Move ordering by one-ply lookahead
//! - Adaptive depth from game-phase signals
//! - Transposition cache with full-clear eviction
//! - Minimax with alpha-beta pruning

pub mod alphabeta;
pub mod depth;
pub mod ordering;
pub mod tt;

pub use alphabeta::{SearchNode, SearchResult, SearchStats, Searcher};
pub use depth::{adaptive_depth, count_threats};
pub use ordering::order_moves;
pub use tt::{CacheEntry, CacheKey, CacheStats, TranspositionCache, DEFAULT_CAPACITY};
