//! Position evaluation for Connect Four
//!
//! Contains:
//! - Pattern and positional score constants
//! - Window and whole-board heuristic evaluation

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate_board, evaluate_window};
pub use patterns::{PatternScore, PositionScore, WIN_THRESHOLD};
