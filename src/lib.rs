//! Connect Four engine with Classic and Score Attack modes
//!
//! A minimax engine for Connect Four on the standard 6x7 board:
//! - Discs drop to the lowest empty cell of a column
//! - Classic: the first four-in-a-row wins
//! - Score Attack: play until the board is full, longer lines score more
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards and precomputed windows
//! - [`rules`]: Winning-line detection and the Score Attack tally
//! - [`eval`]: Window patterns and the heuristic evaluation
//! - [`search`]: Move ordering, adaptive depth, transposition cache, alpha-beta
//! - [`engine`]: Main AI engine integrating all components
//! - [`ui`]: egui front-end
//!
//! # Quick Start
//!
//! ```
//! use connect4::{AIEngine, Board, Disc, Difficulty, GameMode};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_config(100_000);
//!
//! // Red opens in the centre
//! board.place(3, Disc::Red).unwrap();
//!
//! // The engine answers as Blue
//! let depth = Difficulty::Medium.depth();
//! if let Some(col) = engine.choose_move(&board, Disc::Blue, depth, GameMode::Classic) {
//!     board.place(col, Disc::Blue).unwrap();
//!     println!("AI plays column {}", col + 1);
//! }
//! ```
//!
//! # Move Selection
//!
//! The AI engine follows this priority:
//! 1. Immediate winning column (Classic only)
//! 2. Block a column where the opponent would complete a line (Classic only)
//! 3. Alpha-Beta search at an adaptive depth with a transposition cache
//! 4. First open column if the search returns nothing

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Disc, Pos, COLS, ROWS};
pub use config::{Difficulty, GameConfig, GameMode, Opponent};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::MoveError;
