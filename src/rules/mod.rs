//! Game rules for Connect Four
//!
//! This module implements the end-of-game logic for both variants:
//! - Classic: first four-in-a-row wins
//! - Score Attack: play until the board is full, most line points wins

pub mod score;
pub mod win;

// Re-exports for convenient access
pub use score::line_tally;
pub use win::{check_winner, find_winning_line};
