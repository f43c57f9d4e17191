//! Game configuration chosen from the menu

use std::fmt;

/// How a game is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// First four-in-a-row wins
    #[default]
    Classic,
    /// Play until the board is full; the larger line tally wins
    ScoreAttack,
}

impl GameMode {
    pub const ALL: [GameMode; 2] = [GameMode::Classic, GameMode::ScoreAttack];

    #[inline]
    pub fn is_score_attack(self) -> bool {
        self == GameMode::ScoreAttack
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::Classic => "Classic",
            GameMode::ScoreAttack => "Score Attack",
        }
    }
}

/// Who plays Blue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Opponent {
    Human,
    #[default]
    Engine,
}

impl Opponent {
    pub fn label(self) -> &'static str {
        match self {
            Opponent::Human => "Human vs Human",
            Opponent::Engine => "Human vs AI",
        }
    }
}

/// Engine strength, expressed as the base search depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Base depth handed to the adaptive depth controller
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
            Difficulty::Expert => 7,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (depth {})", self.label(), self.depth())
    }
}

/// Settings for one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    pub mode: GameMode,
    pub opponent: Opponent,
    pub difficulty: Difficulty,
}

impl GameConfig {
    /// True when the engine plays Blue
    #[inline]
    pub fn engine_plays(&self) -> bool {
        self.opponent == Opponent::Engine
    }
}
