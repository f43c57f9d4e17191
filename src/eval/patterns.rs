//! Pattern scores for Connect Four evaluation
//!
//! These constants define the scoring weights for the four-cell window
//! patterns and the positional bonuses.

/// Pattern scores for window evaluation
pub struct PatternScore;

impl PatternScore {
    // Offence
    /// Four of four: a completed line
    pub const FOUR: i32 = 1_000_000;
    /// Three with both end cells empty
    pub const OPEN_THREE: i32 = 5_000;
    /// Three plus one empty cell
    pub const THREE: i32 = 150;
    /// Two adjacent discs plus two empty cells
    pub const CONNECTED_TWO: i32 = 50;
    /// Two discs with a gap between them (`X_X_`, `X__X`).
    /// Scores above a connected two: the gap is harder to block.
    pub const SPLIT_TWO: i32 = 60;

    // Defence (subtracted)
    pub const OPP_OPEN_THREE: i32 = 10_000;
    pub const OPP_THREE: i32 = 500;
    pub const OPP_TWO: i32 = 50;
}

/// Positional bonuses
pub struct PositionScore;

impl PositionScore {
    /// Per own disc in the centre column
    pub const CENTER: i32 = 200;
    /// Per own disc in a column next to the centre
    pub const NEAR_CENTER: i32 = 100;
}

/// Score above which a search value means a forced win
pub const WIN_THRESHOLD: i32 = 900_000;
