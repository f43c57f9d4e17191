//! Game state management for the Connect Four GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::rules::{find_winning_line, line_tally};
use crate::search::CacheStats;
use crate::{
    AIEngine, Board, Difficulty, Disc, GameConfig, GameMode, MoveError, MoveResult, Opponent, Pos,
};

/// Reasons a human move is refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("the game is over")]
    GameOver,
    #[error("the AI is thinking")]
    AiThinking,
    #[error("not your turn")]
    NotYourTurn,
    #[error(transparent)]
    Move(#[from] MoveError),
}

/// AI computation state.
///
/// The engine travels to the worker thread and comes back with the result,
/// so its transposition cache survives across moves.
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<(AIEngine, MoveResult)>,
        start_time: Instant,
    },
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Disc),
    Draw,
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: Outcome,
    /// Classic only: the four cells to highlight
    pub winning_line: Option<[Pos; 4]>,
    /// Final line tallies (Red, Blue); Score Attack only
    pub tallies: Option<(u32, u32)>,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.start_time = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub config: GameConfig,
    pub current_turn: Disc,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Disc)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_column: Option<usize>,
    pub message: Option<String>,

    /// `None` while the engine is away on the worker thread
    engine: Option<AIEngine>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(),
            config,
            current_turn: Disc::Red,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_column: None,
            message: None,
            engine: Some(AIEngine::new()),
        }
    }

    /// Start over with the same configuration
    pub fn reset(&mut self) {
        let config = self.config;
        self.restart(config);
    }

    /// Start a new game with a new configuration
    pub fn restart(&mut self, config: GameConfig) {
        info!(
            mode = config.mode.label(),
            opponent = config.opponent.label(),
            difficulty = %config.difficulty,
            "new game"
        );
        // A search in flight still owns the engine; its result is dropped
        // and a fresh engine takes over.
        let mut engine = self.engine.take().unwrap_or_default();
        engine.clear_cache();

        self.board = Board::new();
        self.config = config;
        self.current_turn = Disc::Red;
        self.game_over = None;
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.suggested_column = None;
        self.message = None;
        self.engine = Some(engine);
    }

    /// Check if a human should move now
    pub fn is_human_turn(&self) -> bool {
        match self.config.opponent {
            Opponent::Engine => self.current_turn == Disc::Red,
            Opponent::Human => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.config.engine_plays() && self.current_turn == Disc::Blue
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Counters of the engine's transposition cache, unless a search is running
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.engine.as_ref().map(AIEngine::cache_stats)
    }

    /// Live line tallies (Red, Blue)
    pub fn tallies(&self) -> (u32, u32) {
        (
            line_tally(&self.board, Disc::Red),
            line_tally(&self.board, Disc::Blue),
        )
    }

    /// Drop a human disc into `col`
    pub fn try_drop(&mut self, col: usize) -> Result<(), TurnError> {
        if self.game_over.is_some() {
            return Err(TurnError::GameOver);
        }
        if self.is_ai_thinking() {
            return Err(TurnError::AiThinking);
        }
        if !self.is_human_turn() {
            return Err(TurnError::NotYourTurn);
        }

        self.execute_move(col)?;
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, col: usize) -> Result<(), MoveError> {
        let disc = self.current_turn;
        let row = self.board.place(col, disc)?;
        let pos = Pos::new(row as u8, col as u8);

        self.move_history.push((pos, disc));
        self.last_move = Some(pos);
        self.suggested_column = None;
        self.message = None;
        self.move_timer.stop();

        if let Some(result) = self.check_game_over(disc) {
            info!(outcome = ?result.outcome, moves = self.move_history.len(), "game over");
            self.game_over = Some(result);
            return Ok(());
        }

        self.current_turn = disc.opponent();
        self.move_timer.start();
        Ok(())
    }

    /// Classic ends on the first line; Score Attack only on a full board
    fn check_game_over(&self, mover: Disc) -> Option<GameResult> {
        match self.config.mode {
            GameMode::Classic => {
                if let Some(line) = find_winning_line(&self.board, mover) {
                    return Some(GameResult {
                        outcome: Outcome::Winner(mover),
                        winning_line: Some(line),
                        tallies: None,
                    });
                }
                self.board.is_full().then_some(GameResult {
                    outcome: Outcome::Draw,
                    winning_line: None,
                    tallies: None,
                })
            }
            GameMode::ScoreAttack => {
                if !self.board.is_full() {
                    return None;
                }
                let (red, blue) = self.tallies();
                let outcome = match red.cmp(&blue) {
                    std::cmp::Ordering::Greater => Outcome::Winner(Disc::Red),
                    std::cmp::Ordering::Less => Outcome::Winner(Disc::Blue),
                    std::cmp::Ordering::Equal => Outcome::Draw,
                };
                Some(GameResult {
                    outcome,
                    winning_line: None,
                    tallies: Some((red, blue)),
                })
            }
        }
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }
        let Some(mut engine) = self.engine.take() else {
            return;
        };

        let board = self.board;
        let disc = self.current_turn;
        let depth = self.config.difficulty.depth();
        let mode = self.config.mode;

        let (tx, rx) = channel();
        thread::spawn(move || {
            let result = engine.get_move_with_stats(&board, disc, depth, mode);
            let _ = tx.send((engine, result));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let received = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(reply) => Some((reply, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI worker exited without a result");
                    self.ai_state = AiState::Idle;
                    self.engine = Some(AIEngine::new());
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        let Some(((engine, move_result), elapsed)) = received else {
            return;
        };
        self.ai_state = AiState::Idle;
        self.engine = Some(engine);
        self.move_timer.ai_thinking_time = Some(elapsed);
        debug!(
            column = ?move_result.column,
            search = ?move_result.search_type,
            depth = move_result.depth,
            nodes = move_result.nodes,
            "AI move"
        );

        match move_result.column {
            Some(col) => {
                if let Err(err) = self.execute_move(col) {
                    self.message = Some(err.to_string());
                }
            }
            None => self.message = Some("AI could not find a move".to_string()),
        }
        self.last_ai_result = Some(move_result);
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Suggest a column for the side to move (Human vs Human)
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        // Quick, shallow search on the UI thread
        let depth = Difficulty::Easy.depth();
        let result =
            engine.get_move_with_stats(&self.board, self.current_turn, depth, self.config.mode);
        self.suggested_column = result.column;
        self.last_ai_result = Some(result);
    }

    /// Undo last move (the last two against the AI)
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        let undo_count = match self.config.opponent {
            Opponent::Engine if self.move_history.len() >= 2 => 2,
            _ => 1,
        };

        for _ in 0..undo_count {
            if let Some((pos, _)) = self.move_history.pop() {
                self.board.undo(pos.row as usize, pos.col as usize);
            }
        }

        self.current_turn = self
            .move_history
            .last()
            .map_or(Disc::Red, |&(_, disc)| disc.opponent());
        self.last_move = self.move_history.last().map(|&(pos, _)| pos);
        self.game_over = None;
        self.suggested_column = None;
        self.message = None;
        self.move_timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pvp(mode: GameMode) -> GameState {
        GameState::new(GameConfig {
            mode,
            opponent: Opponent::Human,
            difficulty: Difficulty::Easy,
        })
    }

    fn play(state: &mut GameState, cols: &[usize]) {
        for &col in cols {
            state.try_drop(col).unwrap();
        }
    }

    fn wait_for_ai(state: &mut GameState) {
        let deadline = Instant::now() + Duration::from_secs(60);
        while state.is_ai_thinking() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
            state.check_ai_result();
        }
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = pvp(GameMode::Classic);
        assert_eq!(state.current_turn, Disc::Red);
        play(&mut state, &[3]);
        assert_eq!(state.current_turn, Disc::Blue);
        assert_eq!(state.last_move, Some(Pos::new(5, 3)));
        assert_eq!(state.board.cell(5, 3), Disc::Red);
    }

    #[test]
    fn test_full_column_is_reported() {
        let mut state = pvp(GameMode::Classic);
        play(&mut state, &[0, 0, 0, 1, 0, 0, 0]);
        assert_eq!(
            state.try_drop(0),
            Err(TurnError::Move(MoveError::ColumnFull { column: 0 }))
        );
        assert_eq!(
            state.try_drop(9),
            Err(TurnError::Move(MoveError::InvalidColumn { column: 9 }))
        );
    }

    #[test]
    fn test_classic_win_highlights_line() {
        let mut state = pvp(GameMode::Classic);
        play(&mut state, &[0, 0, 1, 1, 2, 2, 3]);
        let result = state.game_over.unwrap();
        assert_eq!(result.outcome, Outcome::Winner(Disc::Red));
        let line = result.winning_line.unwrap();
        assert!(line.iter().all(|p| p.row == 5));
        assert_eq!(state.try_drop(4), Err(TurnError::GameOver));
    }

    #[test]
    fn test_score_attack_plays_on() {
        let mut state = pvp(GameMode::ScoreAttack);
        play(&mut state, &[0, 0, 1, 1, 2, 2, 3]);
        assert!(state.game_over.is_none());
        assert_eq!(state.tallies(), (1, 0));
        assert_eq!(state.current_turn, Disc::Blue);
    }

    #[test]
    fn test_score_attack_ends_on_full_board() {
        let mut state = pvp(GameMode::ScoreAttack);
        // Columns filled pairwise so no player gets a vertical four
        let order = [0, 1, 1, 0, 2, 3, 3, 2, 4, 5, 5, 4];
        for _ in 0..3 {
            play(&mut state, &order);
        }
        // Column 6 is filled last
        for _ in 0..6 {
            play(&mut state, &[6]);
        }
        assert!(state.board.is_full());
        let result = state.game_over.unwrap();
        let (red, blue) = result.tallies.unwrap();
        match result.outcome {
            Outcome::Winner(Disc::Red) => assert!(red > blue),
            Outcome::Winner(_) => assert!(blue > red),
            Outcome::Draw => assert_eq!(red, blue),
        }
    }

    #[test]
    fn test_undo_single_move_in_pvp() {
        let mut state = pvp(GameMode::Classic);
        play(&mut state, &[3, 4]);
        state.undo();
        assert_eq!(state.move_history.len(), 1);
        assert_eq!(state.board.cell(5, 4), Disc::Empty);
        assert_eq!(state.current_turn, Disc::Blue);
        assert_eq!(state.last_move, Some(Pos::new(5, 3)));
    }

    #[test]
    fn test_undo_reopens_finished_game() {
        let mut state = pvp(GameMode::Classic);
        play(&mut state, &[0, 0, 1, 1, 2, 2, 3]);
        state.undo();
        assert!(state.game_over.is_none());
        assert_eq!(state.current_turn, Disc::Red);
    }

    #[test]
    fn test_ai_replies_and_engine_returns() {
        let mut state = GameState::new(GameConfig {
            mode: GameMode::Classic,
            opponent: Opponent::Engine,
            difficulty: Difficulty::Easy,
        });
        play(&mut state, &[3]);
        assert!(state.is_ai_turn());
        assert_eq!(state.try_drop(2), Err(TurnError::NotYourTurn));

        state.start_ai_thinking();
        assert!(state.is_ai_thinking());
        assert_eq!(state.try_drop(2), Err(TurnError::AiThinking));

        wait_for_ai(&mut state);
        assert!(!state.is_ai_thinking());
        assert_eq!(state.move_history.len(), 2);
        assert_eq!(state.current_turn, Disc::Red);
        assert!(state.engine.is_some());
        assert!(state.last_ai_result.is_some());

        // Against the AI, undo takes back both moves
        state.undo();
        assert!(state.move_history.is_empty());
        assert!(state.board.is_board_empty());
    }

    #[test]
    fn test_suggestion_blocks_threat() {
        let mut state = pvp(GameMode::Classic);
        // Red threatens to complete the bottom row in column 3
        play(&mut state, &[0, 0, 1, 1, 2]);
        state.request_suggestion();
        assert_eq!(state.suggested_column, Some(3));
    }
}
