use std::time::{Duration, Instant};

use crate::ai::{minimax, SearchResult};
use crate::error::{ConfigError, SessionError};

use super::{has_square, rules, Board, GameOutcome, Player};

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

/// Immutable settings a session is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    starting_player: Player,
    difficulty: u8,
}

impl SessionConfig {
    /// `difficulty` is the search depth and must be in `1..=5`.
    pub fn new(starting_player: Player, difficulty: u8) -> Result<Self, ConfigError> {
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(ConfigError::Validation(format!(
                "difficulty must be in {MIN_DIFFICULTY}..={MAX_DIFFICULTY}, got {difficulty}"
            )));
        }
        Ok(SessionConfig {
            starting_player,
            difficulty,
        })
    }

    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }
}

/// The automated player's move and the score the search gave it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiMove {
    pub column: usize,
    pub row: usize,
    pub score: f64,
}

/// What the front end shows once a game has ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameReport {
    pub outcome: GameOutcome,
    pub elapsed: Duration,
    pub moves: u32,
}

/// One game from the first move to a terminal outcome.
///
/// The session owns the live board. Once an outcome is recorded every
/// further move request fails with [`SessionError::GameOver`].
#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    board: Board,
    turn: Player,
    moves_played: u32,
    outcome: Option<GameOutcome>,
    started: Instant,
    finished: Option<Duration>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_board(config, Board::new())
    }

    /// Start from an existing position, with `config`'s starting player to move.
    /// A board that is already won or full gives a session that is already over.
    pub fn with_board(config: SessionConfig, board: Board) -> Self {
        let outcome = rules::outcome(&board);
        GameSession {
            config,
            board,
            turn: config.starting_player(),
            moves_played: 0,
            outcome,
            started: Instant::now(),
            finished: outcome.map(|_| Duration::ZERO),
        }
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose move it nominally is.
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Wall-clock time since the session started, frozen once the game ends.
    pub fn elapsed(&self) -> Duration {
        self.finished.unwrap_or_else(|| self.started.elapsed())
    }

    /// Outcome, elapsed time and move count, once the game is over.
    pub fn report(&self) -> Option<GameReport> {
        self.outcome.map(|outcome| GameReport {
            outcome,
            elapsed: self.elapsed(),
            moves: self.moves_played,
        })
    }

    /// Records a draw if no column is playable. Returns the recorded outcome.
    pub fn check_draw(&mut self) -> Option<GameOutcome> {
        if self.outcome.is_none() && self.board.legal_columns().is_empty() {
            self.finish(GameOutcome::Draw);
        }
        self.outcome
    }

    /// Apply the human's move in `col`. A rejected move leaves the board and
    /// the turn untouched.
    pub fn play_human(&mut self, col: usize) -> Result<Option<GameOutcome>, SessionError> {
        self.ensure_turn(Player::Human)?;
        self.apply(Player::Human, col)?;
        Ok(self.outcome)
    }

    /// Run the search at the configured depth and apply its column.
    pub fn play_ai(&mut self) -> Result<AiMove, SessionError> {
        self.ensure_turn(Player::Ai)?;
        let SearchResult { column, score } = minimax(
            &self.board,
            usize::from(self.config.difficulty()),
            f64::NEG_INFINITY,
            f64::INFINITY,
            true,
        );
        let column = column.ok_or_else(|| SessionError::NoLegalMove {
            legal: self.board.legal_columns(),
        })?;
        let row = self.apply(Player::Ai, column)?;
        Ok(AiMove { column, row, score })
    }

    fn ensure_turn(&mut self, player: Player) -> Result<(), SessionError> {
        if self.check_draw().is_some() {
            return Err(SessionError::GameOver);
        }
        if self.turn != player {
            return Err(SessionError::NotYourTurn {
                expected: self.turn,
                attempted: player,
            });
        }
        Ok(())
    }

    fn apply(&mut self, player: Player, col: usize) -> Result<usize, SessionError> {
        let row = self.board.drop_piece(col, player.to_cell())?;
        self.moves_played += 1;
        if has_square(&self.board, player) {
            self.finish(GameOutcome::Winner(player));
        }
        self.turn = player.other();
        Ok(row)
    }

    fn finish(&mut self, outcome: GameOutcome) {
        self.outcome = Some(outcome);
        self.finished = Some(self.started.elapsed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoveError;
    use crate::game::{Cell, ROWS};

    fn config(starting: Player, difficulty: u8) -> SessionConfig {
        SessionConfig::new(starting, difficulty).unwrap()
    }

    #[test]
    fn test_config_rejects_out_of_range_difficulty() {
        assert!(SessionConfig::new(Player::Human, 0).is_err());
        assert!(SessionConfig::new(Player::Human, 6).is_err());
        assert!(SessionConfig::new(Player::Ai, 5).is_ok());
    }

    #[test]
    fn test_initial_session() {
        let session = GameSession::new(config(Player::Human, 2));
        assert_eq!(session.turn(), Player::Human);
        assert_eq!(session.moves_played(), 0);
        assert!(!session.is_over());
        assert!(session.report().is_none());
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = GameSession::new(config(Player::Human, 1));
        assert_eq!(session.play_human(3), Ok(None));
        assert_eq!(session.turn(), Player::Ai);
        assert_eq!(session.board().get(0, 3), Cell::Human);

        let ai = session.play_ai().unwrap();
        assert!(ai.column < 7);
        assert_eq!(session.board().get(ai.row, ai.column), Cell::Ai);
        assert_eq!(session.turn(), Player::Human);
        assert_eq!(session.moves_played(), 2);
    }

    #[test]
    fn test_out_of_turn_rejected() {
        let mut session = GameSession::new(config(Player::Ai, 1));
        assert_eq!(
            session.play_human(0),
            Err(SessionError::NotYourTurn {
                expected: Player::Ai,
                attempted: Player::Human,
            })
        );
        assert_eq!(session.moves_played(), 0);
    }

    #[test]
    fn test_full_column_rejected_without_mutation() {
        let mut board = Board::new();
        for i in 0..ROWS {
            let cell = if i % 2 == 0 { Cell::Human } else { Cell::Ai };
            board.drop_piece(0, cell).unwrap();
        }
        let mut session = GameSession::with_board(config(Player::Human, 1), board);
        assert_eq!(
            session.play_human(0),
            Err(SessionError::Move(MoveError::ColumnFull(0)))
        );
        assert_eq!(session.board(), &board);
        assert_eq!(session.turn(), Player::Human);
        assert_eq!(session.moves_played(), 0);
    }

    #[test]
    fn test_human_square_ends_game() {
        let board: Board = ".......\n.......\n.......\n.......\nH......\nHHAA.A."
            .parse()
            .unwrap();
        let mut session = GameSession::with_board(config(Player::Human, 1), board);
        assert_eq!(
            session.play_human(1),
            Ok(Some(GameOutcome::Winner(Player::Human)))
        );
        let report = session.report().unwrap();
        assert_eq!(report.outcome, GameOutcome::Winner(Player::Human));
        assert_eq!(report.moves, 1);
        assert_eq!(session.play_ai(), Err(SessionError::GameOver));
        assert_eq!(session.play_human(4), Err(SessionError::GameOver));
        assert_eq!(session.moves_played(), 1);
    }

    #[test]
    fn test_ai_completes_square() {
        let board: Board = ".......\n.......\n.......\n.......\n.....A.\nHH..HAA"
            .parse()
            .unwrap();
        let mut session = GameSession::with_board(config(Player::Ai, 2), board);
        let ai = session.play_ai().unwrap();
        assert_eq!(ai.column, 6);
        assert_eq!(ai.score, 1e14);
        assert_eq!(session.outcome(), Some(GameOutcome::Winner(Player::Ai)));
    }

    #[test]
    fn test_won_board_is_already_over() {
        let board: Board = ".......\n.......\n.......\n.......\nAA.....\nAAH.H.."
            .parse()
            .unwrap();
        let mut session = GameSession::with_board(config(Player::Human, 2), board);
        assert_eq!(session.outcome(), Some(GameOutcome::Winner(Player::Ai)));
        assert_eq!(session.play_human(3), Err(SessionError::GameOver));
        assert_eq!(session.play_ai(), Err(SessionError::GameOver));
        assert_eq!(session.moves_played(), 0);
        assert_eq!(session.board(), &board);
        assert_eq!(session.report().unwrap().elapsed, Duration::ZERO);
    }

    #[test]
    fn test_elapsed_frozen_after_outcome() {
        let board: Board = "HAHAHAH\nAHAHAHA\nHAHAHAH\nAHAHAHA\nHAHAHAH\nAHAHAHA"
            .parse()
            .unwrap();
        let mut session = GameSession::with_board(config(Player::Human, 1), board);
        assert_eq!(session.check_draw(), Some(GameOutcome::Draw));
        let first = session.elapsed();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(session.elapsed(), first);
    }
}
