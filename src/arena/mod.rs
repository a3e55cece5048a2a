//! Headless agent-vs-agent games, using the same rules as the interactive
//! session: the mover's square ends the game, a full board is a draw.

mod stats;

pub use stats::MatchStats;

use crate::ai::Agent;
use crate::error::MoveError;
use crate::game::{has_square, Board, Player};

/// Result of a single game between two agents.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub winner: Option<Player>,
    pub first: Player,
    pub columns: Vec<usize>,
    pub final_board: Board,
}

impl GameRecord {
    pub fn game_length(&self) -> usize {
        self.columns.len()
    }
}

/// Play one game. `human` drops the human pieces, `ai` the AI pieces, and
/// `first` moves first. An agent picking an unplayable column aborts the game.
pub fn play_game(
    human: &mut dyn Agent,
    ai: &mut dyn Agent,
    first: Player,
) -> Result<GameRecord, MoveError> {
    let mut board = Board::new();
    let mut columns = Vec::new();
    let mut side = first;

    let winner = loop {
        if board.legal_columns().is_empty() {
            break None;
        }
        let agent: &mut dyn Agent = match side {
            Player::Human => &mut *human,
            Player::Ai => &mut *ai,
        };
        let col = agent.select_action(&board, side);
        board.drop_piece(col, side.to_cell())?;
        columns.push(col);
        if has_square(&board, side) {
            break Some(side);
        }
        side = side.other();
    };

    Ok(GameRecord {
        winner,
        first,
        columns,
        final_board: board,
    })
}
