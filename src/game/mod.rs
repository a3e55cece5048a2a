//! Core game logic: board representation, player types, terminal-state
//! rules and the turn-alternating game session.

mod board;
mod player;
pub mod rules;
mod session;

pub use board::{Board, Cell, LegalColumns, COLS, ROWS};
pub use player::Player;
pub use rules::{has_square, is_draw, is_terminal, GameOutcome};
pub use session::{AiMove, GameReport, GameSession, SessionConfig, MAX_DIFFICULTY, MIN_DIFFICULTY};
