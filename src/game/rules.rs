//! Terminal-state detection. A side wins by owning every cell of some
//! axis-aligned 2x2 block; the game is drawn once no column is playable.

use super::{Board, Cell, Player, COLS, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Whether the 2x2 block with bottom-left corner `(row, col)` is all `cell`.
fn is_square(board: &Board, row: usize, col: usize, cell: Cell) -> bool {
    board.get(row, col) == cell
        && board.get(row + 1, col) == cell
        && board.get(row, col + 1) == cell
        && board.get(row + 1, col + 1) == cell
}

/// True iff `player` owns all four cells of some 2x2 block.
pub fn has_square(board: &Board, player: Player) -> bool {
    let cell = player.to_cell();
    (0..ROWS - 1).any(|row| (0..COLS - 1).any(|col| is_square(board, row, col, cell)))
}

/// True iff no column is playable, whatever the win state.
pub fn is_draw(board: &Board) -> bool {
    board.legal_columns().is_empty()
}

pub fn is_terminal(board: &Board) -> bool {
    has_square(board, Player::Human) || has_square(board, Player::Ai) || is_draw(board)
}

/// Outcome of a board, if any. The AI's square is checked first, then the
/// human's, then the draw.
pub fn outcome(board: &Board) -> Option<GameOutcome> {
    if has_square(board, Player::Ai) {
        Some(GameOutcome::Winner(Player::Ai))
    } else if has_square(board, Player::Human) {
        Some(GameOutcome::Winner(Player::Human))
    } else if is_draw(board) {
        Some(GameOutcome::Draw)
    } else {
        None
    }
}
