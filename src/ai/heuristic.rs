use crate::game::{Board, Cell, Player, COLS, ROWS};

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send + Sync {
    fn evaluate(&self, board: &Board, player: Player) -> i64;
}

/// Default heuristic: penalise edge columns and reward 2x2 blocks the
/// opponent has not touched.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquareHeuristic;

impl SquareHeuristic {
    /// `-2` per own piece in the leftmost and rightmost columns.
    fn edge_penalty(board: &Board, own: Cell) -> i64 {
        let count = (0..ROWS)
            .flat_map(|row| [board.get(row, 0), board.get(row, COLS - 1)])
            .filter(|&cell| cell == own)
            .count() as i64;
        -2 * count
    }

    /// Count own pieces in the two-cell row segment starting at `(row, col)`,
    /// or `None` if the opponent holds either cell.
    fn segment(board: &Board, row: usize, col: usize, own: Cell, opp: Cell) -> Option<i64> {
        let pair = [board.get(row, col), board.get(row, col + 1)];
        if pair.contains(&opp) {
            return None;
        }
        Some(pair.iter().filter(|&&cell| cell == own).count() as i64)
    }

    fn cluster_bonus(board: &Board, own: Cell, opp: Cell) -> i64 {
        let mut score = 0;
        for col in 0..COLS - 1 {
            for row in 0..ROWS - 1 {
                let Some(lower) = Self::segment(board, row, col, own, opp) else {
                    continue;
                };
                let Some(upper) = Self::segment(board, row + 1, col, own, opp) else {
                    continue;
                };
                // XOR, not a power: an untouched block is worth 7, one own
                // piece on the bottom row 9, two 11.
                score += (7 ^ lower) + 3 * (upper + lower);
            }
        }
        score
    }
}

impl Heuristic for SquareHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i64 {
        let own = player.to_cell();
        let opp = player.other().to_cell();
        Self::edge_penalty(board, own) + Self::cluster_bonus(board, own, opp)
    }
}

/// Score `board` for `player` with [`SquareHeuristic`].
pub fn score(board: &Board, player: Player) -> i64 {
    SquareHeuristic.evaluate(board, player)
}
