use crate::game::{Board, Player};

use super::agent::Agent;
use super::heuristic::{Heuristic, SquareHeuristic};

/// One-ply agent: drops into each legal column on a copy and keeps the one
/// the heuristic likes best for its own side. It never looks at the
/// opponent's reply, and does not notice wins the heuristic cannot see.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAgent {
    heuristic: SquareHeuristic,
}

impl GreedyAgent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Agent for GreedyAgent {
    fn select_action(&mut self, board: &Board, side: Player) -> usize {
        let legal = board.legal_columns();
        assert!(!legal.is_empty(), "No legal actions available");

        // Columns scoring 0 or less never replace the fallback.
        let mut best_col = legal[0];
        let mut best_score = 0;
        for &col in &legal {
            let mut temp = *board;
            let Some(row) = temp.lowest_open_row(col) else {
                continue;
            };
            temp.place(row, col, side.to_cell());
            let score = self.heuristic.evaluate(&temp, side);
            if score > best_score {
                best_score = score;
                best_col = col;
            }
        }
        best_col
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_center_to_edge_on_empty_board() {
        // Columns 1..=5 all reach 214; edges reach 210. First best wins.
        let mut agent = GreedyAgent::new();
        assert_eq!(agent.select_action(&Board::new(), Player::Ai), 1);
    }

    #[test]
    fn selects_legal_action() {
        let board: Board = ".H.....\n.A.....\n.H.....\n.A.....\n.H.....\n.A....."
            .parse()
            .unwrap();
        let mut agent = GreedyAgent::new();
        let action = agent.select_action(&board, Player::Human);
        assert!(board.legal_columns().contains(&action));
    }

    #[test]
    fn name_is_greedy() {
        assert_eq!(GreedyAgent::new().name(), "Greedy");
    }
}
