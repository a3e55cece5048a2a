use crate::game::{has_square, is_terminal, Board, Player};

use super::agent::Agent;
use super::heuristic::{Heuristic, SquareHeuristic};

/// Score of a position where the AI owns a square.
pub const AI_WIN_SCORE: f64 = 1e14;
/// Score of a position where the human owns a square.
pub const HUMAN_WIN_SCORE: f64 = -1e13;
/// Score of a full board with no square.
pub const DRAW_SCORE: f64 = 0.0;

/// Column picked by a search and the score backing it. `column` is only
/// meaningful at the root and is `None` at leaves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: f64,
}

impl SearchResult {
    fn leaf(score: f64) -> Self {
        SearchResult {
            column: None,
            score,
        }
    }
}

/// Depth-limited minimax over square-game boards. The AI maximises and the
/// human minimises; leaves are scored from the AI's side.
///
/// Every explored branch works on its own copy of the board, so the caller's
/// board is never touched.
pub struct Search<'h> {
    heuristic: &'h dyn Heuristic,
    prune: bool,
    nodes: u64,
}

impl<'h> Search<'h> {
    /// Alpha-beta search.
    pub fn pruned(heuristic: &'h dyn Heuristic) -> Self {
        Search {
            heuristic,
            prune: true,
            nodes: 0,
        }
    }

    /// Plain minimax that visits every node. Picks the same column as
    /// [`Search::pruned`], only slower.
    pub fn full_width(heuristic: &'h dyn Heuristic) -> Self {
        Search {
            heuristic,
            prune: false,
            nodes: 0,
        }
    }

    /// Nodes visited since this search was created.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search `depth` plies below `board`. `maximizing` means the AI is to move.
    ///
    /// Columns are tried in ascending order and only a strictly better score
    /// replaces the current choice, so ties go to the lowest column.
    pub fn run(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> SearchResult {
        self.nodes += 1;

        if depth == 0 || is_terminal(board) {
            return SearchResult::leaf(self.leaf_score(board));
        }

        let legal = board.legal_columns();
        let (side, mut best) = if maximizing {
            (Player::Ai, f64::NEG_INFINITY)
        } else {
            (Player::Human, f64::INFINITY)
        };
        // Not terminal, so at least one column is playable.
        let mut column = legal[0];

        for &col in &legal {
            let mut child = *board;
            let Some(row) = child.lowest_open_row(col) else {
                continue;
            };
            child.place(row, col, side.to_cell());

            let score = self.run(&child, depth - 1, alpha, beta, !maximizing).score;
            if maximizing {
                if score > best {
                    best = score;
                    column = col;
                }
                alpha = alpha.max(best);
            } else {
                if score < best {
                    best = score;
                    column = col;
                }
                beta = beta.min(best);
            }
            if self.prune && alpha >= beta {
                break;
            }
        }

        SearchResult {
            column: Some(column),
            score: best,
        }
    }

    fn leaf_score(&self, board: &Board) -> f64 {
        if has_square(board, Player::Ai) {
            AI_WIN_SCORE
        } else if has_square(board, Player::Human) {
            HUMAN_WIN_SCORE
        } else if board.legal_columns().is_empty() {
            DRAW_SCORE
        } else {
            self.heuristic.evaluate(board, Player::Ai) as f64
        }
    }
}

/// Alpha-beta minimax with the default [`SquareHeuristic`].
pub fn minimax(board: &Board, depth: usize, alpha: f64, beta: f64, maximizing: bool) -> SearchResult {
    Search::pruned(&SquareHeuristic).run(board, depth, alpha, beta, maximizing)
}

/// Minimax agent with alpha-beta pruning at a fixed depth.
#[derive(Debug, Clone, Copy)]
pub struct MinimaxAgent {
    depth: usize,
    heuristic: SquareHeuristic,
}

impl MinimaxAgent {
    /// A depth of 0 is raised to 1 so the agent always looks one move ahead.
    pub fn new(depth: usize) -> Self {
        MinimaxAgent {
            depth: depth.max(1),
            heuristic: SquareHeuristic,
        }
    }
}

impl Agent for MinimaxAgent {
    /// The AI side maximises, the human side minimises the same score.
    fn select_action(&mut self, board: &Board, side: Player) -> usize {
        let legal = board.legal_columns();
        assert!(!legal.is_empty(), "No legal actions available");

        let result = Search::pruned(&self.heuristic).run(
            board,
            self.depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            side == Player::Ai,
        );
        // A square already on the board makes the root a leaf.
        result.column.unwrap_or(legal[0])
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::heuristic::score;
    use crate::ai::RandomAgent;
    use crate::game::Cell;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    fn root(board: &Board, depth: usize) -> SearchResult {
        minimax(board, depth, f64::NEG_INFINITY, f64::INFINITY, true)
    }

    #[test]
    fn depth_zero_returns_heuristic() {
        let b = board(".......\n.......\n.......\n.......\n..A....\n.HHA...");
        let result = root(&b, 0);
        assert_eq!(result.column, None);
        assert_eq!(result.score, score(&b, Player::Ai) as f64);
    }

    #[test]
    fn terminal_leaves_use_sentinels() {
        let ai_win = board(".......\n.......\n.......\n.......\nAA.....\nAAH.H..");
        assert_eq!(root(&ai_win, 3), SearchResult::leaf(AI_WIN_SCORE));

        let human_win = board(".......\n.......\n.......\n.......\nHH.....\nHHA.A..");
        assert_eq!(root(&human_win, 3), SearchResult::leaf(HUMAN_WIN_SCORE));

        let draw = board("HAHAHAH\nAHAHAHA\nHAHAHAH\nAHAHAHA\nHAHAHAH\nAHAHAHA");
        assert_eq!(root(&draw, 3), SearchResult::leaf(DRAW_SCORE));
    }

    #[test]
    fn empty_board_gives_finite_score() {
        let result = root(&Board::new(), 4);
        let column = result.column.expect("root search picks a column");
        assert!(column < 7);
        assert!(result.score.is_finite());
        assert!(result.score < AI_WIN_SCORE && result.score > HUMAN_WIN_SCORE);
    }

    #[test]
    fn completes_own_square() {
        let b = board(".......\n.......\n.......\n.......\n...A...\n..HAAH.");
        for depth in 1..=4 {
            let result = root(&b, depth);
            assert_eq!(result.column, Some(4), "depth {depth}");
            assert_eq!(result.score, AI_WIN_SCORE, "depth {depth}");
        }
    }

    #[test]
    fn blocks_human_square() {
        // Human threatens col 1; every other AI move loses at depth 2.
        let b = board(".......\n.......\n.......\n.......\nH...A..\nHHA.A..");
        let result = root(&b, 2);
        assert_eq!(result.column, Some(1));
        assert!(result.score > HUMAN_WIN_SCORE);
    }

    #[test]
    fn search_does_not_mutate_board() {
        let b = board(".......\n.......\n.......\n.......\n..A....\n.HHA...");
        let before = b;
        let _ = root(&b, 4);
        assert_eq!(b, before);
    }

    #[test]
    fn ties_go_to_lowest_column() {
        // Columns 0/6, 1/5 and 2/4 score the same; the left one is kept.
        let result = root(&Board::new(), 1);
        let mut best_col = 0;
        let mut best = f64::NEG_INFINITY;
        for col in 0..7 {
            let mut child = Board::new();
            child.drop_piece(col, Cell::Ai).unwrap();
            let s = score(&child, Player::Ai) as f64;
            if s > best {
                best = s;
                best_col = col;
            }
        }
        assert_eq!(result.column, Some(best_col));
        assert_eq!(result.score, best);
    }

    #[test]
    fn pruning_visits_fewer_nodes_with_same_choice() {
        let b = board(".......\n.......\n.......\n.......\n..A....\n.HHA...");
        let mut pruned = Search::pruned(&SquareHeuristic);
        let mut full = Search::full_width(&SquareHeuristic);
        let a = pruned.run(&b, 4, f64::NEG_INFINITY, f64::INFINITY, true);
        let f = full.run(&b, 4, f64::NEG_INFINITY, f64::INFINITY, true);
        assert_eq!(a, f);
        assert!(pruned.nodes() < full.nodes());
    }

    #[test]
    fn minimizing_root_picks_human_move() {
        // Human to move can finish its own square in col 1.
        let b = board(".......\n.......\n.......\n.......\nH...A..\nHHA.A..");
        let result = minimax(&b, 1, f64::NEG_INFINITY, f64::INFINITY, false);
        assert_eq!(result.column, Some(1));
        assert_eq!(result.score, HUMAN_WIN_SCORE);
    }

    // --- Agent tests ---

    #[test]
    fn agent_selects_legal_action() {
        let mut agent = MinimaxAgent::new(3);
        let b = board("H......\nA......\nH......\nA......\nH......\nA......");
        let action = agent.select_action(&b, Player::Ai);
        assert!(b.legal_columns().contains(&action));
        assert_ne!(action, 0);
    }

    #[test]
    fn agent_beats_random() {
        let games = 10;
        let mut wins = 0;
        for game in 0..games {
            let mut minimax = MinimaxAgent::new(3);
            let mut random = RandomAgent::with_seed(game);
            let mut b = Board::new();
            let mut side = if game % 2 == 0 { Player::Ai } else { Player::Human };
            loop {
                if b.legal_columns().is_empty() {
                    break;
                }
                let col = match side {
                    Player::Ai => minimax.select_action(&b, side),
                    Player::Human => random.select_action(&b, side),
                };
                b.drop_piece(col, side.to_cell()).unwrap();
                if has_square(&b, side) {
                    if side == Player::Ai {
                        wins += 1;
                    }
                    break;
                }
                side = side.other();
            }
        }
        assert!(wins >= 8, "minimax won only {wins}/{games} against random");
    }

    #[test]
    #[should_panic(expected = "No legal actions available")]
    fn agent_panics_on_full_board() {
        let b = board("HAHAHAH\nAHAHAHA\nHAHAHAH\nAHAHAHA\nHAHAHAH\nAHAHAHA");
        MinimaxAgent::new(2).select_action(&b, Player::Ai);
    }

    #[test]
    fn name_is_minimax() {
        let agent = MinimaxAgent::new(4);
        assert_eq!(agent.name(), "Minimax");
    }

    #[test]
    fn zero_depth_still_looks_one_move_ahead() {
        // The root's first legal column is 0; only a real search finds 4.
        let b = board(".......\n.......\n.......\n.......\n...A...\n..HAAH.");
        assert_eq!(MinimaxAgent::new(0).select_action(&b, Player::Ai), 4);
    }
}
