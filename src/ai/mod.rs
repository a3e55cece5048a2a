//! Move selection: the positional heuristic, the alpha-beta search that
//! drives the automated player, and simpler agents to play it against.

mod agent;
mod greedy;
pub mod heuristic;
pub mod minimax;
mod random;

pub use agent::Agent;
pub use greedy::GreedyAgent;
pub use heuristic::{score, Heuristic, SquareHeuristic};
pub use minimax::{
    minimax, MinimaxAgent, Search, SearchResult, AI_WIN_SCORE, DRAW_SCORE, HUMAN_WIN_SCORE,
};
pub use random::RandomAgent;
