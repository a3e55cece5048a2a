//! # Square Four
//!
//! A two-player gravity-drop game on a 6x7 grid: pieces fall to the lowest
//! open cell of a column, and the first side to fill a 2x2 block wins. The
//! automated opponent is a depth-limited alpha-beta minimax search.
//!
//! ## Modules
//!
//! - [`game`]: Board, players, terminal-state rules, game session
//! - [`ai`]: Positional heuristic, minimax search, agents
//! - [`arena`]: Headless agent-vs-agent games and tallies
//! - [`ui`]: Terminal UI: options menu and game view
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
