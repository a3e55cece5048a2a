//! Terminal UI: the options menu (board colour, player name, starting
//! player, difficulty) and the game view.

mod app;
mod board_widget;
mod game_view;
mod menu_view;
pub mod palette;

pub use app::App;
