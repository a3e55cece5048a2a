use crate::game::{Board, Player};

/// Universal interface for anything that picks a column.
pub trait Agent {
    /// Select a column for `side` to drop into. `board` must have at least
    /// one playable column.
    fn select_action(&mut self, board: &Board, side: Player) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
