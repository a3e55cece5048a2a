use crate::game::Player;

use super::GameRecord;

/// Running tally of a series of games.
#[derive(Debug, Clone, Default)]
pub struct MatchStats {
    human_wins: usize,
    ai_wins: usize,
    draws: usize,
    total_moves: usize,
}

impl MatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, game: &GameRecord) {
        match game.winner {
            Some(Player::Human) => self.human_wins += 1,
            Some(Player::Ai) => self.ai_wins += 1,
            None => self.draws += 1,
        }
        self.total_moves += game.game_length();
    }

    pub fn games(&self) -> usize {
        self.human_wins + self.ai_wins + self.draws
    }

    pub fn wins(&self, side: Player) -> usize {
        match side {
            Player::Human => self.human_wins,
            Player::Ai => self.ai_wins,
        }
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Share of games won by `side`.
    pub fn win_rate(&self, side: Player) -> f32 {
        if self.games() == 0 {
            return 0.0;
        }
        self.wins(side) as f32 / self.games() as f32
    }

    /// Average game length in moves.
    pub fn average_game_length(&self) -> f32 {
        if self.games() == 0 {
            return 0.0;
        }
        self.total_moves as f32 / self.games() as f32
    }
}
