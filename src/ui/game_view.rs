use crate::game::{GameOutcome, GameSession, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::board_lines;

pub fn render(
    frame: &mut Frame,
    session: &GameSession,
    selected_column: usize,
    message: &Option<String>,
    player_name: &str,
    board_color: Color,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, session, player_name, chunks[0]);
    render_board(frame, session, selected_column, board_color, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Banner text for a finished game.
pub fn outcome_text(outcome: GameOutcome, player_name: &str) -> String {
    match outcome {
        GameOutcome::Winner(Player::Human) => format!("{player_name} wins!!"),
        GameOutcome::Winner(Player::Ai) => "The AI wins!!".to_string(),
        GameOutcome::Draw => "Cat's Game!".to_string(),
    }
}

fn render_header(frame: &mut Frame, session: &GameSession, player_name: &str, area: Rect) {
    let difficulty = session.config().difficulty();
    let (status, color) = match session.report() {
        Some(report) => (
            format!(
                "{}  |  {:.1}s  |  {} moves",
                outcome_text(report.outcome, player_name),
                report.elapsed.as_secs_f64(),
                report.moves
            ),
            Color::Red,
        ),
        None => {
            let turn = match session.turn() {
                Player::Human => player_name,
                Player::Ai => "AI (thinking)",
            };
            (
                format!("To move: {turn}  |  Difficulty {difficulty}  |  Move {}", session.moves_played() + 1),
                Color::Cyan,
            )
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Square Four"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    session: &GameSession,
    selected_column: usize,
    board_color: Color,
    area: Rect,
) {
    let selected = (!session.is_over() && session.turn() == Player::Human).then_some(selected_column);
    let board = Paragraph::new(board_lines(session.board(), selected, board_color))
        .alignment(Alignment::Center);
    frame.render_widget(board, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  Enter: Drop  |  R: Menu  |  Q: Quit");
    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_text() {
        assert_eq!(
            outcome_text(GameOutcome::Winner(Player::Human), "Ada"),
            "Ada wins!!"
        );
        assert_eq!(
            outcome_text(GameOutcome::Winner(Player::Ai), "Ada"),
            "The AI wins!!"
        );
        assert_eq!(outcome_text(GameOutcome::Draw, "Ada"), "Cat's Game!");
    }
}
