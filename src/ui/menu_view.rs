use crate::config::GameConfig;
use crate::game::Player;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::palette::board_color;

/// Entries of the options menu, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    BoardColor,
    PlayerName,
    StartingPlayer,
    Difficulty,
    Start,
}

impl MenuItem {
    pub const ALL: [MenuItem; 5] = [
        MenuItem::BoardColor,
        MenuItem::PlayerName,
        MenuItem::StartingPlayer,
        MenuItem::Difficulty,
        MenuItem::Start,
    ];
}

pub fn render(frame: &mut Frame, config: &GameConfig, selected: MenuItem, editing_name: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(7),    // Options
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let title = Paragraph::new("Square Four")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    render_options(frame, config, selected, editing_name, chunks[1]);

    let hint = if editing_name {
        "Type a name  |  Enter/Esc: Done"
    } else {
        "↑/↓: Select  |  Enter/←/→: Change  |  Q: Quit"
    };
    let controls = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(controls, chunks[2]);
}

fn render_options(
    frame: &mut Frame,
    config: &GameConfig,
    selected: MenuItem,
    editing_name: bool,
    area: Rect,
) {
    let mut lines = Vec::new();
    for item in MenuItem::ALL {
        let marker = if item == selected { "> " } else { "  " };
        let mut spans = vec![Span::raw(marker)];
        match item {
            MenuItem::BoardColor => {
                spans.push(Span::raw(format!("Board Color ({:>2}/16): ", config.board_color)));
                spans.push(Span::styled(
                    "      ",
                    Style::default().bg(board_color(config.board_color)),
                ));
            }
            MenuItem::PlayerName => {
                let cursor = if editing_name { "_" } else { "" };
                spans.push(Span::raw("Player Name: "));
                spans.push(Span::styled(
                    format!("{}{cursor}", config.player_name),
                    Style::default().bg(if editing_name { Color::Gray } else { Color::DarkGray }),
                ));
            }
            MenuItem::StartingPlayer => {
                let who = match config.starting_player {
                    Player::Human => "Human",
                    Player::Ai => "AI",
                };
                spans.push(Span::raw(format!("Starting Player: {who}")));
            }
            MenuItem::Difficulty => {
                spans.push(Span::raw(format!("Difficulty: {}", config.difficulty)));
            }
            MenuItem::Start => {
                spans.push(Span::styled(
                    "[ Start Game ]",
                    Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                ));
            }
        }
        let style = if item == selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(spans).style(style));
        lines.push(Line::from(""));
    }

    let options = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Options"));
    frame.render_widget(options, area);
}
