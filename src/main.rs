use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use square_four::config::AppConfig;
use square_four::game::Player;
use square_four::ui::App;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum First {
    Human,
    Ai,
}

impl From<First> for Player {
    fn from(first: First) -> Self {
        match first {
            First::Human => Player::Human,
            First::Ai => Player::Ai,
        }
    }
}

/// Play Square Four against the minimax AI in the terminal.
#[derive(Parser)]
#[command(name = "square-four", about = "Drop pieces, fill a 2x2 block, beat the AI")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "square_four.toml")]
    config: PathBuf,

    /// AI search depth (1-5)
    #[arg(long)]
    difficulty: Option<u8>,

    /// Who moves first
    #[arg(long, value_enum)]
    first: Option<First>,

    /// Player name shown when you win
    #[arg(long)]
    name: Option<String>,

    /// Board colour palette index (1-16)
    #[arg(long)]
    color: Option<u8>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(difficulty) = cli.difficulty {
        app_config.game.difficulty = difficulty;
    }
    if let Some(first) = cli.first {
        app_config.game.starting_player = first.into();
    }
    if let Some(name) = cli.name {
        app_config.game.player_name = name;
    }
    if let Some(color) = cli.color {
        app_config.game.board_color = color;
    }
    app_config.validate().context("invalid command-line override")?;

    run(App::new(app_config.game)).context("terminal UI failed")
}

fn run(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even if the app failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
