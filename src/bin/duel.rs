use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use square_four::ai::{Agent, GreedyAgent, MinimaxAgent, RandomAgent};
use square_four::arena::{play_game, MatchStats};
use square_four::game::{Player, MAX_DIFFICULTY, MIN_DIFFICULTY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Opponent {
    Random,
    Greedy,
    Minimax,
}

/// Pit the minimax AI against another agent, headless.
#[derive(Parser)]
#[command(name = "duel", about = "Play the minimax AI against another agent")]
struct Cli {
    /// Number of games; the first mover alternates
    #[arg(long, default_value_t = 20)]
    games: usize,

    /// Search depth of the minimax AI (1-5)
    #[arg(long, default_value_t = 3)]
    depth: usize,

    /// Agent playing the human pieces
    #[arg(long, value_enum, default_value_t = Opponent::Random)]
    opponent: Opponent,

    /// Search depth when the opponent is also minimax
    #[arg(long, default_value_t = 1)]
    opponent_depth: usize,

    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Only print the summary
    #[arg(long)]
    quiet: bool,
}

fn opponent(cli: &Cli, game: usize) -> Box<dyn Agent> {
    match cli.opponent {
        Opponent::Random => match cli.seed {
            Some(seed) => Box::new(RandomAgent::with_seed(seed.wrapping_add(game as u64))),
            None => Box::new(RandomAgent::new()),
        },
        Opponent::Greedy => Box::new(GreedyAgent::new()),
        Opponent::Minimax => Box::new(MinimaxAgent::new(cli.opponent_depth)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let depth_range = usize::from(MIN_DIFFICULTY)..=usize::from(MAX_DIFFICULTY);
    if !depth_range.contains(&cli.depth) {
        bail!("--depth must be in {MIN_DIFFICULTY}..={MAX_DIFFICULTY}, got {}", cli.depth);
    }
    if cli.opponent == Opponent::Minimax && !depth_range.contains(&cli.opponent_depth) {
        bail!(
            "--opponent-depth must be in {MIN_DIFFICULTY}..={MAX_DIFFICULTY}, got {}",
            cli.opponent_depth
        );
    }
    if cli.games == 0 {
        bail!("--games must be > 0");
    }

    let mut ai = MinimaxAgent::new(cli.depth);
    let mut stats = MatchStats::new();
    let started = Instant::now();

    for game in 0..cli.games {
        let mut human = opponent(&cli, game);
        let first = if game % 2 == 0 { Player::Human } else { Player::Ai };
        let record = play_game(human.as_mut(), &mut ai, first)
            .with_context(|| format!("game {} aborted", game + 1))?;

        if !cli.quiet {
            let result = match record.winner {
                Some(Player::Ai) => "minimax wins",
                Some(Player::Human) => "opponent wins",
                None => "draw",
            };
            println!(
                "[duel] game {:>3}  first={:<5}  moves={:>2}  {}",
                game + 1,
                record.first.name(),
                record.game_length(),
                result
            );
        }
        stats.record(&record);
    }

    println!(
        "[duel] minimax(depth {}) vs {}: {} won, {} lost, {} drawn of {} ({:.0}% win rate)",
        cli.depth,
        human_label(&cli),
        stats.wins(Player::Ai),
        stats.wins(Player::Human),
        stats.draws(),
        stats.games(),
        stats.win_rate(Player::Ai) * 100.0
    );
    println!(
        "[duel] average game length {:.1} moves, {:.2}s total",
        stats.average_game_length(),
        started.elapsed().as_secs_f64()
    );

    Ok(())
}

fn human_label(cli: &Cli) -> String {
    match cli.opponent {
        Opponent::Random => "random".to_string(),
        Opponent::Greedy => "greedy".to_string(),
        Opponent::Minimax => format!("minimax(depth {})", cli.opponent_depth),
    }
}
