use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use perilanda::board::Board;
use perilanda::game::Game;
use perilanda::player::MoveStatus;
use perilanda::position::load_position;
use perilanda::random::pick_random_move_with;
use perilanda::side::Side;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Play random games and report how they end.
#[derive(Parser, Debug)]
#[command(
    name = "simulate",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_TIMESTAMP"), ")")
)]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 100)]
    games: u32,

    /// Plies after which an undecided game counts as unfinished
    #[arg(long, default_value_t = 300)]
    max_plies: u32,

    /// Seed for reproducible playouts
    #[arg(long)]
    seed: Option<u64>,

    /// Start every game from this position file instead of the standard opening
    #[arg(long)]
    position: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    games: u32,
    orange_wins: u32,
    green_wins: u32,
    unfinished: u32,
    stalled: u32,
    total_plies: u64,
    longest_game: u32,
}

enum Outcome {
    Won(Side),
    Stalled,
    Unfinished,
}

fn play_game(start: &Board, max_plies: u32, rng: &mut StdRng) -> (Outcome, u32) {
    let mut game = Game::from_board(start.clone());
    let mut plies = 0;
    while plies < max_plies {
        if let Some(winner) = game.winner() {
            return (Outcome::Won(winner), plies);
        }
        let Some(mv) = pick_random_move_with(game.board(), rng) else {
            return (Outcome::Stalled, plies);
        };
        if game.make_move(mv) != MoveStatus::Done {
            warn!(mv = %mv, "picked move was rejected");
            return (Outcome::Stalled, plies);
        }
        check_chiefs(game.board());
        plies += 1;
    }
    match game.winner() {
        Some(winner) => (Outcome::Won(winner), plies),
        None => (Outcome::Unfinished, plies),
    }
}

fn check_chiefs(board: &Board) {
    for side in [Side::Orange, Side::Green] {
        let chiefs = board
            .pieces(side)
            .iter()
            .filter(|p| p.kind().is_chief())
            .count();
        assert!(chiefs <= 1, "{side} has {chiefs} chiefs:\n{board}");
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let start = match &args.position {
        Some(path) => load_position(path)?,
        None => Board::standard(),
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(games = args.games, max_plies = args.max_plies, seed = ?args.seed, "starting playouts");

    let mut summary = Summary::default();
    for index in 0..args.games {
        let (outcome, plies) = play_game(&start, args.max_plies, &mut rng);
        summary.games += 1;
        summary.total_plies += u64::from(plies);
        summary.longest_game = summary.longest_game.max(plies);
        match outcome {
            Outcome::Won(Side::Orange) => summary.orange_wins += 1,
            Outcome::Won(Side::Green) => summary.green_wins += 1,
            Outcome::Stalled => summary.stalled += 1,
            Outcome::Unfinished => summary.unfinished += 1,
        }
        debug!(game = index + 1, plies, "game finished");
    }

    let mut out = std::io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &summary)?;
        writeln!(out)?;
    } else {
        let average = if summary.games > 0 {
            summary.total_plies as f64 / summary.games as f64
        } else {
            0.0
        };
        writeln!(out, "=== Random playouts ({} games, max {} plies) ===", summary.games, args.max_plies)?;
        writeln!(out, "  Orange wins: {}", summary.orange_wins)?;
        writeln!(out, "  Green wins:  {}", summary.green_wins)?;
        writeln!(out, "  Unfinished:  {}", summary.unfinished)?;
        writeln!(out, "  Stalled:     {}", summary.stalled)?;
        writeln!(out, "  Average length: {average:.1} plies, longest {}", summary.longest_game)?;
    }
    Ok(())
}
