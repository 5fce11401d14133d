use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use perilanda::game::Game;
use perilanda::geometry::Coordinate;
use perilanda::player::{MoveStatus, Player};
use perilanda::position::write_position;
use tracing::info;

/// Print a position and its legal moves, optionally replaying moves first.
#[derive(Parser, Debug)]
#[command(
    name = "inspect",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_TIMESTAMP"), ")")
)]
struct Args {
    /// Position file to start from; the standard opening if omitted
    position: Option<PathBuf>,

    /// Moves to play in order, each as source and destination (e.g. b2b3)
    #[arg(long, num_args = 1..)]
    moves: Vec<String>,

    /// Write the resulting position to this file
    #[arg(long)]
    save: Option<PathBuf>,

    /// List the moves of both sides, not just the side to move
    #[arg(long)]
    all: bool,
}

fn parse_pair(text: &str) -> Result<(Coordinate, Coordinate), Box<dyn Error>> {
    if text.len() != 4 || !text.is_ascii() {
        return Err(format!("expected a move like b2b3, got {text:?}").into());
    }
    let (from, to) = text.split_at(2);
    Ok((from.parse()?, to.parse()?))
}

fn print_moves(player: &Player) {
    let moves: Vec<String> = player
        .legal_moves()
        .iter()
        .map(|m| match m.source() {
            Some(from) => format!("{from}:{m}"),
            None => m.to_string(),
        })
        .collect();
    println!("{} ({} moves): {}", player.side(), moves.len(), moves.join(" "));
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
    let mut game = match &args.position {
        Some(path) => Game::load(path)?,
        None => Game::new(),
    };

    for text in &args.moves {
        let (from, to) = parse_pair(text)?;
        if game.try_move(from, to) == MoveStatus::IllegalMove {
            return Err(format!("illegal move {text} for {}", game.board().mover()).into());
        }
        info!(mv = %text, "played");
    }

    print!("{}", game.board());
    println!("{} to move", game.board().mover());
    if let Some(winner) = game.winner() {
        println!("{winner} has won");
    }
    let plies = game.plies();
    println!("plies: orange {}, green {}", plies.orange, plies.green);

    let board = game.board();
    if args.all {
        print_moves(board.orange_player());
        print_moves(board.green_player());
    } else {
        print_moves(board.current_player());
    }

    if let Some(path) = &args.save {
        write_position(game.board(), path)?;
        info!(path = %path.display(), "position saved");
    }
    Ok(())
}
