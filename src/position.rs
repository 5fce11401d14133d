// =============================================================================
// Position files
//
// Seven lines of seven whitespace-separated tokens, top row first, then one
// line naming the side to move:
//
//     T  E  R  C  R  E  T
//     A  A  A  A  A  A  A
//     -  -  -  -  -  -  -
//     -  -  -  -  -  -  -
//     -  -  -  -  -  -  -
//     a  a  a  a  a  a  a
//     t  e  r  c  r  e  t
//   G
//
// Uppercase letters are Orange, lowercase Green, `-` is an empty tile. Only
// placement and mover are stored: loaded pieces start with forward travel.
// =============================================================================

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::board::Board;
use crate::error::PositionError;
use crate::geometry::{Coordinate, TILES_PER_ROW};
use crate::piece::{Piece, PieceKind};
use crate::side::Side;

pub const EMPTY_TOKEN: &str = "-";

/// Parse a position. Nothing is built unless the whole text is valid.
pub fn parse_position(text: &str) -> Result<Board, PositionError> {
    let mut lines = text.lines();
    let mut builder = Board::builder(Side::Green);
    let mut orange_chiefs = 0;
    let mut green_chiefs = 0;

    for row in 0..TILES_PER_ROW {
        let line = lines.next().ok_or(PositionError::MissingRows(row))?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != TILES_PER_ROW {
            return Err(PositionError::RowLength {
                row: row + 1,
                found: tokens.len(),
            });
        }
        for (column, token) in tokens.into_iter().enumerate() {
            let Some(piece) = parse_token(token, row, column)? else {
                continue;
            };
            if piece.kind().is_chief() {
                match piece.side() {
                    Side::Orange => orange_chiefs += 1,
                    Side::Green => green_chiefs += 1,
                }
            }
            builder.set_piece(piece);
        }
    }

    for (side, chiefs) in [(Side::Green, green_chiefs), (Side::Orange, orange_chiefs)] {
        match chiefs {
            0 => return Err(PositionError::MissingChief(side)),
            1 => {}
            _ => return Err(PositionError::DuplicateChief(side)),
        }
    }

    let marker = lines.next().ok_or(PositionError::MissingMover)?.trim();
    let mover = match marker {
        "G" => Side::Green,
        "O" => Side::Orange,
        other => return Err(PositionError::InvalidMover(other.to_string())),
    };
    builder.set_mover(mover);

    debug!(%mover, "position parsed");
    Ok(builder.build())
}

fn parse_token(token: &str, row: usize, column: usize) -> Result<Option<Piece>, PositionError> {
    if token == EMPTY_TOKEN {
        return Ok(None);
    }
    let unknown = || PositionError::UnknownToken {
        row: row + 1,
        column: column + 1,
        token: token.to_string(),
    };

    let mut chars = token.chars();
    let (Some(letter), None) = (chars.next(), chars.next()) else {
        return Err(unknown());
    };
    let kind = PieceKind::from_letter(letter).ok_or_else(unknown)?;
    let side = if letter.is_ascii_uppercase() {
        Side::Orange
    } else {
        Side::Green
    };
    let position = Coordinate::ALL[row * TILES_PER_ROW + column];
    Ok(Some(Piece::new(kind, side, position)))
}

/// Render a board's placement and mover in the format `parse_position` reads.
pub fn save_position(board: &Board) -> String {
    format!("{board}{}", board.mover().marker())
}

pub fn load_position(path: impl AsRef<Path>) -> Result<Board, PositionError> {
    let text = fs::read_to_string(path)?;
    parse_position(&text)
}

pub fn write_position(board: &Board, path: impl AsRef<Path>) -> Result<(), PositionError> {
    fs::write(path, save_position(board))?;
    Ok(())
}
