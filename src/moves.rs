use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::geometry::Coordinate;
use crate::piece::Piece;

/// Every n-th move a side makes swaps all of its Excels and Tercels.
pub const TRANSFORM_PERIOD: u32 = 3;

/// True when a side's own move counter (after incrementing) lands on a
/// transformation ply: its 3rd, 6th, 9th, ... move.
pub fn is_transformation_ply(ply: u32) -> bool {
    ply % TRANSFORM_PERIOD == 0
}

/// A candidate relocation of one piece.
///
/// `Null` is the sentinel returned when no legal move matches a requested
/// source and destination; it must never be executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Major {
        piece: Piece,
        destination: Coordinate,
    },
    Attack {
        piece: Piece,
        destination: Coordinate,
        captured: Piece,
    },
    Null,
}

impl Move {
    pub fn major(piece: Piece, destination: Coordinate) -> Move {
        Move::Major { piece, destination }
    }

    pub fn attack(piece: Piece, destination: Coordinate, captured: Piece) -> Move {
        Move::Attack {
            piece,
            destination,
            captured,
        }
    }

    /// Find the legal move of either side that goes from `source` to
    /// `destination`, or `Move::Null` when there is none.
    pub fn resolve(board: &Board, source: Coordinate, destination: Coordinate) -> Move {
        board
            .all_legal_moves()
            .find(|m| m.source() == Some(source) && m.destination() == Some(destination))
            .copied()
            .unwrap_or(Move::Null)
    }

    pub fn moved_piece(&self) -> Option<&Piece> {
        match self {
            Move::Major { piece, .. } | Move::Attack { piece, .. } => Some(piece),
            Move::Null => None,
        }
    }

    pub fn source(&self) -> Option<Coordinate> {
        self.moved_piece().map(Piece::position)
    }

    pub fn destination(&self) -> Option<Coordinate> {
        match self {
            Move::Major { destination, .. } | Move::Attack { destination, .. } => {
                Some(*destination)
            }
            Move::Null => None,
        }
    }

    pub fn captured(&self) -> Option<&Piece> {
        match self {
            Move::Attack { captured, .. } => Some(captured),
            _ => None,
        }
    }

    pub fn is_attack(&self) -> bool {
        matches!(self, Move::Attack { .. })
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Move::Null)
    }

    /// Build the board that follows this move. `ply` is the moving side's own
    /// move count including this move.
    ///
    /// Panics on `Move::Null`: reaching it means a caller skipped validation.
    pub fn execute(&self, board: &Board, ply: u32) -> Board {
        let (piece, destination) = match self {
            Move::Major { piece, destination } | Move::Attack { piece, destination, .. } => {
                (piece, *destination)
            }
            Move::Null => panic!("the null move cannot be executed"),
        };
        let mover = piece.side();
        let transform = is_transformation_ply(ply);
        if transform {
            debug!(side = %mover, ply, "excel and tercel pieces transform");
        }

        let mut builder = Board::builder(mover.opponent());
        for other in board.pieces(mover).iter().filter(|&other| other != piece) {
            if transform {
                builder.set_piece(other.transformed());
            } else {
                builder.set_piece(*other);
            }
        }
        // A captured piece is overwritten when the mover lands on its tile.
        for opposing in board.pieces(mover.opponent()) {
            builder.set_piece(*opposing);
        }

        let moved = piece.moved_copy(destination);
        let moved = if transform { moved.transformed() } else { moved };
        let moved = if moved.reached_far_edge() {
            debug!(piece = %moved, at = %destination, "travel direction flips");
            moved.reversed()
        } else {
            moved
        };
        builder.set_piece(moved);

        builder.build()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Major { piece, destination } => {
                write!(f, "{}{}", piece.kind().letter(), destination)
            }
            Move::Attack {
                piece, destination, ..
            } => write!(f, "{piece}x{destination}"),
            Move::Null => f.write_str("--"),
        }
    }
}
