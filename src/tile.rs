use std::fmt;

use crate::geometry::Coordinate;
use crate::piece::Piece;

/// One square of the board: its coordinate and whatever stands on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    coordinate: Coordinate,
    occupant: Option<Piece>,
}

impl Tile {
    pub fn new(coordinate: Coordinate, occupant: Option<Piece>) -> Tile {
        Tile {
            coordinate,
            occupant,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.occupant.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.occupant {
            Some(piece) => write!(f, "{}", piece.letter()),
            None => f.write_str("-"),
        }
    }
}
