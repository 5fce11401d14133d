// =============================================================================
// Board geometry
//
// The board is 7×7, addressed by a single row-major index 0..49. Row 0 is
// Orange's back rank ("a7".."g7"), row 6 is Green's back rank ("a1".."g1").
// Pieces move by adding signed offsets to that index, so every rule that can
// cross a left/right edge consults the column masks below before stepping.
// =============================================================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseCoordinateError;

/// Number of tiles on the board.
pub const NUM_TILES: usize = 49;

/// Number of tiles in one row (and one column).
pub const TILES_PER_ROW: usize = 7;

/// Tiles in the leftmost column (file a).
pub const FIRST_COLUMN: [bool; NUM_TILES] = column_mask(0);

/// Tiles in the rightmost column (file g).
pub const SEVENTH_COLUMN: [bool; NUM_TILES] = column_mask(TILES_PER_ROW - 1);

/// Tiles in the top row, indices 0..7.
pub const FIRST_ROW: [bool; NUM_TILES] = row_mask(0);

/// Tiles in the bottom row, indices 42..49.
pub const SEVENTH_ROW: [bool; NUM_TILES] = row_mask(TILES_PER_ROW - 1);

/// Algebraic names for every coordinate, top row first.
pub const ALGEBRAIC_NOTATION: [&str; NUM_TILES] = [
    "a7", "b7", "c7", "d7", "e7", "f7", "g7",
    "a6", "b6", "c6", "d6", "e6", "f6", "g6",
    "a5", "b5", "c5", "d5", "e5", "f5", "g5",
    "a4", "b4", "c4", "d4", "e4", "f4", "g4",
    "a3", "b3", "c3", "d3", "e3", "f3", "g3",
    "a2", "b2", "c2", "d2", "e2", "f2", "g2",
    "a1", "b1", "c1", "d1", "e1", "f1", "g1",
];

const fn column_mask(column: usize) -> [bool; NUM_TILES] {
    let mut mask = [false; NUM_TILES];
    let mut i = column;
    while i < NUM_TILES {
        mask[i] = true;
        i += TILES_PER_ROW;
    }
    mask
}

const fn row_mask(row: usize) -> [bool; NUM_TILES] {
    let mut mask = [false; NUM_TILES];
    let mut i = row * TILES_PER_ROW;
    while i < (row + 1) * TILES_PER_ROW {
        mask[i] = true;
        i += 1;
    }
    mask
}

const fn all_coordinates() -> [Coordinate; NUM_TILES] {
    let mut all = [Coordinate(0); NUM_TILES];
    let mut i = 0;
    while i < NUM_TILES {
        all[i] = Coordinate(i as u8);
        i += 1;
    }
    all
}

/// True when `candidate` names a tile on the board.
pub fn is_valid_coordinate(candidate: i32) -> bool {
    (0..NUM_TILES as i32).contains(&candidate)
}

/// A tile index that is always on the board (`0 <= c < 49`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Coordinate(u8);

impl Coordinate {
    pub fn new(index: usize) -> Option<Coordinate> {
        if index < NUM_TILES {
            Some(Coordinate(index as u8))
        } else {
            None
        }
    }

    /// Build a coordinate from a possibly out-of-range candidate index.
    pub fn from_candidate(candidate: i32) -> Option<Coordinate> {
        if is_valid_coordinate(candidate) {
            Some(Coordinate(candidate as u8))
        } else {
            None
        }
    }

    /// Every coordinate in row-major order.
    pub const ALL: [Coordinate; NUM_TILES] = all_coordinates();

    pub fn all() -> impl Iterator<Item = Coordinate> {
        Coordinate::ALL.into_iter()
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> usize {
        self.index() / TILES_PER_ROW
    }

    pub fn column(self) -> usize {
        self.index() % TILES_PER_ROW
    }

    /// Raw index arithmetic. Callers are responsible for edge exclusion;
    /// this only rejects results that leave the 0..49 range.
    pub fn offset(self, delta: i32) -> Option<Coordinate> {
        Coordinate::from_candidate(self.0 as i32 + delta)
    }

    pub fn is_first_column(self) -> bool {
        FIRST_COLUMN[self.index()]
    }

    pub fn is_seventh_column(self) -> bool {
        SEVENTH_COLUMN[self.index()]
    }

    pub fn is_first_row(self) -> bool {
        FIRST_ROW[self.index()]
    }

    pub fn is_seventh_row(self) -> bool {
        SEVENTH_ROW[self.index()]
    }

    pub fn notation(self) -> &'static str {
        ALGEBRAIC_NOTATION[self.index()]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALGEBRAIC_NOTATION
            .iter()
            .position(|&name| name == s)
            .map(|i| Coordinate(i as u8))
            .ok_or_else(|| ParseCoordinateError::UnknownSquare(s.to_string()))
    }
}

impl TryFrom<u8> for Coordinate {
    type Error = ParseCoordinateError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Coordinate::new(index as usize).ok_or(ParseCoordinateError::OutOfRange(index as usize))
    }
}

impl From<Coordinate> for u8 {
    fn from(c: Coordinate) -> u8 {
        c.0
    }
}
