use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::geometry::Coordinate;
use crate::movegen;
use crate::moves::Move;
use crate::side::Side;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Advancer,
    Chief,
    Excel,
    Tercel,
    Trident,
}

impl PieceKind {
    pub const ALL: [PieceKind; 5] = [
        PieceKind::Advancer,
        PieceKind::Chief,
        PieceKind::Excel,
        PieceKind::Tercel,
        PieceKind::Trident,
    ];

    /// Uppercase display letter. Trident is `R`, not `T`, which belongs to Tercel.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Advancer => 'A',
            PieceKind::Chief => 'C',
            PieceKind::Excel => 'E',
            PieceKind::Tercel => 'T',
            PieceKind::Trident => 'R',
        }
    }

    pub fn from_letter(letter: char) -> Option<PieceKind> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.letter() == letter.to_ascii_uppercase())
    }

    /// Relative worth, used to order captured pieces.
    pub fn value(self) -> u32 {
        match self {
            PieceKind::Advancer => 1,
            PieceKind::Chief => 10,
            PieceKind::Excel => 5,
            PieceKind::Tercel => 3,
            PieceKind::Trident => 2,
        }
    }

    pub fn is_chief(self) -> bool {
        self == PieceKind::Chief
    }

    /// Only these kinds carry a meaningful travel flag.
    pub fn is_directional(self) -> bool {
        matches!(self, PieceKind::Advancer | PieceKind::Trident)
    }

    /// The Excel/Tercel exchange applied on transformation plies; other kinds
    /// are returned unchanged.
    pub fn transformed(self) -> PieceKind {
        match self {
            PieceKind::Excel => PieceKind::Tercel,
            PieceKind::Tercel => PieceKind::Excel,
            other => other,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Which way a directional piece is currently heading relative to its side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Travel {
    #[default]
    Forward,
    Reversed,
}

impl Travel {
    pub fn sign(self) -> i32 {
        match self {
            Travel::Forward => 1,
            Travel::Reversed => -1,
        }
    }

    pub fn flipped(self) -> Travel {
        match self {
            Travel::Forward => Travel::Reversed,
            Travel::Reversed => Travel::Forward,
        }
    }
}

/// An immutable piece on a specific tile. Moving, transforming or turning a
/// piece always produces a new value.
///
/// Two pieces are equal when they share position, kind and side; the travel
/// flag does not take part in identity.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Piece {
    position: Coordinate,
    side: Side,
    kind: PieceKind,
    travel: Travel,
}

impl Piece {
    pub fn new(kind: PieceKind, side: Side, position: Coordinate) -> Piece {
        Piece {
            position,
            side,
            kind,
            travel: Travel::Forward,
        }
    }

    /// Same piece with an explicit travel flag. Non-directional kinds always
    /// stay `Forward`.
    pub fn with_travel(self, travel: Travel) -> Piece {
        let travel = if self.kind.is_directional() {
            travel
        } else {
            Travel::Forward
        };
        Piece { travel, ..self }
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn travel(&self) -> Travel {
        self.travel
    }

    /// Combined sign of side and travel flag for forward offsets.
    pub fn heading(&self) -> i32 {
        self.side.direction() * self.travel.sign()
    }

    pub fn value(&self) -> u32 {
        self.kind.value()
    }

    /// Tile letter: uppercase for Orange, lowercase for Green.
    pub fn letter(&self) -> char {
        match self.side {
            Side::Orange => self.kind.letter(),
            Side::Green => self.kind.letter().to_ascii_lowercase(),
        }
    }

    /// The piece after moving to `destination`; side, kind and travel carry over.
    pub fn moved_copy(&self, destination: Coordinate) -> Piece {
        Piece {
            position: destination,
            ..*self
        }
    }

    /// The piece after a transformation ply (Excel and Tercel swap kinds).
    pub fn transformed(&self) -> Piece {
        Piece {
            kind: self.kind.transformed(),
            ..*self
        }
    }

    /// The piece with its travel flag turned around.
    pub fn reversed(&self) -> Piece {
        self.with_travel(self.travel.flipped())
    }

    /// True when a directional piece stands on the edge row it was heading
    /// towards, i.e. it must turn around.
    pub fn reached_far_edge(&self) -> bool {
        if !self.kind.is_directional() {
            return false;
        }
        if self.heading() > 0 {
            self.position.is_seventh_row()
        } else {
            self.position.is_first_row()
        }
    }

    pub fn legal_moves(&self, board: &Board) -> Vec<Move> {
        movegen::legal_moves(self, board)
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.kind == other.kind && self.side == other.side
    }
}

impl Eq for Piece {}

impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.side.hash(state);
        self.position.hash(state);
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.letter())
    }
}
