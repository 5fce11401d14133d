use thiserror::Error;

use crate::side::Side;

/// Reasons a textual position is rejected. No partial board is ever built
/// from a position that fails to load.
#[derive(Debug, Error)]
pub enum PositionError {
    #[error("position ends after {0} rows, expected 7")]
    MissingRows(usize),
    #[error("row {row} has {found} tokens, expected 7")]
    RowLength { row: usize, found: usize },
    #[error("unknown token `{token}` in row {row}, column {column}")]
    UnknownToken {
        row: usize,
        column: usize,
        token: String,
    },
    #[error("there is no {0} chief in the position")]
    MissingChief(Side),
    #[error("{0} has more than one chief")]
    DuplicateChief(Side),
    #[error("there is no next move maker")]
    MissingMover,
    #[error("invalid next move maker `{0}`")]
    InvalidMover(String),
    #[error("could not read position: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCoordinateError {
    #[error("`{0}` is not a square between a7 and g1")]
    UnknownSquare(String),
    #[error("tile index {0} is off the board")]
    OutOfRange(usize),
}
