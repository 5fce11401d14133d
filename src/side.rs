use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Orange,
    Green,
}

impl Side {
    /// Sign applied to forward offsets: Orange advances towards higher
    /// indices (down the board), Green towards lower ones.
    pub fn direction(self) -> i32 {
        match self {
            Side::Orange => 1,
            Side::Green => -1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Orange => Side::Green,
            Side::Green => Side::Orange,
        }
    }

    pub fn is_orange(self) -> bool {
        self == Side::Orange
    }

    pub fn is_green(self) -> bool {
        self == Side::Green
    }

    /// Pick whichever of the two values belongs to this side.
    pub fn choose<T>(self, orange: T, green: T) -> T {
        match self {
            Side::Orange => orange,
            Side::Green => green,
        }
    }

    /// Single-letter marker used for the mover line of a position file.
    pub fn marker(self) -> char {
        match self {
            Side::Orange => 'O',
            Side::Green => 'G',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Orange => f.write_str("orange"),
            Side::Green => f.write_str("green"),
        }
    }
}
