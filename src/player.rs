use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::moves::Move;
use crate::piece::Piece;
use crate::side::Side;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveStatus {
    Done,
    IllegalMove,
}

impl MoveStatus {
    pub fn is_done(self) -> bool {
        self == MoveStatus::Done
    }
}

/// Outcome of asking a player to make a move: the board that is now current
/// (the original one when the move was rejected), the move and its status.
#[derive(Clone, Debug)]
pub struct MoveTransition {
    pub board: Board,
    pub mv: Move,
    pub status: MoveStatus,
}

/// Per-side move counters for one game. Each side starts at zero and counts
/// only its own moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plies {
    pub orange: u32,
    pub green: u32,
}

impl Plies {
    pub fn get(&self, side: Side) -> u32 {
        side.choose(self.orange, self.green)
    }

    /// Count one more move for `side` and return the new total.
    pub fn advance(&mut self, side: Side) -> u32 {
        let count = side.choose(&mut self.orange, &mut self.green);
        *count += 1;
        *count
    }
}

/// One side's view of a board: its legal moves and whether its chief is
/// still standing. Built together with the board and never outlives it.
#[derive(Clone, Debug)]
pub struct Player {
    side: Side,
    legal_moves: Vec<Move>,
    chief: Option<Piece>,
}

impl Player {
    pub(crate) fn empty(side: Side) -> Player {
        Player {
            side,
            legal_moves: Vec::new(),
            chief: None,
        }
    }

    pub(crate) fn new(side: Side, legal_moves: Vec<Move>, active_pieces: &[Piece]) -> Player {
        let chief = active_pieces.iter().find(|p| p.kind().is_chief()).copied();
        Player {
            side,
            legal_moves,
            chief,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    pub fn active_pieces<'a>(&self, board: &'a Board) -> &'a [Piece] {
        board.pieces(self.side)
    }

    pub fn opponent<'a>(&self, board: &'a Board) -> &'a Player {
        board.player(self.side.opponent())
    }

    pub fn chief(&self) -> Option<&Piece> {
        self.chief.as_ref()
    }

    pub fn is_chief_captured(&self) -> bool {
        self.chief.is_none()
    }

    pub fn is_move_legal(&self, mv: &Move) -> bool {
        self.legal_moves.contains(mv)
    }

    /// Validate `mv` against this side's legal moves and, if it is one of
    /// them, count the ply and build the next board. `board` must be the
    /// board this player was built for.
    ///
    /// A rejected move leaves both the board and the counters untouched.
    pub fn make_move(&self, board: &Board, mv: &Move, plies: &mut Plies) -> MoveTransition {
        debug_assert!(
            std::ptr::eq(board.player(self.side), self),
            "player used with a board it was not built for"
        );
        if board.mover() != self.side || !self.is_move_legal(mv) {
            debug!(side = %self.side, mv = %mv, "illegal move rejected");
            return MoveTransition {
                board: board.clone(),
                mv: *mv,
                status: MoveStatus::IllegalMove,
            };
        }

        let ply = plies.advance(self.side);
        MoveTransition {
            board: mv.execute(board, ply),
            mv: *mv,
            status: MoveStatus::Done,
        }
    }
}
