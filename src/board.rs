use std::fmt;

use crate::geometry::{Coordinate, NUM_TILES, TILES_PER_ROW};
use crate::moves::Move;
use crate::piece::{Piece, PieceKind};
use crate::player::Player;
use crate::side::Side;
use crate::tile::Tile;

/// An immutable snapshot of the game. Both sides' active pieces and legal
/// moves are derived once, when the board is built, and never change.
#[derive(Clone, Debug)]
pub struct Board {
    tiles: [Tile; NUM_TILES],
    orange_pieces: Vec<Piece>,
    green_pieces: Vec<Piece>,
    orange_player: Player,
    green_player: Player,
    mover: Side,
}

/// Collects a placement and the side to move; the only way to make a `Board`.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    placement: [Option<Piece>; NUM_TILES],
    mover: Side,
}

impl BoardBuilder {
    /// Put a piece on its own position, replacing whatever was there.
    pub fn set_piece(&mut self, piece: Piece) -> &mut Self {
        self.placement[piece.position().index()] = Some(piece);
        self
    }

    pub fn set_mover(&mut self, mover: Side) -> &mut Self {
        self.mover = mover;
        self
    }

    pub fn build(&self) -> Board {
        Board::new(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    pub fn builder(mover: Side) -> BoardBuilder {
        BoardBuilder {
            placement: [None; NUM_TILES],
            mover,
        }
    }

    fn new(builder: &BoardBuilder) -> Board {
        let tiles: [Tile; NUM_TILES] =
            std::array::from_fn(|i| Tile::new(Coordinate::ALL[i], builder.placement[i]));
        let orange_pieces = active_pieces(&tiles, Side::Orange);
        let green_pieces = active_pieces(&tiles, Side::Green);
        debug_assert!(
            chief_count(&orange_pieces) <= 1 && chief_count(&green_pieces) <= 1,
            "a side may have at most one chief"
        );

        // Players need the finished tile layout to generate moves against.
        let mut board = Board {
            tiles,
            orange_pieces,
            green_pieces,
            orange_player: Player::empty(Side::Orange),
            green_player: Player::empty(Side::Green),
            mover: builder.mover,
        };
        let orange_moves = board.calculate_legal_moves(Side::Orange);
        let green_moves = board.calculate_legal_moves(Side::Green);
        board.orange_player = Player::new(Side::Orange, orange_moves, &board.orange_pieces);
        board.green_player = Player::new(Side::Green, green_moves, &board.green_pieces);
        board
    }

    /// The opening position: back ranks `T E R C R E T` behind a full row of
    /// Advancers, Orange on top, Green at the bottom. Green moves first.
    pub fn standard() -> Board {
        const BACK_RANK: [PieceKind; TILES_PER_ROW] = [
            PieceKind::Tercel,
            PieceKind::Excel,
            PieceKind::Trident,
            PieceKind::Chief,
            PieceKind::Trident,
            PieceKind::Excel,
            PieceKind::Tercel,
        ];

        let mut builder = Board::builder(Side::Green);
        for coordinate in Coordinate::all() {
            let kind = match coordinate.row() {
                0 | 6 => BACK_RANK[coordinate.column()],
                1 | 5 => PieceKind::Advancer,
                _ => continue,
            };
            let side = if coordinate.row() < 2 { Side::Orange } else { Side::Green };
            builder.set_piece(Piece::new(kind, side, coordinate));
        }
        builder.build()
    }

    fn calculate_legal_moves(&self, side: Side) -> Vec<Move> {
        self.pieces(side)
            .iter()
            .flat_map(|piece| piece.legal_moves(self))
            .collect()
    }

    pub fn tile(&self, coordinate: Coordinate) -> &Tile {
        &self.tiles[coordinate.index()]
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Pieces of one side in row-major order.
    pub fn pieces(&self, side: Side) -> &[Piece] {
        side.choose(&self.orange_pieces, &self.green_pieces)
    }

    pub fn mover(&self) -> Side {
        self.mover
    }

    pub fn player(&self, side: Side) -> &Player {
        side.choose(&self.orange_player, &self.green_player)
    }

    pub fn orange_player(&self) -> &Player {
        &self.orange_player
    }

    pub fn green_player(&self) -> &Player {
        &self.green_player
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.mover)
    }

    /// Orange's legal moves followed by Green's.
    pub fn all_legal_moves(&self) -> impl Iterator<Item = &Move> {
        self.orange_player
            .legal_moves()
            .iter()
            .chain(self.green_player.legal_moves())
    }
}

fn active_pieces(tiles: &[Tile], side: Side) -> Vec<Piece> {
    tiles
        .iter()
        .filter_map(Tile::piece)
        .filter(|piece| piece.side() == side)
        .copied()
        .collect()
}

fn chief_count(pieces: &[Piece]) -> usize {
    pieces.iter().filter(|p| p.kind().is_chief()).count()
}

/// Seven lines of seven tiles, each right-aligned in a three-character cell.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(TILES_PER_ROW) {
            for tile in row {
                write!(f, "{:>3}", tile.to_string())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
