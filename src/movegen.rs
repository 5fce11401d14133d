// =============================================================================
// Legal-move rules, one function per piece kind.
//
// Every rule works on raw index offsets: a candidate is the piece's index plus
// an offset, rejected when it leaves 0..49. Offsets that move left or right
// would silently wrap into the neighbouring row at the board edge, so they are
// filtered by `crosses_edge` before they are taken.
//
// Offset map around a tile:
//   -8 -7 -6
//   -1  X +1
//   +6 +7 +8
// =============================================================================

use crate::board::Board;
use crate::geometry::{Coordinate, TILES_PER_ROW};
use crate::moves::Move;
use crate::piece::{Piece, PieceKind};

const ROW: i32 = TILES_PER_ROW as i32;

const CHIEF_OFFSETS: [i32; 8] = [-8, -7, -6, -1, 1, 6, 7, 8];
const EXCEL_VECTORS: [i32; 4] = [-8, -6, 6, 8];
const TERCEL_VECTORS: [i32; 4] = [-7, -1, 1, 7];
const TRIDENT_VECTORS: [i32; 2] = [-1, 1];

pub fn legal_moves(piece: &Piece, board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    match piece.kind() {
        PieceKind::Advancer => advancer_moves(piece, board, &mut moves),
        PieceKind::Chief => chief_moves(piece, board, &mut moves),
        PieceKind::Excel => sliding_moves(piece, board, &EXCEL_VECTORS, &mut moves),
        PieceKind::Tercel => sliding_moves(piece, board, &TERCEL_VECTORS, &mut moves),
        PieceKind::Trident => trident_moves(piece, board, &mut moves),
    }
    moves
}

/// Offsets heading west (-8, -1, +6) from file a, or east (-6, +1, +8) from
/// file g, would land on the far side of the adjacent row.
fn crosses_edge(position: Coordinate, offset: i32) -> bool {
    (position.is_first_column() && matches!(offset, -8 | -1 | 6))
        || (position.is_seventh_column() && matches!(offset, -6 | 1 | 8))
}

/// Major onto an empty tile, Attack onto an opposing piece, nothing onto an
/// own piece.
fn step_onto(piece: &Piece, board: &Board, destination: Coordinate) -> Option<Move> {
    match board.tile(destination).piece() {
        None => Some(Move::major(*piece, destination)),
        Some(occupant) if occupant.side() != piece.side() => {
            Some(Move::attack(*piece, destination, *occupant))
        }
        Some(_) => None,
    }
}

/// One or two rows forward. Both destinations may capture; the two-row push
/// needs the tile in between to be empty.
fn advancer_moves(piece: &Piece, board: &Board, moves: &mut Vec<Move>) {
    let heading = piece.heading();
    let Some(one) = piece.position().offset(ROW * heading) else {
        return;
    };
    moves.extend(step_onto(piece, board, one));

    if board.tile(one).is_occupied() {
        return;
    }
    if let Some(two) = piece.position().offset(2 * ROW * heading) {
        moves.extend(step_onto(piece, board, two));
    }
}

fn chief_moves(piece: &Piece, board: &Board, moves: &mut Vec<Move>) {
    for &offset in &CHIEF_OFFSETS {
        if crosses_edge(piece.position(), offset) {
            continue;
        }
        if let Some(destination) = piece.position().offset(offset) {
            moves.extend(step_onto(piece, board, destination));
        }
    }
}

/// Slide along each vector until the edge or the first occupied tile, which
/// is captured when it holds an opposing piece.
fn sliding_moves(piece: &Piece, board: &Board, vectors: &[i32], moves: &mut Vec<Move>) {
    for &vector in vectors {
        let mut current = piece.position();
        loop {
            if crosses_edge(current, vector) {
                break;
            }
            let Some(destination) = current.offset(vector) else {
                break;
            };
            match board.tile(destination).piece() {
                None => moves.push(Move::major(*piece, destination)),
                Some(occupant) => {
                    if occupant.side() != piece.side() {
                        moves.push(Move::attack(*piece, destination, *occupant));
                    }
                    break;
                }
            }
            current = destination;
        }
    }
}

/// Unlimited sideways slide plus a single forward step.
fn trident_moves(piece: &Piece, board: &Board, moves: &mut Vec<Move>) {
    sliding_moves(piece, board, &TRIDENT_VECTORS, moves);
    if let Some(forward) = piece.position().offset(ROW * piece.heading()) {
        moves.extend(step_onto(piece, board, forward));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::side::Side;

    fn at(notation: &str) -> Coordinate {
        notation.parse().unwrap()
    }

    fn board_with(pieces: &[Piece]) -> Board {
        let mut builder = Board::builder(Side::Green);
        for &p in pieces {
            builder.set_piece(p);
        }
        builder.build()
    }

    fn targets(piece: &Piece, board: &Board) -> Vec<String> {
        let mut names: Vec<String> = legal_moves(piece, board)
            .iter()
            .map(|m| {
                let dest = m.destination().unwrap().to_string();
                if m.is_attack() { format!("x{dest}") } else { dest }
            })
            .collect();
        names.sort();
        names
    }

    fn expect(mut names: Vec<&str>) -> Vec<String> {
        names.sort();
        names.into_iter().map(String::from).collect()
    }

    #[test]
    fn chief_does_not_wrap_on_either_edge() {
        let left = Piece::new(PieceKind::Chief, Side::Orange, at("a4"));
        assert_eq!(
            targets(&left, &board_with(&[left])),
            expect(vec!["a5", "b5", "b4", "a3", "b3"])
        );

        let right = Piece::new(PieceKind::Chief, Side::Green, at("g4"));
        assert_eq!(
            targets(&right, &board_with(&[right])),
            expect(vec!["g5", "f5", "f4", "g3", "f3"])
        );
    }

    #[test]
    fn chief_captures_enemies_and_avoids_friends() {
        let chief = Piece::new(PieceKind::Chief, Side::Orange, at("d4"));
        let friend = Piece::new(PieceKind::Advancer, Side::Orange, at("d5"));
        let enemy = Piece::new(PieceKind::Advancer, Side::Green, at("e3"));
        let board = board_with(&[chief, friend, enemy]);
        let names = targets(&chief, &board);
        assert_eq!(names.len(), 7);
        assert!(names.contains(&"xe3".to_string()));
        assert!(!names.iter().any(|n| n.ends_with("d5")));
    }

    #[test]
    fn excel_stops_at_first_occupied_tile() {
        let excel = Piece::new(PieceKind::Excel, Side::Orange, at("d4"));
        let friend = Piece::new(PieceKind::Tercel, Side::Orange, at("f6"));
        let enemy = Piece::new(PieceKind::Chief, Side::Green, at("b2"));
        let board = board_with(&[excel, friend, enemy]);
        assert_eq!(
            targets(&excel, &board),
            expect(vec!["c5", "b6", "a7", "e5", "c3", "xb2", "e3", "f2", "g1"])
        );
    }

    #[test]
    fn excel_on_the_a_file_only_slides_east() {
        let excel = Piece::new(PieceKind::Excel, Side::Green, at("a4"));
        assert_eq!(
            targets(&excel, &board_with(&[excel])),
            expect(vec!["b5", "c6", "d7", "b3", "c2", "d1"])
        );
    }

    #[test]
    fn tercel_slides_orthogonally_without_wrapping() {
        let tercel = Piece::new(PieceKind::Tercel, Side::Orange, at("g4"));
        let names = targets(&tercel, &board_with(&[tercel]));
        assert_eq!(names.len(), 12);
        assert!(!names.contains(&"a3".to_string()));

        let blocker = Piece::new(PieceKind::Advancer, Side::Green, at("e4"));
        let board = board_with(&[tercel, blocker]);
        let names = targets(&tercel, &board);
        assert!(names.contains(&"xe4".to_string()));
        assert!(!names.contains(&"d4".to_string()));
    }

    #[test]
    fn advancer_pushes_one_or_two_rows() {
        let orange = Piece::new(PieceKind::Advancer, Side::Orange, at("c6"));
        assert_eq!(targets(&orange, &board_with(&[orange])), expect(vec!["c5", "c4"]));

        let green = Piece::new(PieceKind::Advancer, Side::Green, at("c2"));
        assert_eq!(targets(&green, &board_with(&[green])), expect(vec!["c3", "c4"]));
    }

    #[test]
    fn advancer_captures_straight_ahead_on_both_steps() {
        let advancer = Piece::new(PieceKind::Advancer, Side::Orange, at("c6"));
        let far = Piece::new(PieceKind::Excel, Side::Green, at("c4"));
        assert_eq!(
            targets(&advancer, &board_with(&[advancer, far])),
            expect(vec!["c5", "xc4"])
        );

        let diagonal = Piece::new(PieceKind::Excel, Side::Green, at("d5"));
        assert_eq!(
            targets(&advancer, &board_with(&[advancer, diagonal])),
            expect(vec!["c5", "c4"])
        );
    }

    #[test]
    fn advancer_double_push_needs_an_empty_middle_tile() {
        let advancer = Piece::new(PieceKind::Advancer, Side::Orange, at("c6"));
        let near_enemy = Piece::new(PieceKind::Excel, Side::Green, at("c5"));
        let far_enemy = Piece::new(PieceKind::Excel, Side::Green, at("c4"));
        assert_eq!(
            targets(&advancer, &board_with(&[advancer, near_enemy, far_enemy])),
            expect(vec!["xc5"])
        );

        let near_friend = Piece::new(PieceKind::Chief, Side::Orange, at("c5"));
        assert!(targets(&advancer, &board_with(&[advancer, near_friend])).is_empty());
    }

    #[test]
    fn reversed_advancer_heads_back() {
        let advancer = Piece::new(PieceKind::Advancer, Side::Orange, at("c6")).reversed();
        assert_eq!(targets(&advancer, &board_with(&[advancer])), expect(vec!["c7"]));
    }

    #[test]
    fn trident_slides_sideways_and_steps_forward() {
        let trident = Piece::new(PieceKind::Trident, Side::Orange, at("d5"));
        let friend = Piece::new(PieceKind::Advancer, Side::Orange, at("f5"));
        let enemy = Piece::new(PieceKind::Advancer, Side::Green, at("b5"));
        let board = board_with(&[trident, friend, enemy]);
        assert_eq!(targets(&trident, &board), expect(vec!["c5", "xb5", "e5", "d4"]));

        let reversed = trident.reversed();
        let board = board_with(&[reversed]);
        assert!(targets(&reversed, &board).contains(&"d6".to_string()));
    }

    #[test]
    fn no_kind_ever_jumps_an_edge() {
        for kind in PieceKind::ALL {
            for side in [Side::Orange, Side::Green] {
                for position in Coordinate::all() {
                    let piece = Piece::new(kind, side, position);
                    let board = board_with(&[piece]);
                    for m in legal_moves(&piece, &board) {
                        let dest = m.destination().unwrap();
                        let dr = dest.row() as i32 - position.row() as i32;
                        let dc = dest.column() as i32 - position.column() as i32;
                        let shape_ok = match kind {
                            PieceKind::Chief => dr.abs() <= 1 && dc.abs() <= 1,
                            PieceKind::Excel => dr.abs() == dc.abs(),
                            PieceKind::Tercel => dr == 0 || dc == 0,
                            PieceKind::Trident => dr == 0 || (dc == 0 && dr.abs() == 1),
                            PieceKind::Advancer => dc == 0 && (dr.abs() == 1 || dr.abs() == 2),
                        };
                        assert!(shape_ok, "{kind:?} {position} -> {dest} wraps the board");
                        assert_ne!(dest, position);
                    }
                }
            }
        }
    }
}
