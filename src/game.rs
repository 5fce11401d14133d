// =============================================================================
// Game session
//
// Owns everything that outlives a single board: the per-side ply counters,
// the linear move log, the pieces each side has lost, and the result. Boards
// themselves stay immutable; every committed move swaps in a new one.
// =============================================================================

use std::path::Path;

use tracing::{debug, info};

use crate::board::Board;
use crate::error::PositionError;
use crate::geometry::Coordinate;
use crate::moves::Move;
use crate::piece::Piece;
use crate::player::{MoveStatus, Plies};
use crate::position;
use crate::side::Side;

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    plies: Plies,
    history: Vec<Move>,
    captured_orange: Vec<Piece>,
    captured_green: Vec<Piece>,
    winner: Option<Side>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A fresh game from the standard opening.
    pub fn new() -> Game {
        Game::from_board(Board::standard())
    }

    /// A fresh game from any position. Counters start at zero and the log is
    /// empty regardless of how the position came about.
    pub fn from_board(board: Board) -> Game {
        // A loaded position may already be decided.
        let winner = if board.current_player().is_chief_captured() {
            Some(board.mover().opponent())
        } else {
            None
        };
        Game {
            board,
            plies: Plies::default(),
            history: Vec::new(),
            captured_orange: Vec::new(),
            captured_green: Vec::new(),
            winner,
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Game, PositionError> {
        Ok(Game::from_board(position::load_position(path)?))
    }

    pub fn from_position(text: &str) -> Result<Game, PositionError> {
        Ok(Game::from_board(position::parse_position(text)?))
    }

    /// Replace this game with the standard opening.
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn plies(&self) -> Plies {
        self.plies
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Pieces `side` has lost, most valuable first.
    pub fn captured(&self, side: Side) -> Vec<Piece> {
        let mut pieces = side.choose(&self.captured_orange, &self.captured_green).clone();
        pieces.sort_by(|a, b| b.value().cmp(&a.value()));
        pieces
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Ask the side to move to play `mv`. On success the new board becomes
    /// current; the game ends once the side now to move has no chief.
    pub fn make_move(&mut self, mv: Move) -> MoveStatus {
        if self.is_over() {
            debug!(mv = %mv, "game is over, move ignored");
            return MoveStatus::IllegalMove;
        }
        let transition = self
            .board
            .current_player()
            .make_move(&self.board, &mv, &mut self.plies);
        if !transition.status.is_done() {
            return transition.status;
        }

        let mover = self.board.mover();
        if let Some(captured) = mv.captured() {
            captured
                .side()
                .choose(&mut self.captured_orange, &mut self.captured_green)
                .push(*captured);
        }
        self.history.push(mv);
        self.board = transition.board;

        if self.board.current_player().is_chief_captured() {
            info!(winner = %mover, moves = self.history.len(), "chief captured, game over");
            self.winner = Some(mover);
        }
        transition.status
    }

    /// Resolve `from`/`to` against the current board and play the result.
    pub fn try_move(&mut self, from: Coordinate, to: Coordinate) -> MoveStatus {
        let mv = Move::resolve(&self.board, from, to);
        if mv.is_null() {
            debug!(%from, %to, "no legal move between these tiles");
            return MoveStatus::IllegalMove;
        }
        self.make_move(mv)
    }

    /// The current position in position-file format.
    pub fn save(&self) -> String {
        position::save_position(&self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceKind;

    fn at(notation: &str) -> Coordinate {
        notation.parse().unwrap()
    }

    fn play(game: &mut Game, moves: &[(&str, &str)]) {
        for &(from, to) in moves {
            assert_eq!(
                game.try_move(at(from), at(to)),
                MoveStatus::Done,
                "{from}{to} should be legal"
            );
        }
    }

    fn kinds(board: &Board, side: Side, wanted: PieceKind) -> usize {
        board.pieces(side).iter().filter(|p| p.kind() == wanted).count()
    }

    #[test]
    fn new_game_starts_at_ply_zero() {
        let game = Game::new();
        assert_eq!(game.plies(), Plies::default());
        assert_eq!(game.board().mover(), Side::Green);
        assert!(game.history().is_empty());
        assert!(!game.is_over());
    }

    #[test]
    fn third_own_move_swaps_the_movers_excels_and_tercels() {
        let mut game = Game::new();
        play(
            &mut game,
            &[("a2", "a3"), ("a6", "a5"), ("b2", "b3"), ("b6", "b5")],
        );
        let before = game.board().clone();
        let green_excels: Vec<Coordinate> = before
            .pieces(Side::Green)
            .iter()
            .filter(|p| p.kind() == PieceKind::Excel)
            .map(|p| p.position())
            .collect();

        play(&mut game, &[("c2", "c3")]);
        assert_eq!(game.plies().green, 3);
        assert_eq!(game.plies().orange, 2);
        let after = game.board();
        for position in green_excels {
            assert_eq!(after.tile(position).piece().map(|p| p.kind()), Some(PieceKind::Tercel));
        }
        assert_eq!(kinds(after, Side::Green, PieceKind::Excel), 2);
        assert_eq!(kinds(after, Side::Green, PieceKind::Tercel), 2);
        assert_eq!(after.tile(at("a1")).piece().map(|p| p.kind()), Some(PieceKind::Excel));
        // Orange untouched
        assert_eq!(after.tile(at("a7")).piece().map(|p| p.kind()), Some(PieceKind::Tercel));
        assert_eq!(after.tile(at("b7")).piece().map(|p| p.kind()), Some(PieceKind::Excel));

        // Orange's own third move swaps Orange only
        play(&mut game, &[("c6", "c5")]);
        let after = game.board();
        assert_eq!(after.tile(at("a7")).piece().map(|p| p.kind()), Some(PieceKind::Excel));
        assert_eq!(after.tile(at("a1")).piece().map(|p| p.kind()), Some(PieceKind::Excel));
    }

    #[test]
    fn counters_belong_to_one_game() {
        let mut first = Game::new();
        play(&mut first, &[("a2", "a3"), ("a6", "a5")]);
        let second = Game::new();
        assert_eq!(second.plies(), Plies::default());
        first.reset();
        assert_eq!(first.plies(), Plies::default());
        assert!(first.history().is_empty());
    }

    #[test]
    fn illegal_requests_change_nothing() {
        let mut game = Game::new();
        assert_eq!(game.try_move(at("a2"), at("a5")), MoveStatus::IllegalMove);
        // orange piece while green is to move
        assert_eq!(game.try_move(at("a6"), at("a5")), MoveStatus::IllegalMove);
        assert_eq!(game.plies(), Plies::default());
        assert_eq!(game.board().mover(), Side::Green);
    }

    #[test]
    fn capture_is_logged_and_counted() {
        let text = "\
- - - C - - -
- - - - - - -
- - E - - - -
- - - - - - -
- - - - r - -
- - - - - - -
- - - c - - -
O
";
        let mut game = Game::from_position(text).unwrap();
        play(&mut game, &[("c5", "e3")]);
        assert_eq!(game.history().len(), 1);
        assert!(game.history()[0].is_attack());
        assert_eq!(game.history()[0].to_string(), "Exe3");
        let lost = game.captured(Side::Green);
        assert_eq!(lost.len(), 1);
        assert_eq!(lost[0].kind(), PieceKind::Trident);
        assert_eq!(game.board().pieces(Side::Green).len(), 1);
        assert!(!game.is_over());
    }

    #[test]
    fn capturing_the_chief_ends_the_game() {
        let text = "\
- - - C - - -
- - - r - - -
- - - - - - -
- - - - - - -
- - - - - - -
- - - - - - -
- - - c - - -
G
";
        let mut game = Game::from_position(text).unwrap();
        let status = game.try_move(at("d6"), at("d7"));
        assert_eq!(status, MoveStatus::Done);
        assert_eq!(game.winner(), Some(Side::Green));
        assert!(game.board().current_player().is_chief_captured());
        assert_eq!(game.board().current_player().side(), Side::Orange);
        assert!(game.history()[0].is_attack());
        let lost = game.captured(Side::Orange);
        assert_eq!(lost.len(), 1);
        assert_eq!(lost[0].kind(), PieceKind::Chief);
        assert!(!game.board().pieces(Side::Orange).iter().any(|p| p.kind().is_chief()));

        // nothing more can be played
        assert_eq!(game.try_move(at("d1"), at("d2")), MoveStatus::IllegalMove);
    }

    #[test]
    fn captured_pieces_are_sorted_by_value() {
        let mut game = Game::new();
        game.captured_green.push(Piece::new(PieceKind::Advancer, Side::Green, at("a1")));
        game.captured_green.push(Piece::new(PieceKind::Excel, Side::Green, at("b1")));
        game.captured_green.push(Piece::new(PieceKind::Trident, Side::Green, at("c1")));
        let kinds: Vec<PieceKind> = game.captured(Side::Green).iter().map(|p| p.kind()).collect();
        assert_eq!(kinds, vec![PieceKind::Excel, PieceKind::Trident, PieceKind::Advancer]);
    }

    #[test]
    fn save_reflects_the_current_position() {
        let mut game = Game::new();
        play(&mut game, &[("d2", "d4")]);
        let reloaded = Game::from_position(&game.save()).unwrap();
        assert_eq!(reloaded.board().mover(), Side::Orange);
        assert_eq!(
            reloaded.board().tile(at("d4")).piece().map(|p| p.side()),
            Some(Side::Green)
        );
    }
}
