use crate::game::Game;
use crate::geometry::Coordinate;
use crate::moves::Move;
use crate::piece::Piece;
use crate::player::MoveStatus;
use crate::random::pick_random_move;
use crate::side::Side;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct TilePiece {
    kind: String,
    side: String,
    letter: char,
}

#[derive(Serialize)]
struct MoveJson {
    from: u8,
    to: u8,
    notation: String,
    capture: bool,
}

#[derive(Serialize)]
struct BoardState {
    tiles: Vec<Option<TilePiece>>,
    current_side: String,
    game_over: bool,
    winner: Option<String>,
    legal_moves: Vec<MoveJson>,
    history: Vec<String>,
    captured_orange: Vec<String>,
    captured_green: Vec<String>,
    orange_ply: u32,
    green_ply: u32,
}

#[derive(Serialize)]
struct MoveResult {
    #[serde(flatten)]
    board_state: Option<BoardState>,
    error: Option<String>,
}

fn kind_to_string(piece: &Piece) -> String {
    format!("{:?}", piece.kind())
}

fn move_to_json(mv: &Move) -> Option<MoveJson> {
    Some(MoveJson {
        from: mv.source()?.into(),
        to: mv.destination()?.into(),
        notation: mv.to_string(),
        capture: mv.is_attack(),
    })
}

fn build_board_state(game: &Game) -> BoardState {
    let board = game.board();
    let tiles = board
        .tiles()
        .iter()
        .map(|tile| {
            tile.piece().map(|p| TilePiece {
                kind: kind_to_string(p),
                side: p.side().to_string(),
                letter: p.letter(),
            })
        })
        .collect();

    BoardState {
        tiles,
        current_side: board.mover().to_string(),
        game_over: game.is_over(),
        winner: game.winner().map(|side| side.to_string()),
        legal_moves: board
            .current_player()
            .legal_moves()
            .iter()
            .filter_map(move_to_json)
            .collect(),
        history: game.history().iter().map(Move::to_string).collect(),
        captured_orange: game.captured(Side::Orange).iter().map(kind_to_string).collect(),
        captured_green: game.captured(Side::Green).iter().map(kind_to_string).collect(),
        orange_ply: game.plies().orange,
        green_ply: game.plies().green,
    }
}

fn state_value(game: &Game) -> JsValue {
    serde_wasm_bindgen::to_value(&build_board_state(game)).unwrap_or(JsValue::NULL)
}

fn error_value(message: String) -> JsValue {
    let err = MoveResult {
        board_state: None,
        error: Some(message),
    };
    serde_wasm_bindgen::to_value(&err).unwrap_or(JsValue::NULL)
}

#[wasm_bindgen(js_name = Game)]
pub struct GameHandle {
    game: Game,
}

#[wasm_bindgen(js_class = Game)]
impl GameHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> GameHandle {
        GameHandle { game: Game::new() }
    }

    pub fn build_timestamp() -> String {
        env!("BUILD_TIMESTAMP").to_string()
    }

    pub fn get_board_state(&self) -> JsValue {
        state_value(&self.game)
    }

    pub fn reset(&mut self) -> JsValue {
        self.game.reset();
        state_value(&self.game)
    }

    pub fn make_move(&mut self, from: u8, to: u8) -> JsValue {
        if self.game.is_over() {
            return error_value("Game is already over".to_string());
        }
        let (Ok(from), Ok(to)) = (Coordinate::try_from(from), Coordinate::try_from(to)) else {
            return error_value("Tile out of range".to_string());
        };
        match self.game.try_move(from, to) {
            MoveStatus::Done => state_value(&self.game),
            MoveStatus::IllegalMove => error_value("Illegal move".to_string()),
        }
    }

    pub fn make_random_move(&mut self) -> JsValue {
        if !self.game.is_over() {
            if let Some(mv) = pick_random_move(self.game.board()) {
                self.game.make_move(mv);
            }
        }
        state_value(&self.game)
    }

    pub fn get_legal_moves_for_square(&self, index: u8) -> JsValue {
        let Ok(from) = Coordinate::try_from(index) else {
            return JsValue::NULL;
        };
        let square_moves: Vec<MoveJson> = self
            .game
            .board()
            .current_player()
            .legal_moves()
            .iter()
            .filter(|m| m.source() == Some(from))
            .filter_map(move_to_json)
            .collect();

        serde_wasm_bindgen::to_value(&square_moves).unwrap_or(JsValue::NULL)
    }

    pub fn save_position(&self) -> String {
        self.game.save()
    }

    pub fn load_position(&mut self, text: &str) -> JsValue {
        match Game::from_position(text) {
            Ok(game) => {
                self.game = game;
                state_value(&self.game)
            }
            Err(e) => error_value(e.to_string()),
        }
    }
}
