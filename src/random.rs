use crate::board::Board;
use crate::moves::Move;

/// Platform-appropriate random number in [0, 1).
/// Uses js_sys::Math::random() in WASM builds, rand crate natively.
fn random_f64() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use rand::Rng;
        rand::thread_rng().gen::<f64>()
    }
}

/// A uniformly chosen legal move for the side to move, or `None` when it has
/// none.
pub fn pick_random_move(board: &Board) -> Option<Move> {
    let moves = board.current_player().legal_moves();
    if moves.is_empty() {
        return None;
    }
    let index = (random_f64() * moves.len() as f64) as usize;
    moves.get(index.min(moves.len() - 1)).copied()
}

/// Same as `pick_random_move`, drawing from a caller-supplied generator so
/// playouts can be replayed from a seed.
#[cfg(not(target_arch = "wasm32"))]
pub fn pick_random_move_with<R: rand::Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Move> {
    use rand::seq::SliceRandom;
    board.current_player().legal_moves().choose(rng).copied()
}
