pub mod board;
pub mod error;
pub mod game;
pub mod geometry;
pub mod movegen;
pub mod moves;
pub mod piece;
pub mod player;
pub mod position;
pub mod random;
pub mod side;
pub mod tile;

#[cfg(target_arch = "wasm32")]
mod wasm_api;
