//! Blokie core crate - cell sets, piece catalog and game state for the 9x9
//! block puzzle.

mod bitboard;
mod hand;
pub mod piece;
mod state;

pub use bitboard::{Bitset81, Cells};
pub use hand::Hand;
pub use piece::{all_transformations, center, left_top_justify, mirror, rotate, PIECES};
pub use state::GameState;
