//! Blokie search crate - plans a whole hand of three pieces at once.
//!
//! [`ai_make_move`] is the entry point. Everything here is deterministic
//! given its inputs; randomness only enters through the dealing helpers
//! used by [`AutoPlayer`] and the self-play samples.

mod driver;
mod error;
pub mod permutations;
mod planner;
mod result;
mod sample;

pub use driver::{AutoPlayer, Step};
pub use error::SearchError;
pub use planner::{BoardPlan, Planner};
pub use result::SearchResult;
pub use sample::{fitness_sample, performance_sample, FitnessSample};

use blokie_core::{Bitset81, GameState, Hand};

pub fn new_game() -> GameState {
    GameState::new()
}

pub fn is_over(game: &GameState) -> bool {
    game.is_over()
}

/// Flip one cell. Used for hand-editing boards and pieces.
pub fn toggle_square(board: Bitset81, row: usize, col: usize) -> Bitset81 {
    board.toggle(row, col)
}

/// Plan `hand` from `game` with the default weights and scoring rules.
pub fn ai_make_move(game: &GameState, hand: Hand) -> Result<SearchResult, SearchError> {
    Planner::default().ai_make_move(game, hand)
}
