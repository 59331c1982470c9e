//! blokie-engine - placement, clearing and scoring rules for the 9x9 block
//! puzzle.
//!
//! Every function here is pure: boards go in by value, new boards come out.

pub mod clear;
pub mod combo;
pub mod config;
pub mod deal;
pub mod placement;
pub mod scoring;

pub use clear::{full_regions, perform_clears, placement_cleared};
pub use combo::combo_magnitude;
pub use config::{ComboTier, ScoreConfig};
pub use deal::{random_board, random_centered_piece_set, random_piece, random_piece_set};
pub use placement::{next_boards, piece_placements, NextBoards, Placements};
pub use scoring::move_score;
