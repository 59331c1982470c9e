//! Game state representation.

use crate::Bitset81;
use serde::{Deserialize, Serialize};

/// Board plus the bookkeeping the scorer needs from the previous move.
/// A plain value: search results hand out copies, never references.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct GameState {
    pub board: Bitset81,
    pub previous_piece_placement: Bitset81,
    pub previous_piece: Bitset81,
    pub previous_move_was_clear: bool,
    pub score: u32,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_board(board: Bitset81) -> Self {
        Self {
            board,
            ..Self::default()
        }
    }

    /// A game ends once the search hands back a completely filled board.
    pub fn is_over(&self) -> bool {
        self.board == Bitset81::FULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let s = GameState::new();
        assert!(s.board.is_empty());
        assert!(s.previous_piece_placement.is_empty());
        assert!(s.previous_piece.is_empty());
        assert!(!s.previous_move_was_clear);
        assert_eq!(s.score, 0);
        assert!(!s.is_over());
    }

    #[test]
    fn test_full_board_is_over() {
        assert!(GameState::with_board(Bitset81::FULL).is_over());
        assert!(!GameState::with_board(Bitset81::FULL.toggle(0, 0)).is_over());
    }

    #[test]
    fn test_copies_do_not_alias() {
        let s1 = GameState::new();
        let mut s2 = s1;
        s2.board = s2.board.toggle(4, 4);
        s2.score = 7;
        assert_ne!(s1, s2);
        assert!(s1.board.is_empty());
    }
}
