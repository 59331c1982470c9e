//! Placement generation: every in-bounds translation of a piece, and the
//! boards those translations produce on a given board.

use blokie_core::{left_top_justify, Bitset81};

use crate::clear::perform_clears;

/// Translations of a left-top justified piece, sliding right until the piece
/// reaches column 8, then dropping a row and restarting at column 0.
///
/// Yields `(10 - width) * (10 - height)` placements; an empty piece yields
/// none. The iterator is `Copy`, so a sequence can be restarted freely.
#[derive(Clone, Copy, Debug)]
pub struct Placements {
    row_start: Bitset81,
    current: Option<Bitset81>,
}

pub fn piece_placements(piece: Bitset81) -> Placements {
    debug_assert_eq!(
        left_top_justify(piece),
        piece,
        "placements expect a left-top justified piece"
    );
    Placements {
        row_start: piece,
        current: piece.any().then_some(piece),
    }
}

impl Iterator for Placements {
    type Item = Bitset81;

    fn next(&mut self) -> Option<Bitset81> {
        let placement = self.current?;
        self.current = if (placement & Bitset81::column(8)).is_empty() {
            Some(placement.shift_right())
        } else if (self.row_start & Bitset81::row(8)).is_empty() {
            self.row_start = self.row_start.shift_down();
            Some(self.row_start)
        } else {
            None
        };
        Some(placement)
    }
}

/// `(placement, board_after_clears)` for every placement that fits on `board`.
#[derive(Clone, Copy, Debug)]
pub struct NextBoards {
    board: Bitset81,
    placements: Placements,
    empty_piece: bool,
}

/// Lazily enumerate the results of dropping `piece` anywhere on `board`.
/// An empty piece (a consumed hand slot) yields the unchanged board once.
pub fn next_boards(board: Bitset81, piece: Bitset81) -> NextBoards {
    NextBoards {
        board,
        placements: piece_placements(piece),
        empty_piece: piece.is_empty(),
    }
}

impl Iterator for NextBoards {
    type Item = (Bitset81, Bitset81);

    fn next(&mut self) -> Option<Self::Item> {
        let board = self.board;
        if self.empty_piece {
            self.empty_piece = false;
            return Some((Bitset81::EMPTY, board));
        }
        self.placements
            .find(|placement| placement.is_disjoint(board))
            .map(|placement| (placement, perform_clears(board | placement)))
    }
}
