//! Row, column and cube clears.

use blokie_core::Bitset81;

/// Union of every row, column and cube that `board` fully occupies.
pub fn full_regions(board: Bitset81) -> Bitset81 {
    Bitset81::regions()
        .iter()
        .filter(|region| region.is_subset_of(board))
        .fold(Bitset81::EMPTY, |acc, &region| acc | region)
}

/// Remove every fully occupied region at once. Overlapping regions (a row
/// crossing a full cube, say) are all removed in the same pass.
pub fn perform_clears(board: Bitset81) -> Bitset81 {
    board.diff(full_regions(board))
}

/// Whether a step removed cells: fewer cells remain than were on the board
/// plus the piece just placed.
pub fn placement_cleared(before: Bitset81, placement: Bitset81, after: Bitset81) -> bool {
    after.count() < before.count() + placement.count()
}
