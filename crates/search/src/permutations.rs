//! Orderings of the three hand pieces.

use blokie_core::Bitset81;
use blokie_engine::next_boards;
use smallvec::SmallVec;

pub type Ordering3 = [Bitset81; 3];

/// Index orderings of a three-piece hand, in the order both search phases
/// visit them.
pub const ALL_ORDERINGS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [0, 2, 1],
    [1, 0, 2],
    [1, 2, 0],
    [2, 0, 1],
    [2, 1, 0],
];

/// The sorted ordering always; the other five only when two of the pieces
/// can complete a region together. Without such an interaction every order
/// reaches the same set of end boards.
pub fn pruned_orderings(board: Bitset81, pieces: [Bitset81; 3]) -> SmallVec<[Ordering3; 6]> {
    let mut sorted = pieces;
    sorted.sort();

    let mut out = SmallVec::new();
    out.push(sorted);
    if !can_clear_with_two_pieces(board, sorted) {
        return out;
    }
    out.extend(
        ALL_ORDERINGS[1..]
            .iter()
            .map(|&[a, b, c]| [sorted[a], sorted[b], sorted[c]]),
    );
    out
}

/// Whether some piece followed by a different piece can remove cells from
/// `board`.
pub fn can_clear_with_two_pieces(board: Bitset81, pieces: [Bitset81; 3]) -> bool {
    let board_count = board.count();
    for (i, &first) in pieces.iter().enumerate() {
        for (_, after_first) in next_boards(board, first) {
            for (j, &second) in pieces.iter().enumerate() {
                if i == j {
                    continue;
                }
                let expected = board_count + first.count() + second.count();
                if next_boards(after_first, second).any(|(_, after)| after.count() < expected) {
                    return true;
                }
            }
        }
    }
    false
}
