//! Random dealing of pieces and boards.

use blokie_core::{center, Bitset81, Hand, PIECES};
use rand::Rng;

/// Uniform pick from the catalog.
pub fn random_piece<R: Rng + ?Sized>(rng: &mut R) -> Bitset81 {
    PIECES[rng.gen_range(0..PIECES.len())]
}

/// Three independent picks; repeats are allowed.
pub fn random_piece_set<R: Rng + ?Sized>(rng: &mut R) -> Hand {
    Hand::new([random_piece(rng), random_piece(rng), random_piece(rng)])
}

/// Like `random_piece_set`, with each piece centered for display.
pub fn random_centered_piece_set<R: Rng + ?Sized>(rng: &mut R) -> Hand {
    let slots = random_piece_set(rng).slots();
    Hand::new(slots.map(center))
}

/// Each cell occupied independently with probability `fullness`.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R, fullness: f64) -> Bitset81 {
    let mut board = Bitset81::EMPTY;
    for r in 0..Bitset81::SIZE {
        for c in 0..Bitset81::SIZE {
            if rng.gen::<f64>() < fullness {
                board = board.toggle(r, c);
            }
        }
    }
    board
}
