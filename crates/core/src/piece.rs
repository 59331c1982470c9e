//! Piece catalog and the geometric transforms over the 9x9 frame.

use crate::Bitset81;

/// Canonical shapes, each left-top justified (touches row 0 and column 0).
pub const PIECES: [Bitset81; 47] = [
    Bitset81::from_fields([1, 0, 0]),
    Bitset81::from_fields([3, 0, 0]),
    Bitset81::from_fields([513, 0, 0]),
    Bitset81::from_fields([1025, 0, 0]),
    Bitset81::from_fields([514, 0, 0]),
    Bitset81::from_fields([7, 0, 0]),
    Bitset81::from_fields([262657, 0, 0]),
    Bitset81::from_fields([1049601, 0, 0]),
    Bitset81::from_fields([263172, 0, 0]),
    Bitset81::from_fields([515, 0, 0]),
    Bitset81::from_fields([1537, 0, 0]),
    Bitset81::from_fields([1538, 0, 0]),
    Bitset81::from_fields([1027, 0, 0]),
    Bitset81::from_fields([15, 0, 0]),
    Bitset81::from_fields([262657, 1, 0]),
    Bitset81::from_fields([1539, 0, 0]),
    Bitset81::from_fields([786945, 0, 0]),
    Bitset81::from_fields([3588, 0, 0]),
    Bitset81::from_fields([525315, 0, 0]),
    Bitset81::from_fields([519, 0, 0]),
    Bitset81::from_fields([262659, 0, 0]),
    Bitset81::from_fields([2055, 0, 0]),
    Bitset81::from_fields([787458, 0, 0]),
    Bitset81::from_fields([3585, 0, 0]),
    Bitset81::from_fields([3586, 0, 0]),
    Bitset81::from_fields([263681, 0, 0]),
    Bitset81::from_fields([525826, 0, 0]),
    Bitset81::from_fields([1031, 0, 0]),
    Bitset81::from_fields([3075, 0, 0]),
    Bitset81::from_fields([263682, 0, 0]),
    Bitset81::from_fields([525825, 0, 0]),
    Bitset81::from_fields([1542, 0, 0]),
    Bitset81::from_fields([31, 0, 0]),
    Bitset81::from_fields([262657, 513, 0]),
    Bitset81::from_fields([265729, 0, 0]),
    Bitset81::from_fields([525319, 0, 0]),
    Bitset81::from_fields([1836034, 0, 0]),
    Bitset81::from_fields([1052164, 0, 0]),
    Bitset81::from_fields([2567, 0, 0]),
    Bitset81::from_fields([787459, 0, 0]),
    Bitset81::from_fields([786947, 0, 0]),
    Bitset81::from_fields([3589, 0, 0]),
    Bitset81::from_fields([262663, 0, 0]),
    Bitset81::from_fields([1050631, 0, 0]),
    Bitset81::from_fields([1837060, 0, 0]),
    Bitset81::from_fields([1835521, 0, 0]),
    Bitset81::from_fields([527874, 0, 0]),
];

/// Quarter turn clockwise about the frame: (r, c) -> (c, 8 - r).
pub fn rotate(bb: Bitset81) -> Bitset81 {
    bb.cells().map(|(r, c)| (c, 8 - r)).collect()
}

/// Horizontal flip: (r, c) -> (r, 8 - c).
pub fn mirror(bb: Bitset81) -> Bitset81 {
    bb.cells().map(|(r, c)| (r, 8 - c)).collect()
}

/// The 8 symmetries of the square: each of 4 rotations, plain then mirrored.
pub fn all_transformations(bb: Bitset81) -> [Bitset81; 8] {
    let mut out = [Bitset81::EMPTY; 8];
    let mut rotated = bb;
    for i in 0..4 {
        rotated = rotate(rotated);
        out[2 * i] = rotated;
        out[2 * i + 1] = mirror(rotated);
    }
    out
}

/// Width and height of the bounding box measured from row 0 / column 0.
pub fn bounding_box(p: Bitset81) -> (usize, usize) {
    let mut width = 0;
    let mut height = 0;
    for i in 0..Bitset81::SIZE {
        if (p & Bitset81::row(i)).any() {
            height = i + 1;
        }
        if (p & Bitset81::column(i)).any() {
            width = i + 1;
        }
    }
    (width, height)
}

/// Slide up and left until the piece touches row 0 and column 0.
pub fn left_top_justify(mut p: Bitset81) -> Bitset81 {
    if p.is_empty() {
        return p;
    }
    while (p & Bitset81::row(0)).is_empty() {
        p = p.shift_up();
    }
    while (p & Bitset81::column(0)).is_empty() {
        p = p.shift_left();
    }
    p
}

/// Display form: a justified piece nudged toward the middle of a 5x5 box.
/// Odd slack rounds toward the right / bottom.
pub fn center(mut p: Bitset81) -> Bitset81 {
    let (width, height) = bounding_box(p);
    for _ in 0..(6usize.saturating_sub(width)) / 2 {
        p = p.shift_right();
    }
    for _ in 0..(6usize.saturating_sub(height)) / 2 {
        p = p.shift_down();
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        for p in PIECES {
            assert!((1..=5).contains(&p.count()), "{p:?}");
            for i in 5..9 {
                assert!((p & Bitset81::row(i)).is_empty());
                assert!((p & Bitset81::column(i)).is_empty());
            }
        }
    }

    #[test]
    fn test_catalog_is_justified() {
        for p in PIECES {
            assert_eq!(left_top_justify(p), p);
            assert_ne!(p.shift_left().count(), p.count());
            assert_ne!(p.shift_up().count(), p.count());
            assert_eq!(p.shift_right().shift_left(), p);
            assert_eq!(p.shift_down().shift_up(), p);
        }
    }

    #[test]
    fn test_center_then_justify() {
        for p in PIECES {
            let centered = center(p);
            assert_eq!(centered.count(), p.count());
            assert_eq!(left_top_justify(centered), p);
        }
    }

    #[test]
    fn test_center_single_cell() {
        assert_eq!(center(PIECES[0]), Bitset81::bit(2, 2));
        assert_eq!(center(PIECES[32]), PIECES[32].shift_down().shift_down());
        // two wide: slack of 3 rounds right
        assert!(center(PIECES[1]).at(2, 2));
        assert!(center(PIECES[1]).at(2, 3));
    }

    #[test]
    fn test_justify_empty_is_noop() {
        assert_eq!(left_top_justify(Bitset81::EMPTY), Bitset81::EMPTY);
    }

    #[test]
    fn test_rotate_corners() {
        let p = PIECES[0];
        assert_eq!(rotate(Bitset81::EMPTY), Bitset81::EMPTY);
        assert_eq!(rotate(Bitset81::FULL), Bitset81::FULL);
        assert_eq!(rotate(p), Bitset81::bit(0, 8));
        assert_eq!(rotate(rotate(p)), Bitset81::bit(8, 8));
        assert_eq!(rotate(rotate(rotate(p))), Bitset81::bit(8, 0));
    }

    #[test]
    fn test_rotate_preserves_shape() {
        for p in PIECES {
            let once = rotate(p);
            assert_eq!(once.count(), p.count());
            assert_eq!(rotate(rotate(rotate(once))), p);
            // justified to the top-right after one turn
            assert_ne!(once.shift_right().count(), once.count());
            assert_ne!(once.shift_up().count(), once.count());
        }
    }

    #[test]
    fn test_mirror() {
        assert_eq!(mirror(Bitset81::EMPTY), Bitset81::EMPTY);
        assert_eq!(mirror(Bitset81::FULL), Bitset81::FULL);
        assert_ne!(mirror(PIECES[0]), PIECES[0]);
        for p in PIECES {
            assert_eq!(mirror(p).count(), p.count());
            assert_eq!(mirror(mirror(p)), p);
        }
    }

    #[test]
    fn test_all_transformations() {
        assert!(all_transformations(Bitset81::EMPTY)
            .iter()
            .all(|t| *t == Bitset81::EMPTY));
        assert!(all_transformations(Bitset81::FULL)
            .iter()
            .all(|t| *t == Bitset81::FULL));
        let corners = all_transformations(PIECES[0]);
        for corner in [(0, 0), (0, 8), (8, 0), (8, 8)] {
            assert!(corners.contains(&Bitset81::bit(corner.0, corner.1)));
        }
    }

    #[test]
    fn test_bounding_box() {
        assert_eq!(bounding_box(PIECES[0]), (1, 1));
        assert_eq!(bounding_box(PIECES[32]), (5, 1));
        assert_eq!(bounding_box(PIECES[33]), (1, 5));
        assert_eq!(bounding_box(Bitset81::EMPTY), (0, 0));
    }
}
