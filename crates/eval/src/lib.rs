//! Blokie eval crate - structural heuristic for ranking end-of-hand boards.
//!
//! Lower is better: the score approximates how awkward a board is to keep
//! playing on. Every term is symmetric under rotation and mirroring, so the
//! total is too. This is not the player-visible score.

use blokie_core::Bitset81;
use serde::{Deserialize, Serialize};

/// Hand-tuned weights. Magnitudes matter only relative to each other.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalWeights {
    pub occupied_side_square: i32,
    pub occupied_center_square: i32,
    pub occupied_corner_square: i32,
    pub side_cube: i32,
    pub corner_cube: i32,
    pub center_cube: i32,
    pub squashed_empty_middle: i32,
    pub squashed_empty_edge: i32,
    pub alternating_unaligned: i32,
    pub alternating_aligned: i32,
    pub cornered_empty: i32,
    pub deadly_piece: i32,
    pub three_bar: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            occupied_side_square: 2000,
            occupied_center_square: 1607,
            occupied_corner_square: 3067,
            side_cube: 1358,
            corner_cube: 908,
            center_cube: 204,
            squashed_empty_middle: 524,
            squashed_empty_edge: 3386,
            alternating_unaligned: 4450,
            alternating_aligned: 1776,
            cornered_empty: 6540,
            deadly_piece: 18185,
            three_bar: 2665,
        }
    }
}

const EDGES: Bitset81 = Bitset81::column(0)
    .or(Bitset81::column(8))
    .or(Bitset81::row(0))
    .or(Bitset81::row(8));

// Cube boundaries, seen from the open cell: an empty cell blocked from above
// is "aligned" when it sits on the top row of a cube.
const ALIGNED_BLOCKED_UP: Bitset81 = Bitset81::row(3).or(Bitset81::row(6));
const ALIGNED_BLOCKED_DOWN: Bitset81 = Bitset81::row(2).or(Bitset81::row(5));
const ALIGNED_BLOCKED_LEFT: Bitset81 = Bitset81::column(3).or(Bitset81::column(6));
const ALIGNED_BLOCKED_RIGHT: Bitset81 = Bitset81::column(2).or(Bitset81::column(5));

/// Open cells whose neighbour in each direction is occupied or off-board.
struct Blocked {
    up: Bitset81,
    down: Bitset81,
    left: Bitset81,
    right: Bitset81,
}

impl Blocked {
    fn new(open: Bitset81) -> Self {
        Self {
            up: open.diff(open.shift_down()),
            down: open.diff(open.shift_up()),
            left: open.diff(open.shift_right()),
            right: open.diff(open.shift_left()),
        }
    }
}

#[inline]
fn n(count: u32) -> i32 {
    count as i32
}

pub fn evaluate(board: Bitset81, weights: &EvalWeights) -> i32 {
    let open = !board;
    let blocked = Blocked::new(open);

    occupied_cubes(board, weights)
        + alternating(&blocked, weights)
        + squashed_empty(&blocked, weights)
        + cornered_empty(&blocked, weights)
        + three_bar(open, weights)
        + deadly_shapes(open, weights)
}

fn occupied_cubes(board: Bitset81, w: &EvalWeights) -> i32 {
    let mut score = 0;
    for i in 0..9 {
        let cells = n((Bitset81::cube(i) & board).count());
        if cells == 0 {
            continue;
        }
        score += match i {
            4 => w.center_cube + w.occupied_center_square * cells,
            1 | 3 | 5 | 7 => w.side_cube + w.occupied_side_square * cells,
            _ => w.corner_cube + w.occupied_corner_square * cells,
        };
    }
    score
}

/// Blocked cells per direction, split by whether they sit on a cube
/// boundary. An empty board has exactly 9 unaligned blocked cells per
/// direction (the outer edge), which the offset cancels.
fn alternating(blocked: &Blocked, w: &EvalWeights) -> i32 {
    [
        (blocked.up, ALIGNED_BLOCKED_UP),
        (blocked.left, ALIGNED_BLOCKED_LEFT),
        (blocked.right, ALIGNED_BLOCKED_RIGHT),
        (blocked.down, ALIGNED_BLOCKED_DOWN),
    ]
    .iter()
    .map(|&(cells, aligned)| {
        (n(cells.count_diff(aligned)) - 9) * w.alternating_unaligned
            + n(cells.count_intersection(aligned)) * w.alternating_aligned
    })
    .sum()
}

/// Empty cells pinched between two opposite blocked sides.
fn squashed_empty(blocked: &Blocked, w: &EvalWeights) -> i32 {
    [blocked.down & blocked.up, blocked.left & blocked.right]
        .iter()
        .map(|&squashed| {
            n(squashed.count_diff(EDGES)) * w.squashed_empty_middle
                + n(squashed.count_intersection(EDGES)) * w.squashed_empty_edge
        })
        .sum()
}

/// Empty cells boxed in on two perpendicular sides, ignoring the two board
/// edges that make up that corner.
fn cornered_empty(blocked: &Blocked, w: &EvalWeights) -> i32 {
    let corners = [
        (blocked.up & blocked.left, Bitset81::row(0) | Bitset81::column(0)),
        (blocked.up & blocked.right, Bitset81::row(0) | Bitset81::column(8)),
        (blocked.down & blocked.left, Bitset81::row(8) | Bitset81::column(0)),
        (blocked.down & blocked.right, Bitset81::row(8) | Bitset81::column(8)),
    ];
    corners
        .iter()
        .map(|&(cells, edges)| n(cells.count_diff(edges)) * w.cornered_empty)
        .sum()
}

/// `open_*` sets hold the cells whose neighbour in that direction is open.
struct Neighbours {
    open: Bitset81,
    left: Bitset81,
    left_2: Bitset81,
    right: Bitset81,
    right_2: Bitset81,
    up: Bitset81,
    up_2: Bitset81,
    down: Bitset81,
    down_2: Bitset81,
}

impl Neighbours {
    fn new(open: Bitset81) -> Self {
        let left = open.shift_right();
        let right = open.shift_left();
        let up = open.shift_down();
        let down = open.shift_up();
        Self {
            open,
            left,
            left_2: left.shift_right(),
            right,
            right_2: right.shift_left(),
            up,
            up_2: up.shift_down(),
            down,
            down_2: down.shift_up(),
        }
    }
}

/// Open cells that no straight 3-cell bar could cover, counted once per
/// orientation.
fn three_bar(open: Bitset81, w: &EvalWeights) -> i32 {
    let o = Neighbours::new(open);

    let open_left = open & o.left;
    let open_right = open & o.right;
    let horizontal = (open_left & o.right) | (open_left & o.left_2) | (open_right & o.right_2);

    let open_up = open & o.up;
    let open_down = open & o.down;
    let vertical = (open_up & o.down) | (open_up & o.up_2) | (open_down & o.down_2);

    n(open.count_diff(horizontal)) * w.three_bar + n(open.count_diff(vertical)) * w.three_bar
}

/// One flat penalty per 5-cell shape that fits nowhere on the board.
fn deadly_shapes(open: Bitset81, w: &EvalWeights) -> i32 {
    let o = Neighbours::new(open);

    let open_left = o.open & o.left;
    let open_right = o.open & o.right;
    let open_up = o.open & o.up;
    let open_down = o.open & o.down;

    // open for two more cells in one direction
    let reach_left = open_left & (o.open & o.left_2);
    let reach_right = open_right & (o.open & o.right_2);
    let reach_up = open_up & (o.open & o.up_2);
    let reach_down = open_down & (o.open & o.down_2);

    let through_horizontal = open_left & open_right;
    let through_vertical = open_up & open_down;

    let up_left = o.up.shift_right();
    let down_left = o.down.shift_right();
    let up_right = o.up.shift_left();
    let down_right = o.down.shift_left();

    let shapes = [
        // 5-bar
        (reach_left, reach_right),
        (reach_up, reach_down),
        // L
        (reach_up, reach_right),
        (reach_up, reach_left),
        (reach_down, reach_right),
        (reach_down, reach_left),
        // T
        (through_horizontal, reach_down),
        (through_horizontal, reach_up),
        (through_vertical, reach_left),
        (through_vertical, reach_right),
        // plus
        (through_horizontal, through_vertical),
        // 3-step staircase
        (o.open, down_left & up_right),
        (o.open, up_left & down_right),
        // C
        (through_vertical, up_right & down_right),
        (through_vertical, up_left & down_left),
        (through_horizontal, up_left & up_right),
        (through_horizontal, down_left & down_right),
    ];

    n(shapes.iter().filter(|(a, b)| a.is_disjoint(*b)).count() as u32) * w.deadly_piece
}
