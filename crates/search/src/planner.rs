//! Two-phase hand planner.
//!
//! Phase 1 looks for the end-of-hand board with the lowest heuristic value.
//! Phase 2 replays every ordering restricted to the placements phase 1
//! chose, keeps only branches that end on the planned board, and picks the
//! one with the highest player score.

use blokie_core::{left_top_justify, Bitset81, GameState, Hand};
use blokie_engine::{move_score, next_boards, placement_cleared, ScoreConfig};
use blokie_eval::{evaluate, EvalWeights};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::permutations::{pruned_orderings, ALL_ORDERINGS};
use crate::result::SearchResult;

/// Best end-of-hand line found by phase 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardPlan {
    pub evaluation: i32,
    pub boards: [Bitset81; 3],
    pub placements: [Bitset81; 3],
}

impl BoardPlan {
    fn contains_placement(&self, placement: Bitset81) -> bool {
        self.placements.contains(&placement)
    }

    pub fn final_board(&self) -> Bitset81 {
        self.boards[2]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planner {
    pub weights: EvalWeights,
    pub scoring: ScoreConfig,
}

impl Planner {
    pub fn new(weights: EvalWeights, scoring: ScoreConfig) -> Self {
        Self { weights, scoring }
    }

    /// Phase 1. `pieces` must already be left-top justified. Returns `None`
    /// when no ordering places all three pieces.
    pub fn plan_best_boards(&self, board: Bitset81, pieces: [Bitset81; 3]) -> Option<BoardPlan> {
        let board_count = board.count();
        let orderings = pruned_orderings(board, pieces);
        let mut best: Option<BoardPlan> = None;
        let mut leaves = 0usize;

        for (index, &[p0, p1, p2]) in orderings.iter().enumerate() {
            let (c0, c1, c2) = (p0.count(), p1.count(), p2.count());

            for (placement_0, after_0) in next_boards(board, p0) {
                for (placement_1, after_1) in next_boards(after_0, p1) {
                    // same two pieces without a clear: the swapped order
                    // reaches this board too
                    if p0 > p1 && after_1.count() == board_count + c0 + c1 {
                        continue;
                    }
                    for (placement_2, after_2) in next_boards(after_1, p2) {
                        // clear-free leaves were all seen in the sorted order
                        if index > 0 && after_2.count() == board_count + c0 + c1 + c2 {
                            continue;
                        }
                        leaves += 1;
                        let evaluation = evaluate(after_2, &self.weights);
                        if best.map_or(true, |b| evaluation < b.evaluation) {
                            best = Some(BoardPlan {
                                evaluation,
                                boards: [after_0, after_1, after_2],
                                placements: [placement_0, placement_1, placement_2],
                            });
                        }
                    }
                }
            }
        }

        debug!(
            "phase 1: {} orderings, {} leaves, best {:?}",
            orderings.len(),
            leaves,
            best.map(|b| b.evaluation)
        );
        best
    }

    /// Plan a whole hand from `game`. Hand pieces may be in any position on
    /// the frame; the returned states name the pieces as they were passed.
    pub fn ai_make_move(&self, game: &GameState, hand: Hand) -> Result<SearchResult, SearchError> {
        let originals = hand.slots();
        let pieces = originals.map(left_top_justify);
        let board = game.board;

        let plan = match self.plan_best_boards(board, pieces) {
            Some(plan) => plan,
            None => {
                warn!("no placement sequence for hand, game over at {}", game.score);
                return Ok(SearchResult::game_over(game.score));
            }
        };

        let mut best: Option<[GameState; 3]> = None;
        for [i0, i1, i2] in ALL_ORDERINGS {
            let (p0, p1, p2) = (pieces[i0], pieces[i1], pieces[i2]);

            for (placement_0, after_0) in next_boards(board, p0) {
                if !plan.contains_placement(placement_0) {
                    continue;
                }
                for (placement_1, after_1) in next_boards(after_0, p1) {
                    if !plan.contains_placement(placement_1) {
                        continue;
                    }
                    for (placement_2, after_2) in next_boards(after_1, p2) {
                        // other orders of the same placements can skip a
                        // planned clear and end elsewhere
                        if !plan.contains_placement(placement_2) || after_2 != plan.final_board() {
                            continue;
                        }

                        let clear_0 = placement_cleared(board, placement_0, after_0);
                        let clear_1 = placement_cleared(after_0, placement_1, after_1);
                        let clear_2 = placement_cleared(after_1, placement_2, after_2);

                        let score_0 = game.score
                            + move_score(
                                &self.scoring,
                                game.previous_move_was_clear,
                                board,
                                placement_0,
                                after_0,
                            );
                        let score_1 = score_0
                            + move_score(&self.scoring, clear_0, after_0, placement_1, after_1);
                        let score_2 = score_1
                            + move_score(&self.scoring, clear_1, after_1, placement_2, after_2);

                        if let Some(current) = &best {
                            let best_score = current[2].score;
                            // ties go to a hand that ends on a clear, keeping
                            // the streak alive
                            if score_2 < best_score || (score_2 == best_score && !clear_2) {
                                continue;
                            }
                        }
                        trace!("phase 2: ordering {:?} scores {}", [i0, i1, i2], score_2);

                        best = Some([
                            GameState {
                                board: after_0,
                                previous_piece_placement: placement_0,
                                previous_piece: originals[i0],
                                previous_move_was_clear: clear_0,
                                score: score_0,
                            },
                            GameState {
                                board: after_1,
                                previous_piece_placement: placement_1,
                                previous_piece: originals[i1],
                                previous_move_was_clear: clear_1,
                                score: score_1,
                            },
                            GameState {
                                board: after_2,
                                previous_piece_placement: placement_2,
                                previous_piece: originals[i2],
                                previous_move_was_clear: clear_2,
                                score: score_2,
                            },
                        ]);
                    }
                }
            }
        }

        let new_game_states = best.ok_or(SearchError::NoBranch)?;
        debug!(
            "phase 2: evaluation {} score {} -> {}",
            plan.evaluation, game.score, new_game_states[2].score
        );
        Ok(SearchResult {
            evaluation: plan.evaluation,
            new_game_states,
        })
    }
}
